use std::io::{BufRead, Write};

use chrono::NaiveDate;

use business::domain::events::errors::EventSourceError;
use business::domain::events::model::StorefrontEvent;
use business::domain::events::source::EventSource;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use super::dto::ProductRequest;

#[derive(Debug, PartialEq)]
pub enum Command {
    Event(StorefrontEvent),
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("command.unknown")]
    Unknown,
    #[error("command.missing_argument")]
    MissingArgument,
    #[error("command.invalid_product")]
    InvalidProduct(#[from] serde_json::Error),
    #[error("command.invalid_quantity")]
    InvalidQuantity,
    #[error("product.id_empty")]
    Product(#[from] ProductError),
}

/// Splits off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(index) => (&input[..index], input[index..].trim()),
        None => (input, ""),
    }
}

fn product(args: &str) -> Result<Product, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgument);
    }
    let request: ProductRequest = serde_json::from_str(args)?;
    Ok(request.into_domain()?)
}

fn product_id(args: &str) -> Result<ProductId, CommandError> {
    let (id, _) = split_word(args);
    if id.is_empty() {
        return Err(CommandError::MissingArgument);
    }
    Ok(ProductId::new(id)?)
}

/// Parses one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str, today: NaiveDate) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (scope, rest) = split_word(line);
    let (action, args) = split_word(rest);

    let event = match (scope, action) {
        ("quit" | "exit", _) => return Ok(Some(Command::Quit)),
        ("checkout", coupon) => StorefrontEvent::Checkout {
            coupon_code: (!coupon.is_empty()).then(|| coupon.to_string()),
            today,
        },
        ("cart", "add") => StorefrontEvent::AddToCart(product(args)?),
        ("cart", "remove") => StorefrontEvent::RemoveFromCart(product_id(args)?),
        ("cart", "qty") => {
            let (id, quantity) = split_word(args);
            if quantity.is_empty() {
                return Err(CommandError::MissingArgument);
            }
            StorefrontEvent::UpdateCartQuantity {
                product_id: product_id(id)?,
                quantity: quantity
                    .parse()
                    .map_err(|_| CommandError::InvalidQuantity)?,
            }
        }
        ("cart", "clear") => StorefrontEvent::ClearCart,
        ("cart", "list" | "total") => StorefrontEvent::ShowCart,
        ("wishlist", "add") => StorefrontEvent::AddToWishlist(product(args)?),
        ("wishlist", "remove") => StorefrontEvent::RemoveFromWishlist(product_id(args)?),
        ("wishlist", "clear") => StorefrontEvent::ClearWishlist,
        ("wishlist", "list") => StorefrontEvent::ShowWishlist,
        _ => return Err(CommandError::Unknown),
    };
    Ok(Some(Command::Event(event)))
}

/// Reads one command per line. Bad lines are reported and skipped; `quit`
/// or end of input ends the session.
pub struct TerminalEventSource<R: BufRead> {
    reader: R,
    errors: Box<dyn Write + Send>,
    today: Box<dyn Fn() -> NaiveDate + Send>,
}

impl<R: BufRead> TerminalEventSource<R> {
    pub fn new(reader: R, errors: Box<dyn Write + Send>) -> Self {
        Self {
            reader,
            errors,
            today: Box::new(|| chrono::Local::now().date_naive()),
        }
    }

    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + Send + 'static) -> Self {
        self.today = Box::new(today);
        self
    }
}

impl<R: BufRead> EventSource for TerminalEventSource<R> {
    fn next_event(&mut self) -> Result<Option<StorefrontEvent>, EventSourceError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_command(&line, (self.today)()) {
                Ok(Some(Command::Event(event))) => return Ok(Some(event)),
                Ok(Some(Command::Quit)) => return Ok(None),
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("Rejected input line {:?}: {}", line.trim(), e);
                    if let Err(write_error) = writeln!(self.errors, "error: {} ({})", e, line.trim()) {
                        tracing::debug!("Cannot report rejected line: {}", write_error);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        parse_command(line, today())
    }

    fn id(value: &str) -> ProductId {
        ProductId::new(value).unwrap()
    }

    #[test]
    fn should_parse_cart_add_with_json_payload() {
        let command = parse(r#"cart add {"id":"p1","price":1000,"name":"Formula Pro"}"#)
            .unwrap()
            .unwrap();

        let Command::Event(StorefrontEvent::AddToCart(product)) = command else {
            panic!("expected add to cart, got {:?}", command);
        };
        assert_eq!(product.id, id("p1"));
        assert_eq!(product.price, 1000);
        assert_eq!(product.attributes["name"], "Formula Pro");
    }

    #[test]
    fn should_parse_quantity_update() {
        assert_eq!(
            parse("cart qty p1 -2").unwrap(),
            Some(Command::Event(StorefrontEvent::UpdateCartQuantity {
                product_id: id("p1"),
                quantity: -2,
            }))
        );
    }

    #[test]
    fn should_parse_removals_and_listings() {
        assert_eq!(
            parse("cart remove p1").unwrap(),
            Some(Command::Event(StorefrontEvent::RemoveFromCart(id("p1"))))
        );
        assert_eq!(
            parse("wishlist remove p2").unwrap(),
            Some(Command::Event(StorefrontEvent::RemoveFromWishlist(id("p2"))))
        );
        assert_eq!(
            parse("wishlist list").unwrap(),
            Some(Command::Event(StorefrontEvent::ShowWishlist))
        );
        assert_eq!(
            parse("cart total").unwrap(),
            Some(Command::Event(StorefrontEvent::ShowCart))
        );
    }

    #[test]
    fn should_parse_checkout_with_and_without_coupon() {
        assert_eq!(
            parse("checkout").unwrap(),
            Some(Command::Event(StorefrontEvent::Checkout {
                coupon_code: None,
                today: today(),
            }))
        );
        assert_eq!(
            parse("checkout WELCOME10").unwrap(),
            Some(Command::Event(StorefrontEvent::Checkout {
                coupon_code: Some("WELCOME10".to_string()),
                today: today(),
            }))
        );
    }

    #[test]
    fn should_skip_blank_lines_and_comments() {
        assert!(parse("   ").unwrap().is_none());
        assert!(parse("# add a bottle washer").unwrap().is_none());
    }

    #[test]
    fn should_recognize_quit() {
        assert_eq!(parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn should_reject_bad_input() {
        assert!(matches!(parse("cart fly"), Err(CommandError::Unknown)));
        assert!(matches!(parse("cart remove"), Err(CommandError::MissingArgument)));
        assert!(matches!(parse("cart qty p1 many"), Err(CommandError::InvalidQuantity)));
        assert!(matches!(parse("cart add {oops"), Err(CommandError::InvalidProduct(_))));
        assert!(matches!(
            parse(r#"wishlist add {"id":"","price":1}"#),
            Err(CommandError::Product(ProductError::IdEmpty))
        ));
    }

    #[test]
    fn should_skip_bad_lines_and_stop_at_quit() {
        let input = "cart list\nnonsense\n\nwishlist list\nquit\ncart clear\n";
        let mut source =
            TerminalEventSource::new(Cursor::new(input), Box::new(std::io::sink()))
                .with_clock(today);

        assert_eq!(source.next_event().unwrap(), Some(StorefrontEvent::ShowCart));
        assert_eq!(source.next_event().unwrap(), Some(StorefrontEvent::ShowWishlist));
        assert_eq!(source.next_event().unwrap(), None);
    }

    #[test]
    fn should_end_at_end_of_input() {
        let mut source = TerminalEventSource::new(Cursor::new(""), Box::new(std::io::sink()));

        assert!(source.next_event().unwrap().is_none());
    }

    struct BrokenPipe;

    impl std::io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn should_keep_reading_when_error_output_is_closed() {
        let mut source =
            TerminalEventSource::new(Cursor::new("nonsense\ncart list\n"), Box::new(BrokenPipe))
                .with_clock(today);

        assert_eq!(source.next_event().unwrap(), Some(StorefrontEvent::ShowCart));
    }
}
