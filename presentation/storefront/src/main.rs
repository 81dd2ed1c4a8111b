use std::io::{self, BufReader};

use dotenvy::dotenv;

mod config;
mod setup;
mod ui;

use config::app_config::AppConfig;
use setup::dependency_injection::{DependencyContainer, Surfaces};
use setup::session::Session;
use ui::terminal::TerminalEventSource;

/// Storefront Entry Point
///
/// Restores the shopper's cart and wishlist, then reacts to one command per
/// stdin line until `quit` or end of input.
///
/// - config/: Storage location and shop money settings
/// - setup/: Dependency wiring and the event loop
/// - ui/: Terminal event source, count badges and listings
fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();
    let surfaces = Surfaces::console(&config.shop.settings.currency_symbol);

    // 4. Wire dependencies and restore stored state
    let container = DependencyContainer::new(config, surfaces)?;

    // 5. Run the session
    let mut source = TerminalEventSource::new(BufReader::new(io::stdin()), Box::new(io::stderr()));
    Session::run(container, &mut source)?;

    Ok(())
}
