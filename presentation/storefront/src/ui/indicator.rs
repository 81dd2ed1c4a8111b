use std::io::Write;
use std::sync::Mutex;

use business::domain::display::CountIndicator;

/// Prints a badge line such as `[cart-count] 3` or `[cart-count] hidden`.
///
/// The text is buffered and the line is written when visibility is set, which
/// is always the second half of a badge refresh.
pub struct ConsoleIndicator {
    label: &'static str,
    text: Mutex<String>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleIndicator {
    pub fn new(label: &'static str, out: Box<dyn Write + Send>) -> Self {
        Self {
            label,
            text: Mutex::new(String::new()),
            out: Mutex::new(out),
        }
    }

    pub fn stdout(label: &'static str) -> Self {
        Self::new(label, Box::new(std::io::stdout()))
    }
}

impl CountIndicator for ConsoleIndicator {
    fn set_text(&self, text: &str) {
        if let Ok(mut current) = self.text.lock() {
            *current = text.to_string();
        }
    }

    fn set_visible(&self, visible: bool) {
        let text = match self.text.lock() {
            Ok(current) if visible => current.clone(),
            _ => "hidden".to_string(),
        };
        if let Ok(mut out) = self.out.lock() {
            if let Err(e) = writeln!(out, "[{}] {}", self.label, text) {
                tracing::debug!("Cannot print {} badge: {}", self.label, e);
            }
        }
    }
}
