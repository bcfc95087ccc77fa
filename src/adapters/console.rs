use crate::domain::ports::LoginView;
use crate::utils::error::LoginError;

/// Renders the controller's notifications on the terminal.
#[derive(Debug, Clone, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl LoginView for ConsoleView {
    fn show_loader(&self) {
        eprintln!("⏳ Logging in...");
    }

    fn hide_loader(&self) {
        tracing::debug!("loader hidden");
    }

    fn show_error(&self, error: &LoginError) {
        eprintln!("❌ {}", error);
    }

    fn open_next_screen(&self) {
        println!("✅ Logged in");
    }
}
