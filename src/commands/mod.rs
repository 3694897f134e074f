//! Interface-facing handlers.
//!
//! Entry points for the CLI (or any other shell) to drive the client. Handlers
//! resolve input and forward to the `services` layer; they hold no business logic.

pub mod files;
pub mod session;
pub mod uploads;

use crate::services::upload_coordinator::Notifier;

/// Notifier that writes alerts to standard error.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
