//! Console collaborators used by the CLI.

use super::{CartBadge, Notifier, Severity};

/// Prints notification toasts as `[severity]` lines on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        eprintln!("[{severity}] {message}");
    }
}

/// Prints the running item count, standing in for the cart icon badge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleBadge;

impl CartBadge for ConsoleBadge {
    fn refresh(&self, count: u64) {
        let label = if count == 1 { "item" } else { "items" };

        println!("cart: {count} {label}");
    }
}
