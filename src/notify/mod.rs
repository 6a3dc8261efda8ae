//! User-facing feedback collaborators.
//!
//! The core fires messages and badge refreshes into these traits; how they
//! are rendered is the embedder's concern.

mod console;

pub use console::{ConsoleBadge, ConsoleNotifier};

use std::fmt;

use mockall::automock;

/// Visual tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Transient message display, fire-and-forget.
#[automock]
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Derived cart-count indicator, refreshed after every cart mutation.
#[automock]
pub trait CartBadge {
    fn refresh(&self, count: u64);
}
