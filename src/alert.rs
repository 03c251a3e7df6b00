//! Alert notifier collaborator contract
//!
//! The core surfaces user-facing outcomes through [`AlertNotifier`]:
//! fire-and-forget, no acknowledgment, no delivery guarantee beyond call
//! order. The core never blocks on it. A UI layer would route these into
//! toasts; the default implementation logs them.

use tracing::{error, info};

/// Kind of user-facing alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// An operation completed as requested
    Success,
    /// An operation failed; the message carries the backend text verbatim
    Error,
}

/// Fire-and-forget channel for user-facing messages
pub trait AlertNotifier: Send + Sync {
    /// Surfaces one message to the user
    fn notify(&self, kind: AlertKind, message: &str);
}

/// Notifier that writes alerts to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertNotifier;

impl AlertNotifier for TracingAlertNotifier {
    fn notify(&self, kind: AlertKind, message: &str) {
        match kind {
            AlertKind::Success => info!("{message}"),
            AlertKind::Error => error!("{message}"),
        }
    }
}
