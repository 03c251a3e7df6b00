//! # Nightrader Client
//!
//! Client-side trading core for the Nightrader simulated stock exchange.
//!
//! This crate implements everything a trading front end needs short of actual
//! rendering:
//! - Session management (opaque bearer token, explicit `Session` values passed
//!   through every call, no ambient globals)
//! - A typed REST client for the Nightrader backend: authentication, wallet,
//!   stock prices, portfolio, order placement and cancellation
//! - The **Order Status Poller**, a cancellable state machine that keeps a
//!   transaction table eventually consistent with the backend while any order
//!   is still `IN_PROGRESS`
//!
//! ## Example
//! ```ignore
//! use nightrader_client::prelude::*;
//!
//! let config = Arc::new(Config::new());
//! let transport = Arc::new(RestClient::new(config.clone()));
//! let auth = AuthServiceImpl::new(transport.clone());
//!
//! let session = auth.login(&config.credentials).await?;
//! let orders = OrderServiceImpl::new(transport.clone());
//! orders.place_order(&session, &PlaceOrderRequest::market("1", true, 10)).await?;
//!
//! let poller = OrderStatusPoller::new(
//!     Arc::new(orders),
//!     Arc::new(TracingAlertNotifier),
//!     session,
//!     Some("1".to_string()),
//!     config.poll_interval(),
//! );
//! let handle = poller.start();
//! // ... read poller.snapshot().await while the view is mounted ...
//! handle.stop();
//! ```

/// Alert notifier collaborator contract and default implementation
pub mod alert;
/// Service traits and implementations for the backend API surface
pub mod application;
/// Configuration loaded from the environment
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types for all fallible operations
pub mod error;
/// Request and response body types
pub mod model;
/// Order status polling state machine
pub mod poller;
/// Commonly used types, re-exported
pub mod prelude;
/// Wire-facing domain types (orders, wallet, market data)
pub mod presentation;
/// Session token handling
pub mod session;
/// HTTP transport seam over reqwest
pub mod transport;
/// Environment and logging helpers
pub mod utils;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
pub fn version() -> &'static str {
    VERSION
}
