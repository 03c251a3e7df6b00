//! # Nightrader Client Prelude
//!
//! Convenient imports for the most commonly used types and traits. Most
//! programs built on this crate only need:
//!
//! ```rust
//! use nightrader_client::prelude::*;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Nightrader client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION AND TRANSPORT
// ============================================================================

/// Explicit session values and the process-wide store
pub use crate::session::{Session, SessionStore};

/// Transport seam and the reqwest implementation
pub use crate::transport::{HttpTransport, RestClient};

// ============================================================================
// CORE SERVICES (TRAITS AND IMPLEMENTATIONS)
// ============================================================================

pub use crate::application::interfaces::{AuthService, MarketService, OrderService, WalletService};
pub use crate::application::services::{
    AuthServiceImpl, MarketServiceImpl, OrderServiceImpl, WalletServiceImpl,
};

// ============================================================================
// DOMAIN TYPES
// ============================================================================

pub use crate::model::requests::{AddMoneyRequest, PlaceOrderRequest};
pub use crate::presentation::market::{PortfolioEntry, StockPrice};
pub use crate::presentation::order::{
    OrderRow, OrderStatus, OrderType, SortColumn, SortDirection, StockOrder, filter_by_stock,
    has_pending, rows_with_totals, sort_rows,
};
pub use crate::presentation::wallet::WalletTransaction;

// ============================================================================
// POLLING AND ALERTS
// ============================================================================

pub use crate::alert::{AlertKind, AlertNotifier, TracingAlertNotifier};
pub use crate::poller::{OrderStatusPoller, PollHandle};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
