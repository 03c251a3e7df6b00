/// Authentication service implementation
pub mod auth_service;
/// Market data service implementation
pub mod market_service;
/// Order service implementation
pub mod order_service;
/// Wallet service implementation
pub mod wallet_service;

pub use auth_service::AuthServiceImpl;
pub use market_service::MarketServiceImpl;
pub use order_service::OrderServiceImpl;
pub use wallet_service::WalletServiceImpl;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes a list payload, treating `null` as an empty list.
///
/// The backend marshals empty collections as `null`, so list endpoints must
/// tolerate it.
pub(crate) fn list_from<T: DeserializeOwned>(data: Value) -> Result<Vec<T>, AppError> {
    if data.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(data)?)
}
