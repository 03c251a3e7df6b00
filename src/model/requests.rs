use crate::config::Credentials;
use crate::error::AppError;
use crate::presentation::order::OrderType;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body for `POST /authentication/login`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username of the account
    pub user_name: String,
    /// Password of the account
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        LoginRequest {
            user_name: credentials.user_name.clone(),
            password: credentials.password.clone(),
        }
    }
}

/// Body for `POST /authentication/register`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Username of the new account
    pub user_name: String,
    /// Display name of the new account
    pub name: String,
    /// Password of the new account
    pub password: String,
}

/// Body for `POST /engine/placeStockOrder`
///
/// Validated client-side before any network call: a limit order requires a
/// positive price, a market order must not carry one.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    /// Instrument to trade
    pub stock_id: String,
    /// Buy or sell direction
    pub is_buy: bool,
    /// Order type
    pub order_type: OrderType,
    /// Number of shares, must be positive
    pub quantity: u32,
    /// Limit price; present exactly when `order_type` is `Limit`
    pub price: Option<f64>,
}

impl PlaceOrderRequest {
    /// Creates a market order request
    pub fn market(stock_id: impl Into<String>, is_buy: bool, quantity: u32) -> Self {
        PlaceOrderRequest {
            stock_id: stock_id.into(),
            is_buy,
            order_type: OrderType::Market,
            quantity,
            price: None,
        }
    }

    /// Creates a limit order request
    pub fn limit(stock_id: impl Into<String>, is_buy: bool, quantity: u32, price: f64) -> Self {
        PlaceOrderRequest {
            stock_id: stock_id.into(),
            is_buy,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
        }
    }

    /// Rejects malformed parameters before they cost a round trip
    pub fn validate(&self) -> Result<(), AppError> {
        if self.quantity == 0 {
            return Err(AppError::InvalidInput(
                "quantity must be a positive integer".to_string(),
            ));
        }
        match (self.order_type, self.price) {
            (OrderType::Limit, None) => Err(AppError::InvalidInput(
                "a limit order requires a price".to_string(),
            )),
            (OrderType::Limit, Some(price)) if price <= 0.0 => Err(AppError::InvalidInput(
                "a limit order requires a positive price".to_string(),
            )),
            (OrderType::Market, Some(_)) => Err(AppError::InvalidInput(
                "a market order must not carry a price".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Body for `POST /engine/cancelStockTransaction`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    /// Transaction to cancel
    pub stock_tx_id: String,
}

/// Body for `POST /transaction/addMoneyToWallet`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct AddMoneyRequest {
    /// Amount to deposit, must be positive
    pub amount: f64,
}

impl AddMoneyRequest {
    /// Rejects non-positive deposits before they cost a round trip
    pub fn validate(&self) -> Result<(), AppError> {
        if self.amount <= 0.0 {
            return Err(AppError::InvalidInput(
                "deposit amount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
