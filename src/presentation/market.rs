use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A tradable instrument and its current price
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct StockPrice {
    /// Instrument identifier
    pub stock_id: String,
    /// Display name of the instrument
    pub stock_name: String,
    /// Current unit price
    pub current_price: f64,
}

/// An owned position in the user's portfolio
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PortfolioEntry {
    /// Instrument identifier
    pub stock_id: String,
    /// Display name of the instrument
    pub stock_name: String,
    /// Number of shares owned
    pub quantity_owned: f64,
}
