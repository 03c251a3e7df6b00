use crate::error::AppError;
use crate::presentation::market::{PortfolioEntry, StockPrice};
use crate::session::Session;

use async_trait::async_trait;

#[async_trait]
/// Service for market data reads against the Nightrader transaction endpoints
pub trait MarketService: Send + Sync {
    /// Lists tradable instruments and their current prices
    async fn get_stock_prices(&self, session: &Session) -> Result<Vec<StockPrice>, AppError>;

    /// Lists owned quantities per instrument
    async fn get_stock_portfolio(
        &self,
        session: &Session,
    ) -> Result<Vec<PortfolioEntry>, AppError>;
}
