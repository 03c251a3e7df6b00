use crate::application::interfaces::MarketService;
use crate::{
    error::AppError,
    presentation::market::{PortfolioEntry, StockPrice},
    session::Session,
    transport::HttpTransport,
};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the market data service
pub struct MarketServiceImpl<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> MarketServiceImpl<T> {
    /// Creates a new instance of the market data service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> MarketService for MarketServiceImpl<T> {
    async fn get_stock_prices(&self, session: &Session) -> Result<Vec<StockPrice>, AppError> {
        debug!("Fetching stock prices");

        let data = self
            .transport
            .request(
                Method::GET,
                "/transaction/getStockPrices",
                Some(session),
                None,
            )
            .await?;

        let prices: Vec<StockPrice> = super::list_from(data)?;
        debug!("Fetched {} stock prices", prices.len());
        Ok(prices)
    }

    async fn get_stock_portfolio(
        &self,
        session: &Session,
    ) -> Result<Vec<PortfolioEntry>, AppError> {
        debug!("Fetching stock portfolio");

        let data = self
            .transport
            .request(
                Method::GET,
                "/transaction/getStockPortfolio",
                Some(session),
                None,
            )
            .await?;

        let portfolio: Vec<PortfolioEntry> = super::list_from(data)?;
        debug!("Fetched {} portfolio entries", portfolio.len());
        Ok(portfolio)
    }
}
