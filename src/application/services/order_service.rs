use crate::application::interfaces::OrderService;
use crate::{
    error::AppError,
    model::requests::{CancelOrderRequest, PlaceOrderRequest},
    presentation::order::{StockOrder, filter_by_stock},
    session::Session,
    transport::HttpTransport,
};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the order service
pub struct OrderServiceImpl<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> OrderServiceImpl<T> {
    /// Creates a new instance of the order service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> OrderService for OrderServiceImpl<T> {
    async fn place_order(
        &self,
        session: &Session,
        request: &PlaceOrderRequest,
    ) -> Result<(), AppError> {
        request.validate()?;

        info!(
            "Placing {:?} {} order for stock {} (quantity {})",
            request.order_type,
            if request.is_buy { "buy" } else { "sell" },
            request.stock_id,
            request.quantity
        );

        self.transport
            .request(
                Method::POST,
                "/engine/placeStockOrder",
                Some(session),
                Some(serde_json::to_value(request)?),
            )
            .await?;

        debug!("Order accepted by the engine");
        Ok(())
    }

    async fn cancel_order(&self, session: &Session, stock_tx_id: &str) -> Result<(), AppError> {
        info!("Cancelling stock transaction {}", stock_tx_id);

        let body = CancelOrderRequest {
            stock_tx_id: stock_tx_id.to_string(),
        };

        self.transport
            .request(
                Method::POST,
                "/engine/cancelStockTransaction",
                Some(session),
                Some(serde_json::to_value(&body)?),
            )
            .await?;

        debug!("Cancellation accepted; caller must re-fetch to observe it");
        Ok(())
    }

    async fn list_transactions(
        &self,
        session: &Session,
        stock_id: Option<&str>,
    ) -> Result<Vec<StockOrder>, AppError> {
        debug!("Fetching stock transactions");

        let data = self
            .transport
            .request(
                Method::GET,
                "/transaction/getStockTransactions",
                Some(session),
                None,
            )
            .await?;

        let orders: Vec<StockOrder> = super::list_from(data)?;
        debug!("Fetched {} stock transactions", orders.len());

        match stock_id {
            Some(stock_id) => Ok(filter_by_stock(&orders, stock_id)),
            None => Ok(orders),
        }
    }
}
