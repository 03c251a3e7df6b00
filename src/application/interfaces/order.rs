use crate::error::AppError;
use crate::model::requests::PlaceOrderRequest;
use crate::presentation::order::StockOrder;
use crate::session::Session;

use async_trait::async_trait;

#[async_trait]
/// Service for placing, cancelling, and listing stock orders against the
/// Nightrader engine and transaction endpoints
///
/// This trait translates trading intents into backend calls and carries no
/// business logic beyond client-side parameter validation. It is the seam the
/// order status poller is tested through.
pub trait OrderService: Send + Sync {
    /// Submits a buy/sell order (market or limit).
    ///
    /// Parameters are validated before any network call; on success no payload
    /// is consumed beyond the success flag.
    async fn place_order(
        &self,
        session: &Session,
        request: &PlaceOrderRequest,
    ) -> Result<(), AppError>;

    /// Cancels a pending order by id.
    ///
    /// Does not update any cached list; the caller must re-fetch to observe
    /// the effect.
    async fn cancel_order(&self, session: &Session, stock_tx_id: &str) -> Result<(), AppError>;

    /// Lists the user's stock orders, optionally filtered to one instrument.
    ///
    /// The backend does not support server-side filtering, so the filter is a
    /// client-side predicate over the full returned list.
    async fn list_transactions(
        &self,
        session: &Session,
        stock_id: Option<&str>,
    ) -> Result<Vec<StockOrder>, AppError>;
}
