use crate::error::AppError;
use crate::presentation::wallet::WalletTransaction;
use crate::session::Session;

use async_trait::async_trait;

#[async_trait]
/// Service for wallet operations against the Nightrader transaction endpoints
pub trait WalletService: Send + Sync {
    /// Fetches the current cash balance
    async fn get_wallet_balance(&self, session: &Session) -> Result<f64, AppError>;

    /// Deposits funds into the wallet
    async fn add_money(&self, session: &Session, amount: f64) -> Result<(), AppError>;

    /// Lists the wallet ledger entries
    async fn get_wallet_transactions(
        &self,
        session: &Session,
    ) -> Result<Vec<WalletTransaction>, AppError>;
}
