use crate::application::interfaces::WalletService;
use crate::{
    error::AppError,
    model::requests::AddMoneyRequest,
    model::responses::WalletBalanceData,
    presentation::wallet::WalletTransaction,
    session::Session,
    transport::HttpTransport,
};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the wallet service
pub struct WalletServiceImpl<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> WalletServiceImpl<T> {
    /// Creates a new instance of the wallet service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> WalletService for WalletServiceImpl<T> {
    async fn get_wallet_balance(&self, session: &Session) -> Result<f64, AppError> {
        debug!("Fetching wallet balance");

        let data = self
            .transport
            .request(
                Method::GET,
                "/transaction/getWalletBalance",
                Some(session),
                None,
            )
            .await?;

        let balance: WalletBalanceData = serde_json::from_value(data)?;
        debug!("Wallet balance: {}", balance.balance);
        Ok(balance.balance)
    }

    async fn add_money(&self, session: &Session, amount: f64) -> Result<(), AppError> {
        let body = AddMoneyRequest { amount };
        body.validate()?;

        info!("Depositing {} into the wallet", amount);

        self.transport
            .request(
                Method::POST,
                "/transaction/addMoneyToWallet",
                Some(session),
                Some(serde_json::to_value(&body)?),
            )
            .await?;

        Ok(())
    }

    async fn get_wallet_transactions(
        &self,
        session: &Session,
    ) -> Result<Vec<WalletTransaction>, AppError> {
        debug!("Fetching wallet transactions");

        let data = self
            .transport
            .request(
                Method::GET,
                "/transaction/getWalletTransactions",
                Some(session),
                None,
            )
            .await?;

        let transactions: Vec<WalletTransaction> = super::list_from(data)?;
        debug!("Fetched {} wallet transactions", transactions.len());
        Ok(transactions)
    }
}
