use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// One entry of the wallet ledger
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WalletTransaction {
    /// Ledger entry identifier
    pub wallet_tx_id: String,
    /// Stock transaction that produced this entry
    pub stock_tx_id: String,
    /// Whether money left the wallet
    pub is_debit: bool,
    /// Amount moved
    pub amount: f64,
    /// Entry creation time as reported by the backend
    pub time_stamp: String,
}
