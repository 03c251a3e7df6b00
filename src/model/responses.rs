use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Payload of a successful login: the opaque session token
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct LoginData {
    /// Bearer credential issued by the backend
    pub token: String,
}

/// Payload of `GET /transaction/getWalletBalance`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct WalletBalanceData {
    /// Current cash balance
    pub balance: f64,
}
