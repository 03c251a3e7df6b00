/// Authentication operations
pub mod auth;
/// Stock price and portfolio reads
pub mod market;
/// Order placement, cancellation, and transaction listing
pub mod order;
/// Wallet balance and ledger operations
pub mod wallet;

pub use auth::AuthService;
pub use market::MarketService;
pub use order::OrderService;
pub use wallet::WalletService;
