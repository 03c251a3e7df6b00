//! Wire-facing domain types
//!
//! These are client-side projections of backend records. The client never
//! constructs authoritative copies of any of them; every list is rebuilt from
//! the latest backend response and discarded when the view goes away.

/// Tradable instruments and current prices
pub mod market;
/// Stock orders and the transaction table helpers
pub mod order;
/// Wallet balance and ledger entries
pub mod wallet;
