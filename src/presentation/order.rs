use chrono::{DateTime, FixedOffset};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Order type
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Market order - executed immediately at the current price
    #[default]
    Market,
    /// Limit order - executed only at or better than the specified price
    Limit,
}

/// Status of a stock order throughout its lifecycle.
///
/// The vocabulary is backend-defined; the client only distinguishes "in
/// progress" from terminal states, so unknown values are tolerated and treated
/// as terminal.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Accepted by the backend but not yet filled or cancelled
    InProgress,
    /// Filled
    #[default]
    Completed,
    /// Cancelled before being filled
    Cancelled,
    /// Partially filled parent order
    #[serde(rename = "PARTIAL_FULFILLED")]
    PartialFulfilled,
    /// Any status this client version does not know about
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether the order is still awaiting fulfillment
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, OrderStatus::InProgress)
    }

    /// The backend's string for this status
    #[must_use]
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::PartialFulfilled => "PARTIAL_FULFILLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Client-side projection of a backend stock transaction record.
///
/// A `StockOrder` with `order_status == IN_PROGRESS` may transition only to a
/// terminal state, and the client never mutates the status locally; the full
/// list is re-derived from each backend response.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct StockOrder {
    /// Unique identifier of the transaction
    pub stock_tx_id: String,
    /// Identifier of the traded instrument
    pub stock_id: String,
    /// Wallet ledger entry created when the order settled, if any
    #[serde(default)]
    pub wallet_tx_id: Option<String>,
    /// Parent transaction for partial fills, if any
    #[serde(default)]
    pub parent_stock_tx_id: Option<String>,
    /// Order status
    pub order_status: OrderStatus,
    /// Buy or sell direction
    pub is_buy: bool,
    /// Order type
    pub order_type: OrderType,
    /// Unit price at the time of the order; absent for a pending market order
    #[serde(default)]
    pub stock_price: Option<f64>,
    /// Number of shares
    pub quantity: u32,
    /// Order creation time as reported by the backend
    pub time_stamp: String,
}

impl StockOrder {
    /// Derived display field: `quantity * stock_price`.
    ///
    /// `None` while the price is not yet known (pending market order).
    #[must_use]
    pub fn total_cost(&self) -> Option<f64> {
        self.stock_price
            .map(|price| f64::from(self.quantity) * price)
    }

    /// Parses the backend timestamp, if it is valid RFC 3339
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.time_stamp).ok()
    }

    /// Whether the order can still be cancelled by the user
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        self.order_status.is_in_progress()
    }
}

/// One row of the transaction table: the order plus its derived total cost,
/// recomputed fresh on every fetch and never persisted
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderRow {
    /// The underlying order
    pub order: StockOrder,
    /// `quantity * stock_price`, if the price is known
    pub total_cost: Option<f64>,
}

impl From<&StockOrder> for OrderRow {
    fn from(order: &StockOrder) -> Self {
        OrderRow {
            total_cost: order.total_cost(),
            order: order.clone(),
        }
    }
}

/// Column of the transaction table a view can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Order status, lexicographic on the wire vocabulary
    OrderStatus,
    /// Number of shares
    Quantity,
    /// Unit price
    StockPrice,
    /// Derived total cost
    TotalCost,
}

/// Sort direction for the transaction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Keeps only the orders for the given instrument.
///
/// The backend does not support server-side filtering, so this predicate runs
/// over the full fetched list. Applying it twice yields the same result as
/// applying it once.
#[must_use]
pub fn filter_by_stock(orders: &[StockOrder], stock_id: &str) -> Vec<StockOrder> {
    orders
        .iter()
        .filter(|order| order.stock_id == stock_id)
        .cloned()
        .collect()
}

/// Whether any order in the list is still awaiting fulfillment
#[must_use]
pub fn has_pending(orders: &[StockOrder]) -> bool {
    orders
        .iter()
        .any(|order| order.order_status.is_in_progress())
}

/// Builds display rows from the latest fetch, recomputing every total cost
#[must_use]
pub fn rows_with_totals(orders: &[StockOrder]) -> Vec<OrderRow> {
    orders.iter().map(OrderRow::from).collect()
}

/// Sorts table rows by the given column and direction.
///
/// Pure function from the previous rows to the next rows; rows with an unknown
/// price sort before any priced row when ordering by price or total cost.
#[must_use]
pub fn sort_rows(rows: &[OrderRow], column: SortColumn, direction: SortDirection) -> Vec<OrderRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::OrderStatus => a
                .order
                .order_status
                .as_wire_str()
                .cmp(b.order.order_status.as_wire_str()),
            SortColumn::Quantity => a.order.quantity.cmp(&b.order.quantity),
            SortColumn::StockPrice => a
                .order
                .stock_price
                .unwrap_or(f64::NEG_INFINITY)
                .total_cmp(&b.order.stock_price.unwrap_or(f64::NEG_INFINITY)),
            SortColumn::TotalCost => a
                .total_cost
                .unwrap_or(f64::NEG_INFINITY)
                .total_cmp(&b.total_cost.unwrap_or(f64::NEG_INFINITY)),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}
