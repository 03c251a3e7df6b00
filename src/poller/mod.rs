//! Order status polling
//!
//! One [`OrderStatusPoller`] backs one stock-detail view. It owns the current
//! transaction rows for that view, re-fetches them from the backend while any
//! order is still `IN_PROGRESS`, and stops on its own once everything has
//! settled.
//!
//! The machine has two states. `Polling`: a fetch is in flight or scheduled.
//! `Idle`: no further automatic fetch will happen. [`OrderStatusPoller::start`]
//! performs one immediate fetch and then oscillates between the two until
//! either nothing is pending, a fetch fails (reported once through the
//! [`AlertNotifier`], never retried), or the view goes away and calls
//! [`PollHandle::stop`].
//!
//! Fetches are strictly sequential per instance; a new fetch is scheduled only
//! after the previous result has been processed, so at most one is in flight
//! or scheduled at any time.

use crate::alert::{AlertKind, AlertNotifier};
use crate::application::interfaces::OrderService;
use crate::error::AppError;
use crate::presentation::order::{OrderRow, has_pending, rows_with_totals};
use crate::session::Session;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

/// Cancellable handle for a running poll loop
///
/// Dropping the handle stops the loop as well, so a view that forgets to call
/// [`PollHandle::stop`] cannot leak a timer.
pub struct PollHandle {
    task: AbortHandle,
    active: Arc<AtomicBool>,
    stopped: AtomicBool,
}

impl PollHandle {
    fn new(task: AbortHandle, active: Arc<AtomicBool>) -> Self {
        Self {
            task,
            active,
            stopped: AtomicBool::new(false),
        }
    }

    /// Stops the loop, cancelling any pending scheduled fetch.
    ///
    /// Idempotent: calling it twice is the same as calling it once. After it
    /// returns, no further fetch will be issued by this instance.
    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            info!("Stopping order status poller");
            self.task.abort();
            self.active.store(false, Ordering::SeqCst);
        }
    }

    /// Whether the loop is still running (`Polling` in state machine terms)
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Keeps one view's transaction table eventually consistent with the backend
/// while minimizing request volume
pub struct OrderStatusPoller<S: OrderService, N: AlertNotifier> {
    service: Arc<S>,
    notifier: Arc<N>,
    session: Session,
    stock_id: Option<String>,
    interval: Duration,
    rows: Arc<RwLock<Vec<OrderRow>>>,
    loop_task: Arc<Mutex<Option<(AbortHandle, Arc<AtomicBool>)>>>,
}

impl<S: OrderService, N: AlertNotifier> Clone for OrderStatusPoller<S, N> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            notifier: self.notifier.clone(),
            session: self.session.clone(),
            stock_id: self.stock_id.clone(),
            interval: self.interval,
            rows: self.rows.clone(),
            loop_task: self.loop_task.clone(),
        }
    }
}

impl<S, N> OrderStatusPoller<S, N>
where
    S: OrderService + 'static,
    N: AlertNotifier + 'static,
{
    /// Creates a poller for one view.
    ///
    /// # Arguments
    /// * `service` - Order API client used for every fetch
    /// * `notifier` - Where fetch failures are surfaced, exactly once each
    /// * `session` - Session authorizing the fetches
    /// * `stock_id` - Scope the table to one instrument, or `None` for all
    /// * `interval` - Fixed delay between polls while an order is pending
    pub fn new(
        service: Arc<S>,
        notifier: Arc<N>,
        session: Session,
        stock_id: Option<String>,
        interval: Duration,
    ) -> Self {
        Self {
            service,
            notifier,
            session,
            stock_id,
            interval,
            rows: Arc::new(RwLock::new(Vec::new())),
            loop_task: Arc::new(Mutex::new(None)),
        }
    }

    /// Current table rows, as of the latest completed fetch.
    ///
    /// The list is a disposable cache: it is replaced wholesale on every fetch
    /// and holds no authoritative state.
    pub async fn snapshot(&self) -> Vec<OrderRow> {
        self.rows.read().await.clone()
    }

    /// Performs one fetch and replaces the held rows.
    ///
    /// Returns whether any order is still in progress. Derived totals are
    /// recomputed from the fresh response; nothing is carried over from the
    /// previous fetch.
    async fn fetch_and_publish(&self) -> Result<bool, AppError> {
        let orders = self
            .service
            .list_transactions(&self.session, self.stock_id.as_deref())
            .await?;

        let pending = has_pending(&orders);
        let rows = rows_with_totals(&orders);
        debug!(
            "Fetched {} transactions ({})",
            rows.len(),
            if pending { "pending orders remain" } else { "all settled" }
        );

        *self.rows.write().await = rows;
        Ok(pending)
    }

    /// External re-trigger: one fetch outside the automatic loop.
    ///
    /// Used after an error stopped the loop, or by a manual refresh control.
    /// Failures are surfaced through the notifier and returned to the caller;
    /// no automatic retry is scheduled either way.
    pub async fn refresh(&self) -> Result<bool, AppError> {
        match self.fetch_and_publish().await {
            Ok(pending) => Ok(pending),
            Err(e) => {
                self.notifier.notify(AlertKind::Error, &e.to_string());
                Err(e)
            }
        }
    }

    /// Activates the poller: one immediate fetch, then a re-fetch after the
    /// fixed delay for as long as any order is in progress.
    ///
    /// On fetch failure the error is reported once through the notifier and
    /// the loop stops; the caller must re-trigger (a new `start` or a
    /// [`refresh`](Self::refresh)) to resume. Stopping the returned handle
    /// cancels any pending delay deterministically.
    ///
    /// At most one loop runs per poller. Calling `start` while a loop is
    /// already active spawns nothing and returns another handle to the running
    /// loop, so fetches stay strictly sequential no matter how many times a
    /// view activates it.
    pub fn start(&self) -> PollHandle {
        let mut slot = self.loop_task.lock().unwrap();
        if let Some((task, running)) = slot.as_ref() {
            if running.load(Ordering::SeqCst) && !task.is_finished() {
                warn!("Poller already active, reusing the running loop");
                return PollHandle::new(task.clone(), running.clone());
            }
        }

        let running = Arc::new(AtomicBool::new(true));
        let poller = self.clone();
        let flag = running.clone();
        let task = tokio::spawn(async move {
            loop {
                match poller.fetch_and_publish().await {
                    Ok(true) => tokio::time::sleep(poller.interval).await,
                    Ok(false) => {
                        debug!("No orders in progress, poller going idle");
                        break;
                    }
                    Err(e) => {
                        warn!("Poll fetch failed, going idle: {e}");
                        poller.notifier.notify(AlertKind::Error, &e.to_string());
                        break;
                    }
                }
            }
            flag.store(false, Ordering::SeqCst);
        })
        .abort_handle();
        *slot = Some((task.clone(), running.clone()));
        PollHandle::new(task, running)
    }
}
