//! KioskManager - single owner of cart, checkout, and order state
//!
//! This module handles:
//! - Command validation and processing
//! - Event broadcasting (tokio broadcast channel)
//! - Write-through cart persistence
//! - Timer chains for the simulated payment and delivery timelines
//!
//! # Command Flow
//!
//! ```text
//! execute(cmd)
//!     ├─ 1. Validate against catalog / cart / checkout state
//!     ├─ 2. Mutate state under the lock
//!     ├─ 3. Persist the cart (write-through)
//!     ├─ 4. Broadcast event(s)
//!     ├─ 5. Spawn timer chain (SubmitPayment only)
//!     └─ 6. Return response
//! ```
//!
//! Rendering is fully decoupled: a UI issues commands, subscribes to
//! events, and reads the query surface. It never touches engine state.

mod error;
pub use error::*;

pub(crate) mod timeline;

#[cfg(test)]
mod tests;

use crate::cart::{CartManager, CartStorage};
use crate::catalog::MenuCatalog;
use crate::checkout::{CheckoutFlow, CheckoutState};
use crate::core::Config;
use parking_lot::Mutex;
use shared::order::{
    CommandResponse, EventPayload, KioskCommand, KioskCommandPayload, KioskEvent, OrderSnapshot,
    OrderStatus, PaymentInput,
};
use shared::util::order_token;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

/// Event broadcast channel capacity (a kiosk has one UI subscriber; this is
/// generous headroom for slow redraws)
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// An order being tracked through the delivery timeline, together with the
/// token guarding its pending transitions
struct TrackedOrder {
    snapshot: OrderSnapshot,
    timers: CancellationToken,
}

/// Mutable kiosk state, owned by the manager
struct KioskState {
    cart: CartManager,
    checkout: CheckoutFlow,
    order: Option<TrackedOrder>,
}

struct Inner {
    catalog: MenuCatalog,
    config: Config,
    state: Mutex<KioskState>,
    event_tx: broadcast::Sender<KioskEvent>,
    /// Instance epoch - unique ID generated on startup
    epoch: String,
    /// Cancels every outstanding timer chain on shutdown
    shutdown: CancellationToken,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Kiosk manager
///
/// Cheap to clone; all clones share the same state. Timer-driven commands
/// (`SubmitPayment`) must be executed inside a tokio runtime.
#[derive(Clone)]
pub struct KioskManager {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for KioskManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KioskManager")
            .field("epoch", &self.inner.epoch)
            .finish()
    }
}

impl KioskManager {
    /// Create a manager, opening the cart cache under the configured work
    /// directory and rehydrating the cart from it
    pub fn new(catalog: MenuCatalog, config: Config) -> ManagerResult<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let storage = CartStorage::open(config.cart_db_path())?;
        Ok(Self::with_storage(catalog, config, storage))
    }

    /// Create a manager over an existing cart cache
    pub fn with_storage(catalog: MenuCatalog, config: Config, storage: CartStorage) -> Self {
        let cart = CartManager::new(storage);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, cart_lines = cart.len(), "Kiosk manager started");
        Self {
            inner: Arc::new(Inner {
                catalog,
                config,
                state: Mutex::new(KioskState {
                    cart,
                    checkout: CheckoutFlow::new(),
                    order: None,
                }),
                event_tx,
                epoch,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    // ========== Command Processing ==========

    /// Execute a command, returning a structured response
    ///
    /// Rejections are reported in the response, never panicked on.
    pub fn execute(&self, cmd: KioskCommand) -> CommandResponse {
        match self.apply(cmd.payload) {
            Ok(order_id) => CommandResponse::success(cmd.command_id, order_id),
            Err(e) => {
                tracing::warn!(command_id = %cmd.command_id, error = %e, "Command rejected");
                CommandResponse::error(cmd.command_id, e.to_command_error())
            }
        }
    }

    fn apply(&self, payload: KioskCommandPayload) -> ManagerResult<Option<String>> {
        match payload {
            KioskCommandPayload::AddItem { item_id } => {
                let item = self
                    .inner
                    .catalog
                    .get(item_id)
                    .ok_or(ManagerError::ItemNotFound(item_id))?
                    .clone();
                let mut state = self.inner.state.lock();
                state.cart.add(&item)?;
                self.emit_cart_changed(&state);
                Ok(None)
            }
            KioskCommandPayload::RemoveItem { item_id } => {
                let mut state = self.inner.state.lock();
                if state.cart.remove(item_id)? {
                    self.emit_cart_changed(&state);
                }
                Ok(None)
            }
            KioskCommandPayload::ChangeQuantity { item_id, delta } => {
                let mut state = self.inner.state.lock();
                if state.cart.change_quantity(item_id, delta)? {
                    self.emit_cart_changed(&state);
                }
                Ok(None)
            }
            KioskCommandPayload::BeginCheckout => {
                let mut state = self.inner.state.lock();
                if state.cart.is_empty() {
                    return Err(ManagerError::EmptyCart);
                }
                state.checkout.begin()?;
                self.emit(EventPayload::CheckoutStarted);
                Ok(None)
            }
            KioskCommandPayload::SubmitPayment { payment } => self.submit_payment(payment),
            KioskCommandPayload::CancelCheckout => {
                let mut state = self.inner.state.lock();
                state.checkout.cancel()?;
                self.emit(EventPayload::CheckoutCancelled);
                Ok(None)
            }
            KioskCommandPayload::DismissOrder => {
                let mut state = self.inner.state.lock();
                let tracked = state.order.take().ok_or(ManagerError::NoActiveOrder)?;
                tracked.timers.cancel();
                let order_id = tracked.snapshot.order_id;
                tracing::info!(order_id = %order_id, "Order dismissed");
                self.emit(EventPayload::OrderDismissed {
                    order_id: order_id.clone(),
                });
                Ok(Some(order_id))
            }
        }
    }

    fn submit_payment(&self, payment: PaymentInput) -> ManagerResult<Option<String>> {
        {
            let mut state = self.inner.state.lock();
            state.checkout.submit(&payment)?;
            self.emit(EventPayload::PaymentProcessing {
                method: payment.method,
            });
        }
        tracing::info!(method = %payment.method, "Payment submitted, simulating processing");
        tokio::spawn(timeline::run_payment_chain(
            self.clone(),
            self.inner.shutdown.child_token(),
        ));
        Ok(None)
    }

    // ========== Timer Callbacks ==========

    /// Materialize the order once the simulated payment comes back
    ///
    /// Returns the order ID and its timeline token, or `None` if the
    /// checkout was torn down in the meantime (shutdown race).
    pub(crate) fn confirm_payment(&self) -> Option<(String, CancellationToken)> {
        let mut state = self.inner.state.lock();
        if let Err(e) = state.checkout.confirm() {
            tracing::error!(error = %e, "Payment confirmation arrived out of order");
            return None;
        }

        let items = state.cart.lines().to_vec();
        let total = state.cart.total();
        let order = OrderSnapshot::new(order_token(), items, total);
        let order_id = order.order_id.clone();
        let timers = self.inner.shutdown.child_token();

        // Only one order is tracked at a time; a replaced order takes its
        // pending transitions with it.
        if let Some(previous) = state.order.replace(TrackedOrder {
            snapshot: order.clone(),
            timers: timers.clone(),
        }) {
            previous.timers.cancel();
            tracing::debug!(order_id = %previous.snapshot.order_id, "Previous order replaced");
        }

        tracing::info!(order_id = %order_id, total = total, "Order confirmed");
        self.emit(EventPayload::OrderConfirmed { order });
        Some((order_id, timers))
    }

    /// Close the confirmation display and clear the cart (memory + cache)
    pub(crate) fn close_checkout(&self) {
        let mut state = self.inner.state.lock();
        if let Err(e) = state.checkout.close() {
            tracing::error!(error = %e, "Checkout close arrived out of order");
            return;
        }
        if let Err(e) = state.cart.clear() {
            tracing::error!(error = %e, "Failed to drop the persisted cart entry");
        }
        self.emit(EventPayload::CheckoutClosed);
        self.emit_cart_changed(&state);
    }

    /// Advance the tracked order one step along the delivery timeline
    ///
    /// Returns `None` when the order is gone or already delivered, which
    /// ends the chain.
    pub(crate) fn advance_order(&self, order_id: &str) -> Option<OrderStatus> {
        let mut state = self.inner.state.lock();
        let tracked = state.order.as_mut()?;
        if tracked.snapshot.order_id != order_id {
            return None;
        }
        let status = tracked.snapshot.advance_status()?;
        tracing::info!(order_id = %order_id, status = %status, "Order status advanced");
        self.emit(EventPayload::OrderStatusChanged {
            order_id: order_id.to_string(),
            status,
        });
        Some(status)
    }

    // ========== Query Surface ==========

    /// Subscribe to the event stream
    pub fn subscribe(&self) -> broadcast::Receiver<KioskEvent> {
        self.inner.event_tx.subscribe()
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.inner.catalog
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Instance epoch (unique per startup)
    pub fn epoch(&self) -> &str {
        &self.inner.epoch
    }

    /// Current cart lines
    pub fn cart_lines(&self) -> Vec<shared::order::CartLine> {
        self.inner.state.lock().cart.lines().to_vec()
    }

    /// Current cart total
    pub fn cart_total(&self) -> f64 {
        self.inner.state.lock().cart.total()
    }

    /// Current checkout state
    pub fn checkout_state(&self) -> CheckoutState {
        self.inner.state.lock().checkout.state()
    }

    /// Currently tracked order, if any
    pub fn current_order(&self) -> Option<OrderSnapshot> {
        self.inner
            .state
            .lock()
            .order
            .as_ref()
            .map(|tracked| tracked.snapshot.clone())
    }

    /// Handle to the cart cache (tests and diagnostics)
    pub fn storage(&self) -> CartStorage {
        self.inner.state.lock().cart.storage().clone()
    }

    /// Cancel every outstanding timer chain
    ///
    /// Also triggered when the last manager clone is dropped.
    pub fn shutdown(&self) {
        self.inner.shutdown.cancel();
    }

    // ========== Events ==========

    fn emit(&self, payload: EventPayload) {
        // No subscribers is fine - the engine runs headless in tests
        let _ = self.inner.event_tx.send(KioskEvent::new(payload));
    }

    fn emit_cart_changed(&self, state: &KioskState) {
        self.emit(EventPayload::CartChanged {
            lines: state.cart.lines().to_vec(),
            total: state.cart.total(),
        });
    }
}
