//! Timer chains driving the simulated payment and delivery timelines
//!
//! Two independent chains, both carrying a cancellation token:
//!
//! - **Payment chain** (spawned on payment submission, token scoped to the
//!   manager): Processing -> Confirmed -> checkout closed + cart cleared.
//!   There is no cancellation path once processing has started; the token
//!   only stops the chain on manager shutdown.
//! - **Status chain** (spawned on order confirmation, token scoped to the
//!   tracked order): Preparing -> InTransit -> Delivered. Dismissing the
//!   order cancels the token, so pending transitions never fire against a
//!   discarded order.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::KioskManager;

/// Payment chain: simulated processing delay, then order materialization,
/// then the confirmation display window.
pub(super) async fn run_payment_chain(kiosk: KioskManager, token: CancellationToken) {
    if !sleep_unless_cancelled(kiosk.config().payment_processing(), &token).await {
        return;
    }

    let Some((order_id, order_token)) = kiosk.confirm_payment() else {
        return;
    };

    // The delivery timeline runs off order creation, independent of the
    // confirmation display below.
    tokio::spawn(run_status_chain(kiosk.clone(), order_id, order_token));

    if !sleep_unless_cancelled(kiosk.config().confirmation_display(), &token).await {
        return;
    }
    kiosk.close_checkout();
}

/// Status chain: advance the tracked order one step per configured delay
/// until delivered, the order disappears, or the token is cancelled.
pub(super) async fn run_status_chain(
    kiosk: KioskManager,
    order_id: String,
    token: CancellationToken,
) {
    let delays = [kiosk.config().in_transit_after(), kiosk.config().delivered_after()];

    for delay in delays {
        if !sleep_unless_cancelled(delay, &token).await {
            tracing::debug!(order_id = %order_id, "Delivery timeline cancelled");
            return;
        }
        if kiosk.advance_order(&order_id).is_none() {
            return;
        }
    }
}

async fn sleep_unless_cancelled(delay: Duration, token: &CancellationToken) -> bool {
    tokio::select! {
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}
