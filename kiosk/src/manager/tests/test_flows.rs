use super::*;
use shared::order::OrderStatus;

#[tokio::test]
async fn test_full_checkout_flow() {
    let manager = create_test_manager();
    let mut rx = manager.subscribe();

    add_item(&manager, 1);
    add_item(&manager, 1);
    add_item(&manager, 2);
    exec(&manager, KioskCommandPayload::BeginCheckout);
    exec(
        &manager,
        KioskCommandPayload::SubmitPayment {
            payment: PaymentInput::card("4111"),
        },
    );

    // Simulated processing approves and captures the cart
    let payload = wait_for(&mut rx, |p| matches!(p, EventPayload::OrderConfirmed { .. })).await;
    let order = match payload {
        EventPayload::OrderConfirmed { order } => order,
        other => panic!("unexpected event: {:?}", other),
    };
    assert_eq!(order.total, 21.48);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.status, OrderStatus::Preparing);
    assert!(!order.order_id.is_empty());

    // Confirmation display closes: cart cleared in memory and in the cache
    wait_for(&mut rx, |p| matches!(p, EventPayload::CheckoutClosed)).await;
    assert!(manager.cart_lines().is_empty());
    assert_eq!(manager.cart_total(), 0.0);
    assert!(!manager.storage().has_cart().unwrap());
    assert_eq!(manager.checkout_state(), CheckoutState::Idle);

    // Delivery timeline advances in strict sequence
    let payload = wait_for(&mut rx, |p| {
        matches!(p, EventPayload::OrderStatusChanged { .. })
    })
    .await;
    match payload {
        EventPayload::OrderStatusChanged { status, .. } => {
            assert_eq!(status, OrderStatus::InTransit)
        }
        other => panic!("unexpected event: {:?}", other),
    }

    let payload = wait_for(&mut rx, |p| {
        matches!(p, EventPayload::OrderStatusChanged { .. })
    })
    .await;
    match payload {
        EventPayload::OrderStatusChanged { status, .. } => {
            assert_eq!(status, OrderStatus::Delivered)
        }
        other => panic!("unexpected event: {:?}", other),
    }

    let tracked = manager.current_order().unwrap();
    assert_eq!(tracked.order_id, order.order_id);
    assert_eq!(tracked.status, OrderStatus::Delivered);
}

#[tokio::test]
async fn test_dismiss_cancels_pending_transitions() {
    let config = Config {
        delivered_after_ms: 500,
        ..fast_config()
    };
    let manager = create_test_manager_with(config);
    let mut rx = manager.subscribe();

    add_item(&manager, 3);
    exec(&manager, KioskCommandPayload::BeginCheckout);
    exec(
        &manager,
        KioskCommandPayload::SubmitPayment {
            payment: PaymentInput::transfer(),
        },
    );

    wait_for(&mut rx, |p| {
        matches!(
            p,
            EventPayload::OrderStatusChanged {
                status: OrderStatus::InTransit,
                ..
            }
        )
    })
    .await;

    // Dismiss while the delivered transition is still pending
    let response = exec(&manager, KioskCommandPayload::DismissOrder);
    assert!(response.success);
    assert!(response.order_id.is_some());
    assert!(manager.current_order().is_none());

    wait_for(&mut rx, |p| matches!(p, EventPayload::OrderDismissed { .. })).await;

    // Wait past the cancelled delay; no further status event may arrive
    tokio::time::sleep(Duration::from_millis(700)).await;
    loop {
        match rx.try_recv() {
            Ok(event) => {
                assert!(
                    !matches!(event.payload, EventPayload::OrderStatusChanged { .. }),
                    "status advanced after dismissal: {:?}",
                    event.payload
                );
            }
            Err(broadcast::error::TryRecvError::Empty) => break,
            Err(e) => panic!("event channel error: {:?}", e),
        }
    }
}

#[tokio::test]
async fn test_second_checkout_replaces_tracked_order() {
    let manager = create_test_manager();
    let mut rx = manager.subscribe();

    // First order
    add_item(&manager, 2);
    exec(&manager, KioskCommandPayload::BeginCheckout);
    exec(
        &manager,
        KioskCommandPayload::SubmitPayment {
            payment: PaymentInput::cash(),
        },
    );
    let first = match wait_for(&mut rx, |p| matches!(p, EventPayload::OrderConfirmed { .. })).await
    {
        EventPayload::OrderConfirmed { order } => order,
        other => panic!("unexpected event: {:?}", other),
    };
    wait_for(&mut rx, |p| matches!(p, EventPayload::CheckoutClosed)).await;

    // Second order while the first is still tracked
    add_item(&manager, 3);
    exec(&manager, KioskCommandPayload::BeginCheckout);
    exec(
        &manager,
        KioskCommandPayload::SubmitPayment {
            payment: PaymentInput::cash(),
        },
    );
    let second = match wait_for(&mut rx, |p| matches!(p, EventPayload::OrderConfirmed { .. })).await
    {
        EventPayload::OrderConfirmed { order } => order,
        other => panic!("unexpected event: {:?}", other),
    };

    assert_ne!(first.order_id, second.order_id);
    assert_eq!(
        manager.current_order().unwrap().order_id,
        second.order_id
    );
}

#[tokio::test]
async fn test_shutdown_stops_timer_chains() {
    let config = Config {
        payment_processing_ms: 50,
        ..fast_config()
    };
    let manager = create_test_manager_with(config);
    let mut rx = manager.subscribe();

    add_item(&manager, 1);
    exec(&manager, KioskCommandPayload::BeginCheckout);
    exec(
        &manager,
        KioskCommandPayload::SubmitPayment {
            payment: PaymentInput::cash(),
        },
    );

    manager.shutdown();
    tokio::time::sleep(Duration::from_millis(200)).await;

    // The payment chain was cancelled before confirming anything
    assert!(manager.current_order().is_none());
    loop {
        match rx.try_recv() {
            Ok(event) => assert!(
                !matches!(event.payload, EventPayload::OrderConfirmed { .. }),
                "order confirmed after shutdown"
            ),
            Err(broadcast::error::TryRecvError::Empty) => break,
            Err(e) => panic!("event channel error: {:?}", e),
        }
    }
}
