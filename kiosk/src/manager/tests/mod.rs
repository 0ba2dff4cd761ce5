use super::*;
use crate::checkout::CheckoutState;
use shared::order::{CommandErrorCode, EventPayload, KioskCommandPayload, PaymentInput};
use std::time::Duration;

mod test_flows;

/// Config with millisecond-scale delays so flows complete quickly
///
/// The delivery delays are staggered past the confirmation display so the
/// event order is stable: Confirmed -> Closed -> InTransit -> Delivered.
fn fast_config() -> Config {
    Config {
        work_dir: String::new(),
        payment_processing_ms: 10,
        confirmation_display_ms: 10,
        in_transit_after_ms: 50,
        delivered_after_ms: 50,
    }
}

fn create_test_manager() -> KioskManager {
    create_test_manager_with(fast_config())
}

fn create_test_manager_with(config: Config) -> KioskManager {
    let storage = CartStorage::open_in_memory().unwrap();
    KioskManager::with_storage(MenuCatalog::default_menu(), config, storage)
}

fn exec(manager: &KioskManager, payload: KioskCommandPayload) -> CommandResponse {
    manager.execute(KioskCommand::new(payload))
}

fn add_item(manager: &KioskManager, item_id: i64) -> CommandResponse {
    exec(manager, KioskCommandPayload::AddItem { item_id })
}

/// Receive events until one matches, with a 2s safety timeout per event
async fn wait_for<F>(rx: &mut broadcast::Receiver<KioskEvent>, matches: F) -> EventPayload
where
    F: Fn(&EventPayload) -> bool,
{
    loop {
        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed");
        if matches(&event.payload) {
            return event.payload;
        }
    }
}
