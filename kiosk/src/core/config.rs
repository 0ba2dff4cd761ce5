use std::path::PathBuf;
use std::time::Duration;

/// Kiosk configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/menufast/kiosk | Work directory (cart cache, logs) |
/// | PAYMENT_PROCESSING_MS | 1500 | Simulated payment processing delay |
/// | CONFIRMATION_DISPLAY_MS | 2000 | Confirmation display before checkout closes |
/// | IN_TRANSIT_AFTER_MS | 5000 | Preparing -> InTransit delay |
/// | DELIVERED_AFTER_MS | 5000 | InTransit -> Delivered delay |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/kiosk PAYMENT_PROCESSING_MS=200 cargo run --example interactive_demo
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the persisted cart cache
    pub work_dir: String,
    /// Simulated payment processing delay (Processing -> Confirmed)
    pub payment_processing_ms: u64,
    /// Confirmation display duration (Confirmed -> Idle, cart cleared)
    pub confirmation_display_ms: u64,
    /// Delay before the tracked order leaves the kitchen
    pub in_transit_after_ms: u64,
    /// Delay before the tracked order is marked delivered
    pub delivered_after_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/menufast/kiosk".into()),
            payment_processing_ms: env_u64("PAYMENT_PROCESSING_MS", 1500),
            confirmation_display_ms: env_u64("CONFIRMATION_DISPLAY_MS", 2000),
            in_transit_after_ms: env_u64("IN_TRANSIT_AFTER_MS", 5000),
            delivered_after_ms: env_u64("DELIVERED_AFTER_MS", 5000),
        }
    }

    /// Override the work directory, keeping everything else from the env
    ///
    /// Mostly used by tests and the demo.
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Path of the persisted cart cache inside the work directory
    pub fn cart_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("cart.redb")
    }

    pub fn payment_processing(&self) -> Duration {
        Duration::from_millis(self.payment_processing_ms)
    }

    pub fn confirmation_display(&self) -> Duration {
        Duration::from_millis(self.confirmation_display_ms)
    }

    pub fn in_transit_after(&self) -> Duration {
        Duration::from_millis(self.in_transit_after_ms)
    }

    pub fn delivered_after(&self) -> Duration {
        Duration::from_millis(self.delivered_after_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
