use crate::state::DeviceState;
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Console observer: polls the device state on a fixed cadence and logs the
/// wheel pair whenever it changes. Read-only, decoupled from connections.
pub(crate) async fn run(state: Arc<DeviceState>) {
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    let mut last = (0, 0);
    loop {
        ticker.tick().await;
        let snap = state.snapshot().await;
        if (snap.left, snap.right) != last {
            last = (snap.left, snap.right);
            tracing::info!("wheels: L={:>4} R={:>4}", snap.left, snap.right);
        }
    }
}
