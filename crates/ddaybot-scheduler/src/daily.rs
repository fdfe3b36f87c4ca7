//! The long-running daily delivery loop.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::notifier::Notifier;

/// Run the scheduler loop until `cancel` is cancelled.
///
/// Each iteration reads the clock, lets the [`Notifier`] classify and act,
/// then sleeps for whatever it says — never longer than the configured
/// re-check cap, so a suspended host or a shifted clock costs at most one
/// check interval.
pub async fn run_daily_loop(
    notifier: Arc<Notifier>,
    clock: Arc<dyn Clock>,
    cancel: CancellationToken,
) {
    info!("daily countdown loop started");

    loop {
        if cancel.is_cancelled() {
            break;
        }

        let wait = notifier.tick(clock.now_local()).await;
        debug!(wait_secs = wait.as_secs(), "daily loop sleeping");

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(wait) => {}
        }
    }

    info!("daily countdown loop stopped");
}
