use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::error::AlertError;
use crate::service::AlertService;

#[derive(Debug, Clone, Copy)]
pub struct ScheduleConfig {
    /// Delay before the first cycle after startup.
    pub warmup: Duration,
    /// Fixed spacing between cycles thereafter.
    pub interval: Duration,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            warmup: Duration::from_secs(10),
            interval: Duration::from_secs(300),
        }
    }
}

pub struct SchedulerHandle {
    cancel_tx: broadcast::Sender<()>,
    join: JoinHandle<()>,
}

impl SchedulerHandle {
    pub async fn stop(self) -> Result<(), AlertError> {
        let _ = self.cancel_tx.send(());
        self.join.await.map_err(AlertError::from)
    }
}

/// Drive the service's poll cycle: once after the warm-up delay, then on
/// every interval tick, for as long as the task lives.
pub fn spawn_scheduler(service: Arc<AlertService>, config: ScheduleConfig) -> SchedulerHandle {
    let (cancel_tx, mut cancel_rx) = broadcast::channel(1);
    let join = tokio::spawn(async move {
        tokio::select! {
            _ = cancel_rx.recv() => {
                info!("scheduler shutdown requested");
                return;
            }
            _ = tokio::time::sleep(config.warmup) => {}
        }
        service.run_cycle().await;

        let mut ticker = tokio::time::interval(config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // interval fires immediately; the warm-up cycle already ran
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = cancel_rx.recv() => {
                    info!("scheduler shutdown requested");
                    break;
                }
                _ = ticker.tick() => {
                    service.run_cycle().await;
                }
            }
        }
    });

    SchedulerHandle { cancel_tx, join }
}
