//! Fixed-period scheduler: fetch now, then once per period.
//!
//! Every tick spawns its own fetch task. In-flight fetches are not awaited or
//! cancelled by later ticks, so outcomes arrive in completion order and the
//! last one to finish is the one left on screen.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::dashboard::Dashboard;
use crate::error::FetchError;
use crate::http::IndicatorSource;
use crate::types::IndicatorSnapshot;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(7000);

pub type FetchOutcome = Result<IndicatorSnapshot, FetchError>;

pub fn outcome_channel() -> (UnboundedSender<FetchOutcome>, UnboundedReceiver<FetchOutcome>) {
    mpsc::unbounded_channel()
}

pub fn spawn_poller<S: IndicatorSource>(
    source: Arc<S>,
    period: Duration,
    tx: UnboundedSender<FetchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick: u64 = 0;
        loop {
            // first tick completes immediately
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }
            tick += 1;
            debug!(tick, "scheduling indicators fetch");
            let source = Arc::clone(&source);
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = source.fetch().await;
                let _ = tx.send(outcome);
            });
        }
    })
}

/// Apply every outcome that has already completed. Returns how many were applied.
pub fn apply_pending(dash: &mut Dashboard, rx: &mut UnboundedReceiver<FetchOutcome>) -> usize {
    let mut n = 0;
    loop {
        match rx.try_recv() {
            Ok(outcome) => {
                dash.apply_outcome(outcome);
                n += 1;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
    n
}
