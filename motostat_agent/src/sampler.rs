//! Background sampler for the demo fleet: every period, move one moto to its
//! next status so the dashboard has something to show.

use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use crate::fleet::{next_status, SharedFleet};

// Stride coprime with the demo fleet size so every moto gets visited.
const STRIDE: usize = 5;

pub fn rotate_once(fleet: &mut [crate::types::Moto], cursor: &mut usize) {
    if fleet.is_empty() {
        return;
    }
    let i = *cursor % fleet.len();
    let m = &mut fleet[i];
    let from = m.status;
    m.status = next_status(from);
    debug!(placa = %m.placa, ?from, to = ?m.status, "demo fleet rotated");
    *cursor = (i + STRIDE) % fleet.len();
}

pub fn spawn_rotation_sampler(fleet: SharedFleet, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // skip the immediate first tick; start from the seeded state
        ticker.tick().await;
        let mut cursor = 0usize;
        loop {
            ticker.tick().await;
            let mut guard = fleet.lock().await;
            rotate_once(guard.as_mut_slice(), &mut cursor);
        }
    })
}
