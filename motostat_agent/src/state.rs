//! Shared agent state handed to every request.

use crate::fleet::FleetSource;

#[derive(Clone)]
pub struct AppState {
    pub fleet: FleetSource,
}

impl AppState {
    pub fn new(fleet: FleetSource) -> Self {
        Self { fleet }
    }
}
