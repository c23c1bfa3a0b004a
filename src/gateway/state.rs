use std::sync::Arc;

use crate::orchestrator::Orchestrator;

#[derive(Clone)]
pub struct HandlerState {
    pub orchestrator: Arc<Orchestrator>,
}

impl HandlerState {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }
}
