use std::sync::Arc;

use pantrychef_core::application::PantryChefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PantryChefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PantryChefService) -> Self {
        Self { args, service }
    }
}
