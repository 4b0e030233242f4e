use std::sync::Arc;

use crate::features::menu::MenuService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MenuService>,
}

impl AppState {
    pub fn new(service: Arc<MenuService>) -> Self {
        Self { service }
    }
}
