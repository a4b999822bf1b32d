use std::sync::Arc;

use crate::services::{AuthService, CatalogService};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub auth: Arc<AuthService>,
}
