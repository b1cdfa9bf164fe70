use axum::extract::FromRef;
use std::sync::Arc;

use crate::{application::services::OcrolusApi, domain::config::Config};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ocrolus: Arc<dyn OcrolusApi>,
}
