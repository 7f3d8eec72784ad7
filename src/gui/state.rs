use crate::{config::ClientConfig, core::HttpApi};

/// Shared by every screen for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct AppState {
    pub api: HttpApi,
    pub client: ClientConfig,
}
