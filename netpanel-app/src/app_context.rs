use crate::application::CheckConnection;
use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub check_connection: Arc<CheckConnection>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            check_connection: Arc::new(CheckConnection::new(config)),
        }
    }

    pub fn from_env() -> Self {
        let config = AppConfig::from_env();
        tracing::info!(
            fail_first = config.fail_first,
            delay = ?config.check_delay,
            "Loaded connection check settings"
        );
        Self::new(&config)
    }
}
