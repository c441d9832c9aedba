use std::sync::Arc;
use std::time::Duration;
use crate::config::Config;
use crate::helpers::session_store::SessionStore;
use crate::repositories::api_repo::ApiConnectionRepo;

pub mod credential_form;
pub mod portal_controller;

#[derive(Clone)]
pub struct AppState {
    pub api_repo: Arc<ApiConnectionRepo>,
    pub session_store: SessionStore,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_repo = ApiConnectionRepo::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;

        Ok(Self {
            api_repo: Arc::new(api_repo),
            session_store: SessionStore::new(&config.session_file),
        })
    }
}
