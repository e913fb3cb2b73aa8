use std::sync::Arc;

use crate::completion::{CompletionBackend, ZhipuClient};
use crate::config::Config;
use crate::gate::PendingClients;

/// Shared per-process state handed to every handler.
pub struct AppState {
    pub pending: PendingClients,
    pub completion: Arc<dyn CompletionBackend + Send + Sync>,
    pub embed_provider_errors: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let http_client = ZhipuClient::build_http_client();
        let completion = Arc::new(ZhipuClient::new(
            http_client,
            config.api_key.clone(),
            config.api_base.clone(),
        ));
        AppState {
            pending: PendingClients::new(),
            completion,
            embed_provider_errors: config.embed_provider_errors,
        }
    }

    /// State with a caller-provided backend, used by the integration tests.
    pub fn with_backend(
        completion: Arc<dyn CompletionBackend + Send + Sync>,
        embed_provider_errors: bool,
    ) -> Self {
        AppState {
            pending: PendingClients::new(),
            completion,
            embed_provider_errors,
        }
    }
}
