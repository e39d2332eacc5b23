//! Service container for dependency injection
//!
//! Wires up settings, the HTTP transport and the query service.

use std::sync::Arc;

use crate::application::services::QueryService;
use crate::config::Settings;
use crate::infrastructure::traits::{HttpClient, ReqwestHttpClient};
use crate::infrastructure::InfraResult;

/// Container holding everything one invocation needs.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Query service over the HTTP transport
    pub query: QueryService,
}

impl ServiceContainer {
    /// Create a new service container with the real HTTP client.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let http = Arc::new(ReqwestHttpClient::new(settings.timeout())?);
        Ok(Self::with_deps(settings, http))
    }

    /// Create a service container with a custom transport (for testing).
    pub fn with_deps(settings: Settings, http: Arc<dyn HttpClient>) -> Self {
        let settings = Arc::new(settings);
        let query = QueryService::new(http);

        Self { settings, query }
    }
}
