//! Application state and dependency injection.

use gallery_backend::{BackendClient, BackendConfig, ResponseCache, Result};

use crate::service::CatalogService;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    backend: BackendClient,
    catalog: CatalogService,
}

impl ServiceState {
    /// Initializes application state from backend configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: BackendConfig) -> Result<Self> {
        let cache = ResponseCache::with_ttl(config.cache_ttl());
        let backend = BackendClient::new(config)?;
        let catalog = CatalogService::new(backend.clone(), cache);

        Ok(Self { backend, catalog })
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(backend: BackendClient);
impl_di!(catalog: CatalogService);
