//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use vendorhub_auth::IdentityVerifier;
use vendorhub_core::config::AppConfig;
use vendorhub_database::store::VendorStore;
use vendorhub_service::vendor::VendorService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Vendor persistence backend
    pub store: Arc<VendorStore>,
    /// Bearer credential verifier
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Vendor business logic
    pub vendor_service: Arc<VendorService>,
}

impl AppState {
    /// Wire the services on top of an already-built store and verifier.
    pub fn new(
        config: AppConfig,
        store: VendorStore,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        let store = Arc::new(store);
        Self {
            config: Arc::new(config),
            vendor_service: Arc::new(VendorService::new(Arc::clone(&store))),
            store,
            verifier,
        }
    }
}
