use crate::config::AppConfig;
use crate::notify::Notifier;
use crate::storage::StorageBackend;

/// Shared, read-only state: configuration plus the collaborators built
/// from it at startup. Workflows hold no mutable state across requests.
pub struct AppState {
    pub config: AppConfig,
    pub backend: Box<dyn StorageBackend>,
    pub notifier: Box<dyn Notifier>,
}
