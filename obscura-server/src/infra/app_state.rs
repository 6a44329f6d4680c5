use std::{fmt, sync::Arc};

use obscura_core::{CatalogStore, MailTransport};

use crate::infra::config::Config;

/// Shared, read-only state handed to every request handler.
///
/// The catalog never changes after startup and the mail transport is
/// stateless, so cloning the state is a handful of `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    /// `None` when mail credentials are absent; inquiry submissions are then
    /// rejected as misconfigured before any transport call.
    pub mailer: Option<Arc<dyn MailTransport>>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        catalog: Arc<CatalogStore>,
        mailer: Option<Arc<dyn MailTransport>>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            catalog,
            mailer,
            config,
        }
    }

    pub fn mailer_configured(&self) -> bool {
        self.mailer.is_some()
    }
}
