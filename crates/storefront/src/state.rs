//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::content::ContentClient;
use crate::services::auth::SimulatedVerifier;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the content store client, and the credential verifier.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: ContentClient,
    auth: SimulatedVerifier,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let content = ContentClient::new(&config.content);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                auth: SimulatedVerifier::default(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the content store client.
    #[must_use]
    pub fn content(&self) -> &ContentClient {
        &self.inner.content
    }

    /// Get a reference to the credential verifier.
    ///
    /// The shipped verifier only simulates an auth service; see
    /// [`crate::services::auth`].
    #[must_use]
    pub fn auth(&self) -> &SimulatedVerifier {
        &self.inner.auth
    }
}
