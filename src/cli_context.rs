use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::config::{config_path, load_config_from, save_config_to, Config};
use crate::error::{AdminError, AdminResult};
use crate::models::Entity;
use crate::session::{Role, Session};
use crate::table::{LoadingPolicy, TableController};

/// Central context for CLI operations: configuration, the session marker,
/// and the API client built from them.
pub struct CliContext {
    config: Config,
    config_path: PathBuf,
    client: Option<Arc<ApiClient>>,
}

impl CliContext {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
            client: None,
        }
    }

    /// Load context from the saved configuration
    pub fn load() -> AdminResult<Self> {
        let path = config_path()?;
        let config = load_config_from(&path)?;
        Ok(Self::new(config, path))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn session(&self) -> &Session {
        &self.config.session
    }

    /// The logged-in role, or `NotAuthenticated`
    pub fn require_session(&self) -> AdminResult<Role> {
        self.config.session.require()
    }

    /// Client for private endpoints (requires a session)
    pub fn verified_client(&mut self) -> AdminResult<Arc<ApiClient>> {
        self.require_session()?;
        self.unverified_client()
    }

    /// Client usable without a session, e.g. for logout
    pub fn unverified_client(&mut self) -> AdminResult<Arc<ApiClient>> {
        if let Some(client) = &self.client {
            return Ok(Arc::clone(client));
        }

        let token = self.config.auth_token();
        let client = Arc::new(ApiClient::new(&self.config.api_url(), token.as_deref())?);
        self.client = Some(Arc::clone(&client));
        Ok(client)
    }

    /// A fresh table controller for `E` backed by the API client
    pub fn controller<E: Entity>(&mut self) -> AdminResult<TableController<E, ApiClient>> {
        let policy = self.config.loading_policy();
        self.controller_with_policy(policy)
    }

    /// Same as `controller`, with an explicit loading policy. One-shot
    /// commands draw no indicator and pass `LoadingPolicy::immediate()`.
    pub fn controller_with_policy<E: Entity>(
        &mut self,
        policy: LoadingPolicy,
    ) -> AdminResult<TableController<E, ApiClient>> {
        let client = self.verified_client()?;
        Ok(TableController::new(client, self.config.page_size(), policy))
    }

    /// Store a new session marker
    pub fn set_session(&mut self, session: Session) -> AdminResult<()> {
        self.config.session = session;
        self.client = None;
        self.save()?;
        info!(session = %self.config.session, "session updated");
        Ok(())
    }

    /// Best-effort server logout, then drop the local marker regardless.
    pub async fn logout(&mut self) -> AdminResult<()> {
        match self.unverified_client() {
            Ok(client) => {
                if let Err(e) = client.logout().await {
                    warn!(error = %e, "server logout failed, clearing local session anyway");
                }
            }
            Err(e) => warn!(error = %e, "no client for logout, clearing local session anyway"),
        }
        self.set_session(Session::Anonymous)
    }

    pub fn config_mut(&mut self) -> &mut Config {
        self.client = None;
        &mut self.config
    }

    pub fn save(&self) -> AdminResult<()> {
        save_config_to(&self.config_path, &self.config)
            .map_err(|e| AdminError::ConfigError(format!("Failed to save config: {}", e)))
    }
}

/// Builder for contexts with a specific config file or session
pub struct CliContextBuilder {
    config: Config,
    config_path: Option<PathBuf>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            config_path: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.config.session = session;
        self
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.config.api_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> AdminResult<CliContext> {
        let path = match self.config_path {
            Some(path) => path,
            None => config_path()?,
        };
        Ok(CliContext::new(self.config, path))
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
