//! Command implementations for the cafenet CLI.
//!
//! Every guarded command goes through [`Context::require`]: load the
//! persisted session, apply the role gate, and only then touch the API.

pub mod admin;
pub mod auth;
pub mod shop;
pub mod staff;

use thiserror::Error;

use cafenet_client::{
    Access, ApiError, CafenetClient, ClientConfig, ConfigError, Route, Session, SessionError,
    SessionStore, authorize,
};
use cafenet_core::Role;

/// Errors shared by the dashboard commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The guard redirected instead of rendering.
    #[error("access denied, redirecting to {} - run `cafenet login` first", .0.path())]
    Unauthorized(Route),

    /// Generic login failure; server detail is never shown.
    #[error("invalid username or password")]
    LoginFailed,

    /// No password on the command line and none in the environment.
    #[error("no password given: pass --password or set CAFENET_PASSWORD")]
    MissingPassword,

    /// An `--item` id that matches no product in any category.
    #[error("unknown product id {0}")]
    UnknownProduct(i64),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Shared command environment: session store plus API client.
pub struct Context {
    pub store: SessionStore,
    pub client: CafenetClient,
}

impl Context {
    /// Build the command environment from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, CommandError> {
        let config = ClientConfig::from_env()?;
        let store = SessionStore::new(config.session_file.clone());
        let client = CafenetClient::new(&config)?;
        Ok(Self { store, client })
    }

    /// Guard a view: load the session and apply the role gate.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Unauthorized`] when the guard redirects.
    pub fn require(&self, allowed: &[Role]) -> Result<Session, CommandError> {
        let session = self.store.load();
        match authorize(session.as_ref(), allowed) {
            Access::Granted => session.ok_or(CommandError::Unauthorized(Route::Login)),
            Access::Redirect(route) => Err(CommandError::Unauthorized(route)),
        }
    }
}
