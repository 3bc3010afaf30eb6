//! Implements a struct that holds the state of the web server.

use std::path::PathBuf;

use axum::extract::FromRef;

use crate::{Error, backend::BackendClient, config::Config};

/// The state of the web server.
///
/// The state is built once at startup and never modified afterwards. Cloning
/// is cheap, the HTTP client inside [BackendClient] is reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the finance REST API.
    pub backend: BackendClient,

    /// The name shown in the greeting of the navigation bar.
    pub user_name: String,

    /// The directory that static files are served from.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] from the runtime `config`.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if the API URL in `config` cannot be parsed.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let backend = BackendClient::new(&config.api_url, config.request_timeout)?;

        Ok(Self {
            backend,
            user_name: config.user_name.clone(),
            static_dir: config.static_dir.clone(),
        })
    }
}

impl FromRef<AppState> for BackendClient {
    fn from_ref(state: &AppState) -> Self {
        state.backend.clone()
    }
}

/// The data every full page needs besides its own content.
#[derive(Debug, Clone)]
pub struct PageState {
    /// The client for the finance REST API.
    pub backend: BackendClient,
    /// The name shown in the greeting of the navigation bar.
    pub user_name: String,
}

impl FromRef<AppState> for PageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
            user_name: state.user_name.clone(),
        }
    }
}
