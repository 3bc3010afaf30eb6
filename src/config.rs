//! Runtime configuration for the web client.

use std::{path::PathBuf, time::Duration};

/// The default time to wait for the finance API before giving up on a request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings that control how the web client talks to the finance API and
/// what it shows to the user.
#[derive(Debug, Clone)]
pub struct Config {
    /// The base URL of the finance REST API, e.g. "http://localhost:8080".
    pub api_url: String,

    /// The name shown in the greeting of the navigation bar.
    pub user_name: String,

    /// How long to wait for the finance API before a request fails.
    pub request_timeout: Duration,

    /// The directory that static files (scripts, images) are served from.
    pub static_dir: PathBuf,
}

impl Config {
    /// Create a config for the finance API at `api_url` with default settings.
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_owned(),
            user_name: "there".to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            static_dir: PathBuf::from("static/"),
        }
    }
}
