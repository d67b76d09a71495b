//! Runtime configuration: account secrets and API endpoints.
//!
//! Secrets come from the environment. A `.env` file in the working
//! directory and `otfstats/.env` in the user's config directory are loaded
//! first if present; variables already set in the environment win.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::{Credentials, OtfError, Result};

/// Identity provider (AWS Cognito, us-east-1)
pub const DEFAULT_IDENTITY_URL: &str = "https://cognito-idp.us-east-1.amazonaws.com/";
/// Member records, addressed by user id
pub const DEFAULT_MEMBER_URL: &str = "https://api.orangetheory.co/member/members";
/// In-studio workout history of the caller
pub const DEFAULT_IN_STUDIO_WORKOUTS_URL: &str =
    "https://api.orangetheory.co/virtual-class/in-studio-workouts";

/// HTTP request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Vendor endpoints. Overridable for testing against mock servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub identity: String,
    pub member: String,
    pub in_studio_workouts: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            identity: DEFAULT_IDENTITY_URL.to_string(),
            member: DEFAULT_MEMBER_URL.to_string(),
            in_studio_workouts: DEFAULT_IN_STUDIO_WORKOUTS_URL.to_string(),
        }
    }
}

/// Everything needed to log in and talk to the API
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub timeout: Duration,
}

impl Config {
    /// Config with default endpoints and timeout
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from environment variables, after reading any `.env` files.
    ///
    /// Required: `OTF_CLIENT_ID`, `OTF_EMAIL`, `OTF_PASSWORD`.
    /// Optional: `OTF_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        if let Some(path) = Self::user_env_path() {
            dotenvy::from_path(&path).ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| OtfError::Config(format!("{} is not set", key)))
        };

        let credentials = Credentials {
            client_id: required("OTF_CLIENT_ID")?,
            username: required("OTF_EMAIL")?,
            password: required("OTF_PASSWORD")?,
        };

        let mut config = Self::new(credentials);

        if let Some(raw) = lookup("OTF_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                OtfError::Config(format!("OTF_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Per-user env file (e.g. ~/.config/otfstats/.env)
    pub fn user_env_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "otfstats")
            .map(|dirs| dirs.config_dir().join(".env"))
    }
}
