use std::fmt::{Debug, Formatter};
use std::sync::{Arc, RwLock};

use log::warn;
use once_cell::sync::Lazy;
use placenext_core::hash::base64_decode;
use placenext_core::utils::Redact;
use placenext_core::{Context, Error, OsEnv, Result};

use crate::constants::*;

/// Config carries the credentials and endpoint of the PlaceNext API.
///
/// A config is immutable once built. Replace the process-wide default with
/// [`set_default_config`] instead of changing it.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    secret_key: Vec<u8>,
    host: String,
    user_agent: String,
}

impl Config {
    /// Create a config from an api key and an unpadded base64 secret key.
    ///
    /// The host is taken from [`PLACENEXT_ADDRESS`] if set, else [`DEFAULT_HOST`].
    pub fn new(api_key: impl Into<String>, secret_key: &str) -> Result<Self> {
        Self::new_with_context(&Context::new().with_env(OsEnv), api_key, secret_key)
    }

    /// Same as [`Config::new`], reading [`PLACENEXT_ADDRESS`] from `ctx`.
    pub fn new_with_context(
        ctx: &Context,
        api_key: impl Into<String>,
        secret_key: &str,
    ) -> Result<Self> {
        let secret_key = base64_decode(secret_key).map_err(|err| {
            Error::config_invalid("secret key must be unpadded base64").with_source(err)
        })?;
        let host = ctx
            .env_var(PLACENEXT_ADDRESS)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self {
            api_key: api_key.into(),
            secret_key,
            host: trim_host(host),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Load config from env.
    ///
    /// Returns `None` if [`PLACENEXT_APIKEY`] or [`PLACENEXT_SECRETKEY`] is
    /// missing or empty.
    pub fn from_env(ctx: &Context) -> Result<Option<Self>> {
        let api_key = ctx.env_var(PLACENEXT_APIKEY).filter(|v| !v.is_empty());
        let secret_key = ctx.env_var(PLACENEXT_SECRETKEY).filter(|v| !v.is_empty());

        match (api_key, secret_key) {
            (Some(ak), Some(sk)) => Self::new_with_context(ctx, ak, &sk).map(Some),
            _ => Ok(None),
        }
    }

    /// Set the api host, for example `http://localhost:8080`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = trim_host(host.into());
        self
    }

    /// Set the user agent sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The api key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The decoded secret key.
    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    /// The api host without trailing slash.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn trim_host(mut host: String) -> String {
    while host.ends_with('/') {
        host.pop();
    }
    host
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &Redact::from(&self.api_key))
            .field("secret_key", &"***")
            .field("host", &self.host)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

static DEFAULT_CONFIG: Lazy<RwLock<Option<Arc<Config>>>> =
    Lazy::new(|| RwLock::new(load_default_config(&Context::new().with_env(OsEnv))));

fn load_default_config(ctx: &Context) -> Option<Arc<Config>> {
    match Config::from_env(ctx) {
        Ok(cfg) => cfg.map(Arc::new),
        Err(err) => {
            warn!("default config is not loaded from env: {err}");
            None
        }
    }
}

/// Get the process-wide default config.
///
/// It's built from env on first use. Returns `None` if the env doesn't carry
/// a valid api key and secret key and no config has been set.
pub fn default_config() -> Option<Arc<Config>> {
    DEFAULT_CONFIG.read().expect("lock poisoned").clone()
}

/// Replace the process-wide default config.
///
/// Clients built with [`crate::Client::with_default_config`] pick up the new
/// config on their next call.
pub fn set_default_config(cfg: impl Into<Arc<Config>>) {
    *DEFAULT_CONFIG.write().expect("lock poisoned") = Some(cfg.into());
}
