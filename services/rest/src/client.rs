use std::sync::Arc;

use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE, USER_AGENT};
use http::{HeaderValue, Uri};
use placenext_core::time::{format_rfc1123, now, DateTime};
use placenext_core::{Context, Error, Result};

use crate::config::default_config;
use crate::constants::*;
use crate::sign_request::{compute_signature, Authorization};
use crate::Config;

#[derive(Debug, Clone)]
enum ConfigSource {
    Fixed(Arc<Config>),
    Default,
}

/// Client signs every request before handing it to the [`Context`] transport.
///
/// Cloning a client is cheap. All clones share the same transport.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: ConfigSource,
    time: Option<DateTime>,
}

impl Client {
    /// Create a client that signs with `config`.
    pub fn new(ctx: Context, config: impl Into<Arc<Config>>) -> Self {
        Self {
            ctx,
            config: ConfigSource::Fixed(config.into()),
            time: None,
        }
    }

    /// Create a client that signs with the process-wide default config.
    ///
    /// The default is read at the start of every call, so the config set by
    /// [`crate::set_default_config`] is used from the next call on.
    pub fn with_default_config(ctx: Context) -> Self {
        Self {
            ctx,
            config: ConfigSource::Default,
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Get the context of this client.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Get the config this client signs with right now.
    pub fn config(&self) -> Result<Arc<Config>> {
        match &self.config {
            ConfigSource::Fixed(cfg) => Ok(cfg.clone()),
            ConfigSource::Default => default_config().ok_or_else(|| {
                Error::config_invalid(format!(
                    "default config is not set, {PLACENEXT_APIKEY} and {PLACENEXT_SECRETKEY} must be set"
                ))
            }),
        }
    }

    /// Stamp the date headers and sign the request in place.
    ///
    /// Use this to dispatch requests with a transport of your own. [`Client::send`]
    /// already signs.
    pub fn sign(&self, parts: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let config = self.config()?;
        self.sign_with(&config, parts, body)
    }

    /// Sign and send a request, returning the response untouched.
    ///
    /// A request without scheme and authority, like `/v1/insights/nss`, is
    /// sent to the config host.
    pub async fn send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let config = self.config()?;

        let (mut parts, body) = req.into_parts();
        if parts.uri.scheme().is_none() {
            parts.uri = resolve_uri(config.host(), &parts.uri)?;
        }
        self.sign_with(&config, &mut parts, &body)?;

        self.ctx
            .http_send(http::Request::from_parts(parts, body))
            .await
    }

    fn sign_with(
        &self,
        config: &Config,
        parts: &mut http::request::Parts,
        body: &[u8],
    ) -> Result<()> {
        let now = self.time.unwrap_or_else(now);

        let mut headers = parts.headers.clone();
        let date: HeaderValue = format_rfc1123(now).parse()?;
        headers.insert(DATE, date.clone());
        headers.insert(X_PLACENEXT_DATE, date);
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        }
        if !headers.contains_key(USER_AGENT) {
            headers.insert(USER_AGENT, config.user_agent().parse()?);
        }

        // The caller's headers are restored if signing fails.
        let original = std::mem::replace(&mut parts.headers, headers);
        if let Err(err) = authorize(config, parts, body) {
            parts.headers = original;
            return Err(err);
        }

        Ok(())
    }
}

fn authorize(config: &Config, parts: &mut http::request::Parts, body: &[u8]) -> Result<()> {
    let output = compute_signature(parts, body, config.secret_key())?;

    let content_md5: Option<HeaderValue> =
        output.content_md5_base64.map(|v| v.parse()).transpose()?;
    let mut authorization: HeaderValue = Authorization {
        api_key: config.api_key().to_string(),
        signature: output.signature_base64,
    }
    .to_string()
    .parse()?;
    authorization.set_sensitive(true);

    match content_md5 {
        Some(v) => {
            parts.headers.insert(CONTENT_MD5, v);
        }
        None => {
            parts.headers.remove(CONTENT_MD5);
        }
    }
    parts.headers.insert(AUTHORIZATION, authorization);

    Ok(())
}

fn resolve_uri(host: &str, uri: &Uri) -> Result<Uri> {
    let path_and_query = uri.path_and_query().map(|v| v.as_str()).unwrap_or("");
    Ok(format!("{host}{path_and_query}").parse::<Uri>()?)
}
