use placenext_core::{Context, OsEnv};
use placenext_http_send_reqwest::ReqwestHttpSend;
use placenext_rest::Client;

/// Create a context that sends with reqwest and reads the process env.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a client over [`default_context`] signing with the process-wide
/// default config.
pub fn default_client() -> Client {
    Client::with_default_config(default_context())
}
