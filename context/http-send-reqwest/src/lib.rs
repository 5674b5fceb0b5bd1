//! [`HttpSend`] implementation over [`reqwest`].
//!
//! Timeouts, proxies and connection pooling are configured on the
//! `reqwest::Client` handed to [`ReqwestHttpSend::new`].

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use placenext_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// ReqwestHttpSend sends signed requests with a `reqwest::Client`.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        debug!("sending request: {} {}", req.method(), req.uri());

        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("convert request for reqwest failed").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("send http request failed").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("read http response body failed").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placenext_core::ErrorKind;

    #[tokio::test]
    async fn test_relative_uri_is_rejected() {
        let send = ReqwestHttpSend::default();
        let req = http::Request::get("/v1/insights/nss")
            .body(Bytes::new())
            .unwrap();

        let err = send.http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
