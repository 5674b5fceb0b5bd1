//! Version 1 of the PlaceNext API.
//!
//! All calls go through a signing [`Client`] and decode the JSON envelope of
//! the server into [`Status`] or a typed response carrying it.
//!
//! ```no_run
//! use placenext_api_v1::{Geometry, V1};
//! use placenext_core::Context;
//! use placenext_rest::Client;
//!
//! # async fn example(ctx: Context) -> placenext_core::Result<()> {
//! let api = V1::new(Client::with_default_config(ctx));
//! let status = api
//!     .ingest_geometry(&[Geometry::point([104.9282, 11.5564])])
//!     .await?;
//! println!("request {}: {}", status.request_id, status.message);
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use log::debug;
use placenext_core::{Error, Result};
use placenext_rest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

mod response;
pub use response::{NssResponse, Status};

mod geometry;
pub use geometry::{Geometry, GeometryCollection};

mod location;
pub use location::{Location, LocationMeasurement};

mod point;
pub use point::PointJson;

mod ingest;
mod insights;

const API_VERSION: &str = "/v1";

/// V1 is the entry of all version 1 endpoints.
#[derive(Debug, Clone)]
pub struct V1 {
    client: Client,
}

impl V1 {
    /// Create a V1 api over a signing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get the client used by this api.
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn post_json<T, R>(&self, path: &str, content_type: Option<&str>, data: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: Envelope,
    {
        let body = serde_json::to_vec(data)
            .map_err(|e| Error::unexpected("serialize request body failed").with_source(e))?;

        let mut req = http::Request::builder()
            .method(Method::POST)
            .uri(format!("{API_VERSION}{path}"));
        if let Some(v) = content_type {
            req = req.header(CONTENT_TYPE, v);
        }

        self.call(req.body(Bytes::from(body))?).await
    }

    async fn call<R: Envelope>(&self, req: http::Request<Bytes>) -> Result<R> {
        debug!("calling placenext api: {} {}", req.method(), req.uri());

        let resp = self.client.send(req).await?;
        decode(resp)
    }
}

/// Envelope is a response body carrying [`Status`].
trait Envelope: DeserializeOwned {
    /// The value used when the server answers with an empty body.
    fn ok() -> Self;
}

fn decode<R: Envelope>(resp: http::Response<Bytes>) -> Result<R> {
    let (parts, body) = resp.into_parts();

    if body.is_empty() {
        if parts.status.is_success() {
            return Ok(R::ok());
        }
        return Err(Error::unexpected(format!(
            "placenext api responded {} without body",
            parts.status
        )));
    }

    match serde_json::from_slice(&body) {
        Ok(v) => Ok(v),
        Err(e) if parts.status.is_success() => {
            Err(Error::unexpected("decode placenext api response failed").with_source(e))
        }
        Err(e) => Err(Error::unexpected(format!(
            "placenext api responded {}: {}",
            parts.status,
            String::from_utf8_lossy(&body)
        ))
        .with_source(e)),
    }
}
