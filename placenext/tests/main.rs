//! Live tests against a PlaceNext server.
//!
//! Set `PLACENEXT_TEST=on` together with `PLACENEXT_APIKEY`,
//! `PLACENEXT_SECRETKEY` and optionally `PLACENEXT_ADDRESS` to run them.

use std::env;

use bytes::Bytes;
use log::{debug, warn};
use placenext::v1::{Geometry, GeometryCollection};
use placenext::{default_client, RestApi};

fn init_api() -> Option<RestApi> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PLACENEXT_TEST").is_err() || env::var("PLACENEXT_TEST").unwrap() != "on" {
        return None;
    }

    Some(RestApi::new(default_client()))
}

#[tokio::test]
async fn test_signed_request_is_accepted() -> anyhow::Result<()> {
    let Some(api) = init_api() else {
        warn!("PLACENEXT_TEST is not set, skipped");
        return Ok(());
    };

    let req = http::Request::get("/v1/insights/nss").body(Bytes::new())?;
    let resp = api.v1().client().send(req).await?;
    debug!("got response: {resp:?}");
    assert_ne!(resp.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_nss() -> anyhow::Result<()> {
    let Some(api) = init_api() else {
        warn!("PLACENEXT_TEST is not set, skipped");
        return Ok(());
    };

    let resp = api.v1().nss().await?;
    debug!("got nss: {resp:?}");
    assert_eq!(resp.status.code, 0);

    Ok(())
}

#[tokio::test]
async fn test_geometry_import() -> anyhow::Result<()> {
    let Some(api) = init_api() else {
        warn!("PLACENEXT_TEST is not set, skipped");
        return Ok(());
    };

    let status = api
        .v1()
        .geometry_import(&GeometryCollection::new(vec![Geometry::point([
            104.9282, 11.5564,
        ])]))
        .await?;
    debug!("got status: {status:?}");
    assert_eq!(status.code, 0);

    Ok(())
}
