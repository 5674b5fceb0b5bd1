//! Round trip between the signing client and an in-process verifying server.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{AUTHORIZATION, HOST};
use http::{HeaderValue, StatusCode, Uri};
use log::debug;
use placenext_core::hash::base64_decode;
use placenext_core::{ConnectionInfo, Context, HttpSend, Result};
use placenext_rest::{verify, Authorization, Client, Config};

const API_KEY: &str = "UOCMBvhRFLwxDhUFdDeK2QpfvV80Og";
const SECRET_KEY: &str = "dMAMNw6HE60xDhV0SWZNsVZSVW91culvEXBFLE76ij62wsZXXqI+aQ";

type Tamper = fn(&mut http::request::Parts, &mut Bytes);

/// VerifyingServer checks signatures the way the PlaceNext API does.
///
/// Requests are turned into the relative form a server sees, with the
/// authority moved into `Host`, before verification.
#[derive(Debug)]
struct VerifyingServer {
    secrets: HashMap<String, Vec<u8>>,
    tamper: Option<Tamper>,
}

impl VerifyingServer {
    fn new() -> Self {
        Self {
            secrets: HashMap::from([(
                API_KEY.to_string(),
                base64_decode(SECRET_KEY).expect("secret must be valid"),
            )]),
            tamper: None,
        }
    }

    fn with_tamper(mut self, tamper: Tamper) -> Self {
        self.tamper = Some(tamper);
        self
    }
}

#[async_trait]
impl HttpSend for VerifyingServer {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (mut parts, mut body) = req.into_parts();
        if let Some(tamper) = self.tamper {
            tamper(&mut parts, &mut body);
        }

        // What a server receives on the wire.
        let authority = parts.uri.authority().map(|v| v.to_string());
        let tls = parts.uri.scheme_str() == Some("https");
        if let Some(authority) = authority {
            parts.headers.insert(HOST, authority.parse()?);
        }
        parts.uri = parts
            .uri
            .path_and_query()
            .map(|v| v.as_str())
            .unwrap_or("/")
            .parse()?;
        parts.extensions.insert(ConnectionInfo { tls });

        let status = match parts
            .headers
            .get(AUTHORIZATION)
            .map(|v| v.to_str())
            .transpose()?
            .map(Authorization::parse)
            .transpose()?
            .and_then(|auth| self.secrets.get(&auth.api_key))
        {
            None => StatusCode::UNAUTHORIZED,
            Some(secret) => {
                let v = verify(&parts, &body, secret)?;
                debug!("verification: {v:?}");
                if !v.signature_valid {
                    StatusCode::UNAUTHORIZED
                } else if !v.content_md5_valid {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::OK
                }
            }
        };

        Ok(http::Response::builder().status(status).body(Bytes::new())?)
    }
}

fn client(server: VerifyingServer, tls: bool) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let host = if tls {
        "https://api.aimmatic.com"
    } else {
        "http://api.aimmatic.com"
    };
    let config = Config::new_with_context(&Context::new(), API_KEY, SECRET_KEY)
        .expect("config must be valid")
        .with_host(host);
    Client::new(Context::new().with_http_send(server), config)
}

fn geometries() -> Bytes {
    Bytes::from_static(br#"[{"type":"Point","coordinates":[104.9282,11.5564]}]"#)
}

#[tokio::test]
async fn test_round_trip() -> anyhow::Result<()> {
    for tls in [false, true] {
        let client = client(VerifyingServer::new(), tls);

        let req = http::Request::post("/v1/ingest/geometries").body(geometries())?;
        let resp = client.send(req).await?;
        assert_eq!(resp.status(), StatusCode::OK, "tls: {tls}");

        let req = http::Request::get("/v1/insights/nss?start=1&end=2").body(Bytes::new())?;
        let resp = client.send(req).await?;
        assert_eq!(resp.status(), StatusCode::OK, "tls: {tls}");
    }

    Ok(())
}

#[tokio::test]
async fn test_round_trip_with_vendor_headers() -> anyhow::Result<()> {
    let client = client(VerifyingServer::new(), true);

    let req = http::Request::post("/v1/location/measurement")
        .header("X-PlaceNext-Trace", "b")
        .header("x-placenext-trace", "a")
        .body(geometries())?;
    let resp = client.send(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

fn tamper_body(_: &mut http::request::Parts, body: &mut Bytes) {
    *body = Bytes::from_static(br#"[{"type":"Point","coordinates":[0,0]}]"#);
}

fn tamper_path(parts: &mut http::request::Parts, _: &mut Bytes) {
    parts.uri = Uri::from_static("https://api.aimmatic.com/v1/ingest/other");
}

fn tamper_date(parts: &mut http::request::Parts, _: &mut Bytes) {
    parts.headers.insert(
        "x-placenext-date",
        HeaderValue::from_static("Tue, 10 Nov 2009 23:00:01 UTC"),
    );
}

fn tamper_vendor_header(parts: &mut http::request::Parts, _: &mut Bytes) {
    parts
        .headers
        .insert("x-placenext-extra", HeaderValue::from_static("1"));
}

fn tamper_content_md5(parts: &mut http::request::Parts, _: &mut Bytes) {
    parts
        .headers
        .insert("content-md5", HeaderValue::from_static("1B2M2Y8AsgTpgAmY7PhCfg"));
}

fn tamper_api_key(parts: &mut http::request::Parts, _: &mut Bytes) {
    parts.headers.insert(
        AUTHORIZATION,
        HeaderValue::from_static("AimMatic someone-else:AAAA"),
    );
}

#[tokio::test]
async fn test_tamper_detection() -> anyhow::Result<()> {
    let cases: [(&str, Tamper, StatusCode); 6] = [
        ("body", tamper_body, StatusCode::UNAUTHORIZED),
        ("path", tamper_path, StatusCode::UNAUTHORIZED),
        ("date", tamper_date, StatusCode::UNAUTHORIZED),
        ("vendor header", tamper_vendor_header, StatusCode::UNAUTHORIZED),
        ("content md5", tamper_content_md5, StatusCode::BAD_REQUEST),
        ("api key", tamper_api_key, StatusCode::UNAUTHORIZED),
    ];

    for (name, tamper, expected) in cases {
        let client = client(VerifyingServer::new().with_tamper(tamper), true);

        let req = http::Request::post("/v1/ingest/geometries").body(geometries())?;
        let resp = client.send(req).await?;
        assert_eq!(resp.status(), expected, "tampered {name}");
    }

    Ok(())
}
