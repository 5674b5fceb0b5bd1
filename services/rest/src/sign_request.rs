use std::fmt::{Display, Formatter, Write};

use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use log::debug;
use placenext_core::hash::{base64_decode, base64_encode, hmac_sha256, hmac_sha256_verify, md5};
use placenext_core::{Error, Result, SigningRequest};

use crate::constants::*;

/// SigningOutput is the result of signing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningOutput {
    /// HMAC-SHA256 of the canonical string.
    pub signature: Vec<u8>,
    /// Unpadded base64 of `signature`.
    pub signature_base64: String,
    /// MD5 of the body, `None` for an empty body.
    pub content_md5: Option<Vec<u8>>,
    /// Unpadded base64 of `content_md5`.
    pub content_md5_base64: Option<String>,
}

/// Build the canonical string of a request.
///
/// ## Format
///
/// ```text
/// [base64(md5(body)) + "\n"] +
/// [Content-Type + "\n"] +
/// (X-PlaceNext-Date | Date) + "\n" +
/// CanonicalizedVendorHeaders + "\n" +
/// URL
/// ```
pub fn canonical_string(parts: &http::request::Parts, body: &[u8]) -> Result<String> {
    let req = SigningRequest::build(parts);
    let (s, _) = string_to_sign(&req, body)?;
    Ok(s)
}

/// Sign a request with `secret_key`.
///
/// Fails with [`placenext_core::ErrorKind::MissingDate`] before hashing
/// anything if neither `X-PlaceNext-Date` nor `Date` is set.
pub fn compute_signature(
    parts: &http::request::Parts,
    body: &[u8],
    secret_key: &[u8],
) -> Result<SigningOutput> {
    let req = SigningRequest::build(parts);
    let (s, content_md5) = string_to_sign(&req, body)?;

    let signature = hmac_sha256(secret_key, s.as_bytes())?;
    Ok(SigningOutput {
        signature_base64: base64_encode(&signature),
        signature,
        content_md5_base64: content_md5.as_deref().map(base64_encode),
        content_md5,
    })
}

fn string_to_sign(req: &SigningRequest, body: &[u8]) -> Result<(String, Option<Vec<u8>>)> {
    let date = match req.header_get(X_PLACENEXT_DATE)? {
        Some(v) => v,
        None => req.header_get(DATE)?.ok_or_else(Error::missing_date)?,
    };

    let mut s = String::new();

    let content_md5 = (!body.is_empty()).then(|| md5(body));
    if let Some(v) = &content_md5 {
        writeln!(&mut s, "{}", base64_encode(v))?;
    }
    if let Some(v) = req.header_get(CONTENT_TYPE)? {
        writeln!(&mut s, "{v}")?;
    }
    writeln!(&mut s, "{date}")?;
    // The vendor line is written even if there are no vendor headers.
    writeln!(&mut s, "{}", canonicalize_header(req)?)?;
    write!(&mut s, "{}", canonicalize_url(req)?)?;

    debug!("string to sign: {}", &s);
    Ok((s, content_md5))
}

fn canonicalize_header(req: &SigningRequest) -> Result<String> {
    Ok(SigningRequest::header_to_string(
        req.header_to_vec_with_prefix(X_PLACENEXT_PREFIX)?,
        ":",
        "",
    ))
}

fn canonicalize_url(req: &SigningRequest) -> Result<String> {
    if req.uri.scheme().is_some() {
        let url = req.uri.to_string();
        // http::Uri renders an empty path as "/".
        if req.uri.path() == "/" && req.uri.query().is_none() {
            if let Some(url) = url.strip_suffix('/') {
                return Ok(url.to_string());
            }
        }
        return Ok(url);
    }

    let scheme = match req.header_get(X_FORWARDED_PROTO)? {
        Some(v) => v,
        None if req.tls => "https",
        None => "http",
    };
    let path_and_query = req.uri.path_and_query().map(|v| v.as_str()).unwrap_or("");

    let mut url = format!("{scheme}://{}{path_and_query}", req.host()?);
    if url.ends_with('/') {
        url.pop();
    }
    Ok(url)
}

/// Authorization is the value of the `Authorization` header:
/// `AimMatic <api_key>:<signature>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    /// The api key.
    pub api_key: String,
    /// Unpadded base64 signature.
    pub signature: String,
}

impl Authorization {
    /// Parse an `Authorization` header value.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || Error::request_invalid(format!("invalid authorization: {value:?}"));

        let (scheme, credential) = value.split_once(' ').ok_or_else(invalid)?;
        if scheme != AUTHORIZATION_SCHEME {
            return Err(invalid());
        }
        let (api_key, signature) = credential.split_once(':').ok_or_else(invalid)?;
        if api_key.is_empty() || signature.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            api_key: api_key.to_string(),
            signature: signature.to_string(),
        })
    }
}

impl Display for Authorization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{AUTHORIZATION_SCHEME} {}:{}", self.api_key, self.signature)
    }
}

/// Verification is the result of checking a signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// The api key the request claims.
    pub api_key: String,
    /// Whether the signature matches.
    pub signature_valid: bool,
    /// Whether `Content-MD5` matches the body. Always true for an empty body
    /// without `Content-MD5`.
    pub content_md5_valid: bool,
}

impl Verification {
    /// Whether the request is authentic and intact.
    pub fn is_valid(&self) -> bool {
        self.signature_valid && self.content_md5_valid
    }
}

/// Verify a received request against `secret_key`.
///
/// The api key is available from [`Authorization::parse`] to look up the
/// secret before calling this.
pub fn verify(
    parts: &http::request::Parts,
    body: &[u8],
    secret_key: &[u8],
) -> Result<Verification> {
    let req = SigningRequest::build(parts);

    let auth = req
        .header_get(AUTHORIZATION)?
        .ok_or_else(|| Error::request_invalid("authorization header is not available"))
        .and_then(Authorization::parse)?;

    let (s, content_md5) = string_to_sign(&req, body)?;

    let signature_valid = match base64_decode(&auth.signature) {
        Ok(sig) => hmac_sha256_verify(secret_key, s.as_bytes(), &sig)?,
        Err(_) => false,
    };
    let content_md5_valid = match (content_md5, req.header_get(CONTENT_MD5)?) {
        (None, None) => true,
        (Some(expected), Some(actual)) => base64_decode(actual).is_ok_and(|v| v == expected),
        _ => false,
    };

    Ok(Verification {
        api_key: auth.api_key,
        signature_valid,
        content_md5_valid,
    })
}
