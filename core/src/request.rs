use http::header::AsHeaderName;
use http::header::HOST;
use http::HeaderMap;
use http::Uri;

use crate::{Error, Result};

/// ConnectionInfo describes the connection a request arrived on.
///
/// Servers insert it into the request extensions so that relative request
/// uris can be canonicalized with the right scheme. Requests without it are
/// treated as plain http.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// Whether the connection is protected by TLS.
    pub tls: bool,
}

/// Signing view of a request.
///
/// It borrows the request parts and never modifies them.
#[derive(Debug)]
pub struct SigningRequest<'a> {
    /// HTTP uri, absolute or relative.
    pub uri: &'a Uri,
    /// HTTP headers.
    pub headers: &'a HeaderMap,
    /// Whether the request arrived over TLS.
    pub tls: bool,
}

impl<'a> SigningRequest<'a> {
    /// Build a signing view from http::request::Parts.
    pub fn build(parts: &'a http::request::Parts) -> Self {
        SigningRequest {
            uri: &parts.uri,
            headers: &parts.headers,
            tls: parts
                .extensions
                .get::<ConnectionInfo>()
                .map(|c| c.tls)
                .unwrap_or_default(),
        }
    }

    /// Get the first value of a header.
    ///
    /// Returns `None` if the header is not found or its value is empty.
    pub fn header_get(&self, key: impl AsHeaderName) -> Result<Option<&'a str>> {
        match self.headers.get(key) {
            Some(v) => {
                let v = v.to_str()?;
                Ok((!v.is_empty()).then_some(v))
            }
            None => Ok(None),
        }
    }

    /// Get the host of this request.
    ///
    /// Absolute uris carry their own authority. Relative uris, as seen by a
    /// server, take it from the `Host` header.
    pub fn host(&self) -> Result<&'a str> {
        if let Some(authority) = self.uri.authority() {
            return Ok(authority.as_str());
        }

        self.header_get(HOST)?
            .ok_or_else(|| Error::request_invalid("request without host is invalid for signing"))
    }

    /// Get headers whose name starts with `prefix`, case-insensitively.
    ///
    /// Names are lower-cased. A header with several values yields one entry
    /// whose values are sorted and joined by `,`.
    pub fn header_to_vec_with_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        let prefix = prefix.to_ascii_lowercase();

        let mut headers = Vec::new();
        for name in self.headers.keys() {
            // HeaderName is always lower-case.
            if !name.as_str().starts_with(&prefix) {
                continue;
            }

            let mut values = self
                .headers
                .get_all(name)
                .iter()
                .map(|v| v.to_str())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            values.sort_unstable();

            headers.push((name.as_str().to_string(), values.join(",")));
        }

        Ok(headers)
    }

    /// Convert sorted headers to string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a:b\nc:d"
    /// ```
    pub fn header_to_string(mut headers: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        // Sort via header name.
        headers.sort();

        for (idx, (k, v)) in headers.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            s.push_str(sep);
            s.push_str(&v);
        }

        s
    }
}
