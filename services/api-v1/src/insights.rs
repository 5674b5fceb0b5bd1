use bytes::Bytes;
use http::Method;
use placenext_core::time::{unix_nanos, DateTime};
use placenext_core::{ErrorCode, ErrorStack, Result};

use crate::{NssResponse, V1, API_VERSION};

fn invalid_date_range() -> ErrorStack {
    ErrorStack::new(ErrorCode::INVALID_DATE_RANGE, "invalid date range")
}

/// Build the `start`/`end` query of an insights call.
///
/// Returns `None` if neither bound is given.
fn range_query(start: Option<DateTime>, end: Option<DateTime>) -> Result<Option<String>> {
    match (start, end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => {
            if end < start {
                return Err(invalid_date_range().into());
            }

            // Keys in sorted order.
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("end", &unix_nanos(end)?.to_string())
                .append_pair("start", &unix_nanos(start)?.to_string())
                .finish();
            Ok(Some(query))
        }
        _ => Err(invalid_date_range()
            .stack_after("start and end time both must be given")
            .into()),
    }
}

impl V1 {
    /// Get the Net Sentiment Score of all time.
    pub async fn nss(&self) -> Result<NssResponse> {
        self.nss_by_range(None, None).await
    }

    /// Get the Net Sentiment Score between `start` and `end`.
    ///
    /// Both bounds must be given, or neither. Validation errors carry
    /// [`ErrorCode::INVALID_DATE_RANGE`] and are returned before any request
    /// is sent.
    pub async fn nss_by_range(
        &self,
        start: Option<DateTime>,
        end: Option<DateTime>,
    ) -> Result<NssResponse> {
        let mut uri = format!("{API_VERSION}/insights/nss");
        if let Some(query) = range_query(start, end)? {
            uri.push('?');
            uri.push_str(&query);
        }

        let req = http::Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Bytes::new())?;
        self.call(req).await
    }
}
