//! `x-request-id` assignment, echoing, and lookup.

use axum::http::{HeaderName, Request};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

use crate::http::constants::HEADER_REQUEST_ID;

const fn header_name() -> HeaderName {
    HeaderName::from_static(HEADER_REQUEST_ID)
}

/// Assigns a UUID to requests that arrive without an identifier.
pub(crate) fn set_request_id() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(header_name(), MakeRequestUuid)
}

/// Copies the request identifier onto the response.
pub(crate) fn propagate_request_id() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(header_name())
}

/// Identifier attached to `request`, or an empty string when none was assigned.
pub(crate) fn request_id_of<B>(request: &Request<B>) -> String {
    request
        .extensions()
        .get::<RequestId>()
        .map(RequestId::header_value)
        .or_else(|| request.headers().get(HEADER_REQUEST_ID))
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn assigned_identifier_wins_over_raw_header() -> anyhow::Result<()> {
        let mut request = Request::builder()
            .header(HEADER_REQUEST_ID, "from-client")
            .body(())?;
        request
            .extensions_mut()
            .insert(RequestId::new(HeaderValue::from_static("assigned")));
        assert_eq!(request_id_of(&request), "assigned");
        Ok(())
    }

    #[test]
    fn raw_header_is_used_without_assignment() -> anyhow::Result<()> {
        let request = Request::builder()
            .header(HEADER_REQUEST_ID, "from-client")
            .body(())?;
        assert_eq!(request_id_of(&request), "from-client");
        Ok(())
    }

    #[test]
    fn missing_identifier_is_empty() -> anyhow::Result<()> {
        let request = Request::builder().body(())?;
        assert_eq!(request_id_of(&request), "");
        Ok(())
    }
}
