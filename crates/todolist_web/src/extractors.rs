//! Lenient request body extraction.
//!
//! POST bodies may be url-encoded forms or JSON objects. Nothing here
//! rejects a request: an absent, empty or malformed body yields no fields,
//! and a missing field reads as the empty string.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde_json::Value;
use std::convert::Infallible;

/// Flat key/value view of a request body.
///
/// Repeated keys keep every occurrence; lookups return the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyFields(Vec<(String, String)>);

impl BodyFields {
    /// Parses `body` according to the request's `Content-Type`.
    ///
    /// `application/json` (and `+json` types) is read as a JSON object;
    /// anything else, including no content type, is read as url-encoded.
    pub fn parse(headers: &HeaderMap, body: &[u8]) -> Self {
        if is_json(headers) {
            Self::from_json(body)
        } else {
            Self::from_urlencoded(body)
        }
    }

    fn from_urlencoded(body: &[u8]) -> Self {
        Self(serde_urlencoded::from_bytes::<Vec<(String, String)>>(body).unwrap_or_default())
    }

    fn from_json(body: &[u8]) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };
        let fields = map
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(text) => text,
                    Value::Number(number) => number.to_string(),
                    Value::Bool(flag) => flag.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((key, text))
            })
            .collect();
        Self(fields)
    }

    /// First value of `key`, or `""` when the body does not carry it.
    pub fn field(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map_or("", |(_, value)| value.as_str())
    }
}

#[async_trait]
impl<S> FromRequest<S> for BodyFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let body = Bytes::from_request(req, state).await.unwrap_or_default();
        Ok(Self::parse(&headers, &body))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}
