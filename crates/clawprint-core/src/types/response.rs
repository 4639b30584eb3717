//! Typed response envelope pairing declared fields with the raw object.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClawPrintError, ClawPrintResult};
use crate::types::ApiObject;

/// A registry response: the endpoint's declared fields plus the full raw body.
///
/// Dereferences to the typed view, so `response.trust_score` reads a declared
/// field while `response.raw()` reaches anything the view does not declare.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    data: T,
    raw: ApiObject,
}

impl<T: DeserializeOwned> Response<T> {
    /// Build a response from a parsed JSON body.
    ///
    /// Non-object bodies are wrapped as `{"data": <body>}` so list-shaped
    /// payloads stay reachable.
    pub fn from_value(value: Value) -> ClawPrintResult<Self> {
        let raw = match value {
            Value::Object(fields) => ApiObject::from(fields),
            other => {
                let mut fields = serde_json::Map::new();
                fields.insert("data".to_string(), other);
                ApiObject::from(fields)
            }
        };

        let data = serde_json::from_value::<T>(raw.to_value()).map_err(|e| ClawPrintError::Decode {
            message: format!("Unexpected response shape: {}", e),
            body: Some(raw.to_value()),
        })?;

        Ok(Self { data, raw })
    }
}

impl<T> Response<T> {
    /// The typed view
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The raw response object
    pub fn raw(&self) -> &ApiObject {
        &self.raw
    }

    /// Convert back to the plain JSON the registry returned
    pub fn to_value(&self) -> Value {
        self.raw.to_value()
    }

    /// Split into the typed view and the raw object
    pub fn into_parts(self) -> (T, ApiObject) {
        (self.data, self.raw)
    }
}

impl<T> Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> Serialize for Response<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Trust {
        #[serde(default)]
        handle: Option<String>,
        #[serde(default)]
        trust_score: Option<f64>,
    }

    #[test]
    fn test_typed_and_raw_access() {
        let body = json!({"handle": "legal-eagle", "trust_score": 82, "extra": {"a": 1}});
        let resp: Response<Trust> = Response::from_value(body.clone()).unwrap();

        assert_eq!(resp.handle.as_deref(), Some("legal-eagle"));
        assert_eq!(resp.trust_score, Some(82.0));
        assert_eq!(resp.raw().object("extra").unwrap().get_i64("a"), Some(1));
        assert_eq!(resp.to_value(), body);
        assert_eq!(serde_json::to_value(&resp).unwrap(), body);
    }

    #[test]
    fn test_sparse_body_decodes() {
        let resp: Response<Trust> = Response::from_value(json!({})).unwrap();
        assert_eq!(resp.data(), &Trust { handle: None, trust_score: None });
    }

    #[test]
    fn test_mistyped_field_is_decode_error() {
        let err = Response::<Trust>::from_value(json!({"trust_score": "high"})).unwrap_err();
        assert_eq!(err.code(), Some("decode_error"));
        assert!(err.body().is_some());
    }

    #[test]
    fn test_list_body_is_wrapped() {
        let resp: Response<Trust> = Response::from_value(json!([1, 2])).unwrap();
        assert_eq!(resp.raw().get("data"), Some(&json!([1, 2])));
    }
}
