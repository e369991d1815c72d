//! Client for the remote events API.
//!
//! Every call is a single JSON request/response: no retries, no auth, and no
//! timeout unless one is configured. Response bodies are parsed as JSON
//! regardless of the HTTP status.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::utils::config::ApiConfig;

pub mod event;
pub mod registration;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response did not contain an id: {0}")]
    Rejected(Value),
}

pub type ApiResult<T> = Result<T, ApiError>;

pub struct Api {
    base_url: String,
    http: reqwest::Client,
}

impl Api {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut http = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            http = http.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: http.build()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET` a path and parse the body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let res = self.http.get(self.url(path)).send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        tracing::debug!("GET {path} -> {status}");
        Ok(serde_json::from_slice(&body)?)
    }

    /// `POST` a JSON body to a path and return the parsed response body.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let res = self.http.post(self.url(path)).json(body).send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        tracing::debug!("POST {path} -> {status}");
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Extract the `id` of a newly created resource.
///
/// Mirrors a truthiness check: a missing, `null`, `false`, `0` or `""` id
/// means the resource was not created.
pub fn created_id(body: Value) -> ApiResult<Value> {
    let truthy = match body.get("id") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(_) => true,
    };
    match (truthy, body) {
        (true, Value::Object(mut map)) => Ok(map.remove("id").unwrap_or(Value::Null)),
        (_, body) => Err(ApiError::Rejected(body)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn created_id_accepts_truthy_ids() {
        assert_eq!(created_id(json!({"id": "abc", "title": "x"})).unwrap(), json!("abc"));
        assert_eq!(created_id(json!({"id": 7})).unwrap(), json!(7));
    }

    #[test]
    fn created_id_rejects_everything_else() {
        for body in [
            json!({"detail": "validation error"}),
            json!({"id": null}),
            json!({"id": ""}),
            json!({"id": 0}),
            json!({"id": false}),
            json!([{"id": 1}]),
        ] {
            assert!(matches!(created_id(body), Err(ApiError::Rejected(_))));
        }
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = Api::new(&ApiConfig { base_url: "http://localhost:8000/".into(), timeout_secs: None })
            .unwrap();
        assert_eq!(api.url("/api/events"), "http://localhost:8000/api/events");
    }
}
