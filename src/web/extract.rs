//! Request extractors for the Postbox HTTP binding.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::service::StatusResponse;
use crate::web::error::ApiReply;
use crate::PostboxError;

/// A JSON body extractor whose rejections use the failure response shape.
///
/// A body that is not JSON, or that does not deserialize into `T`, is
/// answered with `400` and `{"success": false, "message", "error": "INVALID_INPUT"}`
/// instead of axum's plain-text rejection.
pub struct RequestJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RequestJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiReply<StatusResponse>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let err = PostboxError::invalid_input(format!("Invalid JSON: {}", e.body_text()));
            ApiReply(StatusResponse::failure(&err))
        })?;

        Ok(RequestJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::{routing::post, Router};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    async fn echo(RequestJson(named): RequestJson<Named>) -> String {
        named.name
    }

    fn router() -> Router {
        Router::new().route("/echo", post(echo))
    }

    async fn call(content_type: &str, body: &'static str) -> (StatusCode, Vec<u8>) {
        let request = axum::http::Request::post("/echo")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let (status, body) = call("application/json", r#"{"name": "alice"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"alice");
    }

    #[tokio::test]
    async fn test_malformed_body_uses_failure_shape() {
        let (status, body) = call("application/json", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "INVALID_INPUT");
        assert!(json["message"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_missing_content_type_uses_failure_shape() {
        let (status, body) = call("text/plain", r#"{"name": "alice"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_wrong_field_type_uses_failure_shape() {
        let (status, body) = call("application/json", r#"{"name": 5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
    }
}
