use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::AuthCtx;
use crate::error::AppError;

/// Extractor for the [`AuthCtx`] inserted by the auth gate.
///
/// A missing context means the route was mounted without the gate; that is
/// answered with 401 rather than silently treated as anonymous.
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or_else(|| AppError::unauthorized("request is not authenticated"))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        extract::Request,
        http::{StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::middleware::error_handler::ErrorResponse;

    async fn whoami(AuthCtxExtractor(ctx): AuthCtxExtractor) -> String {
        ctx.subject
    }

    fn app() -> Router {
        Router::new().route("/whoami", get(whoami))
    }

    fn request() -> Request {
        Request::builder().uri("/whoami").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn route_without_the_gate_is_unauthorized() {
        let res = app().oneshot(request()).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            serde_json::from_slice::<ErrorResponse>(&bytes).unwrap(),
            ErrorResponse {
                message: "request is not authenticated".to_string(),
                code: 401,
            }
        );
    }

    #[tokio::test]
    async fn context_left_by_the_gate_reaches_the_handler() {
        let mut req = request();
        req.extensions_mut().insert(AuthCtx {
            subject: "alice".to_string(),
            token_id: Uuid::new_v4(),
        });

        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"alice");
    }
}
