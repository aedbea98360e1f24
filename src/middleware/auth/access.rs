//! Access-token cookie gate → AuthCtx in request extensions
//!
//! Every request lands in exactly one of four states:
//! - no `accessToken` cookie            → 400, "missing ..." (handler never runs)
//! - cookie verifies                    → AuthCtx inserted, request passed on
//! - cookie verifies but has expired    → 400, "... has expired"
//! - anything else about the cookie     → 400, generic "could not verify"
//!
//! No refresh, sliding expiry or revocation lookup happens here.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::TimeDelta;
use thiserror::Error;

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::middleware::chain::{HttpHandler, HttpMiddleware, handler_fn, middleware_fn};
use crate::services::token::{AccessTokenPayload, TokenService, VerifyError};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// HTTP-only, path `/`, living exactly as long as the token inside it.
pub fn access_cookie(token: String, ttl: TimeDelta) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build()
}

/// Messages sent back when the gate refuses a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthRejection {
    #[error("missing access token cookie, login again")]
    MissingCookie,
    #[error("login again! access token has expired")]
    Expired,
    // The precise cause is deliberately not reported.
    #[error("could not verify access token cookie")]
    Unverified,
}

#[derive(Debug)]
pub enum AuthDecision {
    NoToken,
    Valid(AccessTokenPayload),
    Expired,
    Invalid,
}

impl AuthDecision {
    pub fn rejection(&self) -> Option<AuthRejection> {
        match self {
            AuthDecision::NoToken => Some(AuthRejection::MissingCookie),
            AuthDecision::Valid(_) => None,
            AuthDecision::Expired => Some(AuthRejection::Expired),
            AuthDecision::Invalid => Some(AuthRejection::Unverified),
        }
    }
}

pub fn decide(tokens: &TokenService, headers: &HeaderMap) -> AuthDecision {
    let jar = CookieJar::from_headers(headers);
    let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) else {
        return AuthDecision::NoToken;
    };

    match tokens.verify_access_token(cookie.value()) {
        Ok(payload) => AuthDecision::Valid(payload),
        Err(VerifyError::Expired) => AuthDecision::Expired,
        Err(VerifyError::Invalid) => AuthDecision::Invalid,
    }
}

/// The gate as a chain element. Put it first in the list.
pub fn authenticate(tokens: Arc<TokenService>) -> HttpMiddleware {
    middleware_fn(move |next: HttpHandler| -> HttpHandler {
        let tokens = tokens.clone();
        handler_fn(move |mut req: Request| {
            let decision = decide(&tokens, req.headers());
            let next = next.clone();
            async move {
                let rejection = match decision {
                    AuthDecision::Valid(payload) => {
                        // middleware → extractor への受け渡し
                        req.extensions_mut().insert(AuthCtx::from(payload));
                        return next(req).await;
                    }
                    other => other.rejection().unwrap_or(AuthRejection::Unverified),
                };

                tracing::warn!(
                    method = %req.method(),
                    uri = %req.uri(),
                    reason = %rejection,
                    "access token check failed"
                );
                reject(rejection)
            }
        })
    })
}

fn reject(rejection: AuthRejection) -> Response {
    AppError::bad_request(rejection).into_response()
}
