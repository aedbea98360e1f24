/*
 * Responsibility
 * - POST /login: 資格情報を受け取り、access token を accessToken cookie として返す
 * - 認証ゲートの外に置く
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use crate::{
    api::v1::dto::auth::{LoginRequest, MessageResponse},
    error::AppError,
    middleware::{auth::access_cookie, error_handler::body_rejection},
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let Json(req) = payload.map_err(body_rejection)?;
    let username = req.validate()?;

    let token = state.tokens.create_access_token(&username)?;
    info!(subject = %username, "access token issued");

    let jar = jar.add(access_cookie(token, state.tokens.ttl()));
    Ok((jar, Json(MessageResponse::new("logged in, cookie has been set"))))
}
