/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /login は認証ゲートの外
 * - /companies 系は chain(handler, [authenticate]) で包み、on_service でマウントする
 */
use axum::{
    Router,
    handler::Handler,
    routing::{MethodFilter, get, on_service, post},
};

use crate::{
    api::v1::handlers::{
        auth::login,
        companies::{create_company, delete_company, get_company, update_company},
        health::health,
    },
    middleware::{
        auth::authenticate,
        chain::{ChainService, chain, from_axum},
    },
    state::AppState,
};

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route(
            "/companies",
            on_service(MethodFilter::POST, guarded(create_company, state)),
        )
        .route(
            "/companies/{id}",
            on_service(MethodFilter::GET, guarded(get_company, state))
                .on_service(MethodFilter::PATCH, guarded(update_company, state))
                .on_service(MethodFilter::DELETE, guarded(delete_company, state)),
        )
}

// The auth gate always runs before the handler.
fn guarded<H, T>(handler: H, state: &AppState) -> ChainService
where
    H: Handler<T, AppState>,
    T: 'static,
{
    ChainService::new(chain(
        from_axum(handler, state.clone()),
        vec![authenticate(state.tokens.clone())],
    ))
}
