/*
 * Responsibility
 * - /companies 系 handler (すべて認証ゲートの内側で動く)
 * - Path/Json を extractor で受け、DTO validation → CompanyService 呼び出し
 * - 失敗はすべて AppError で返し、ステータス変換は error_handler に任せる
 */
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    api::v1::{
        dto::{
            auth::MessageResponse,
            companies::{CompanyRequest, CreatedResponse},
        },
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    middleware::error_handler::{HandlerResult, body_rejection},
    models::Company,
    state::AppState,
};

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|e| AppError::bad_request_wrapped(e, "invalid company id"))
}

fn parse_body(
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<CompanyRequest, AppError> {
    payload.map(|Json(req)| req).map_err(body_rejection)
}

pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Company> {
    let id = parse_id(&id)?;
    let company = state.companies.get(id).await?;

    Ok(Json(company))
}

pub async fn create_company(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> HandlerResult<CreatedResponse> {
    let input = parse_body(payload)?.validate()?;
    let id = state.companies.create(&input).await?;

    info!(subject = %auth.subject, token_id = %auth.token_id, company_id = %id, "company created");
    Ok(Json(CreatedResponse { id }))
}

pub async fn update_company(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(id): Path<String>,
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> HandlerResult<MessageResponse> {
    let id = parse_id(&id)?;
    let input = parse_body(payload)?.validate()?;
    state.companies.update(id, &input).await?;

    info!(subject = %auth.subject, token_id = %auth.token_id, company_id = %id, "company updated");
    Ok(Json(MessageResponse::new("successfully updated company")))
}

pub async fn delete_company(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(id): Path<String>,
) -> HandlerResult<MessageResponse> {
    let id = parse_id(&id)?;
    state.companies.delete(id).await?;

    info!(subject = %auth.subject, token_id = %auth.token_id, company_id = %id, "company deleted");
    Ok(Json(MessageResponse::new("successfully deleted company")))
}
