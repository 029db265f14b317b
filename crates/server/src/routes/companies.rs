use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use models::company;
use service::company::domain::{CompanyInput, CompanyUpdate};

use crate::errors::ApiError;
use crate::extract::LenientJson;
use crate::state::ServerState;

#[utoipa::path(get, path = "/companies", tag = "companies", responses((status = 200, description = "Every company as code and name", body = [crate::openapi::CompanySummaryDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<company::Summary>>, ApiError> {
    Ok(Json(state.companies.list().await?))
}

#[utoipa::path(
    get,
    path = "/companies/{code}",
    tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "Company with invoice ids and industry fields", body = crate::openapi::CompanyDetailEnvelope),
        (status = 404, description = "Company cannot be found", body = crate::openapi::ErrorEnvelope)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let company = state.companies.get(&code).await?;
    Ok(Json(json!({ "company": company })))
}

#[utoipa::path(
    post,
    path = "/companies",
    tag = "companies",
    request_body = crate::openapi::CompanyInputDoc,
    responses(
        (status = 200, description = "Created company", body = crate::openapi::CompanyEnvelope),
        (status = 404, description = "Please provide all inputs", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Store failure", body = crate::openapi::StoreErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    LenientJson(input): LenientJson<CompanyInput>,
) -> Result<Json<Value>, ApiError> {
    let company = state.companies.create(input).await?;
    Ok(Json(json!({ "company": company })))
}

#[utoipa::path(
    put,
    path = "/companies/{code}",
    tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    request_body = crate::openapi::CompanyUpdateDoc,
    responses(
        (status = 200, description = "Updated company", body = crate::openapi::CompanyEnvelope),
        (status = 404, description = "Company cannot be found", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Missing field or store failure", body = crate::openapi::StoreErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    LenientJson(input): LenientJson<CompanyUpdate>,
) -> Result<Json<Value>, ApiError> {
    let company = state.companies.update(&code, input).await?;
    Ok(Json(json!({ "company": company })))
}

#[utoipa::path(
    delete,
    path = "/companies/{code}",
    tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeletedDoc),
        (status = 404, description = "Company cannot be found", body = crate::openapi::ErrorEnvelope)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.companies.delete(&code).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
