use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use service::industry::domain::{AssociationInput, IndustryInput};

use crate::errors::ApiError;
use crate::extract::LenientJson;
use crate::state::ServerState;

#[utoipa::path(get, path = "/industries", tag = "industries", responses((status = 200, description = "Industries with their company codes", body = crate::openapi::IndustryListDoc)))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Value>, ApiError> {
    let industries = state.industries.list().await?;
    Ok(Json(json!({ "industries": industries })))
}

#[utoipa::path(
    post,
    path = "/industries",
    tag = "industries",
    request_body = crate::openapi::IndustryInputDoc,
    responses(
        (status = 200, description = "Created industry", body = crate::openapi::IndustryEnvelope),
        (status = 404, description = "Please provide all inputs", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Store failure", body = crate::openapi::StoreErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    LenientJson(input): LenientJson<IndustryInput>,
) -> Result<Json<Value>, ApiError> {
    let industry = state.industries.create(input).await?;
    Ok(Json(json!({ "industry": industry })))
}

#[utoipa::path(
    post,
    path = "/industries/{code}/companies",
    tag = "industries",
    params(("code" = String, Path, description = "Industry code")),
    request_body = crate::openapi::AssociationInputDoc,
    responses(
        (status = 200, description = "Link created", body = crate::openapi::AssociationEnvelope),
        (status = 404, description = "Please provide all inputs", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Unknown company or industry, or duplicate link", body = crate::openapi::StoreErrorDoc)
    )
)]
pub async fn associate(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    LenientJson(input): LenientJson<AssociationInput>,
) -> Result<Json<Value>, ApiError> {
    let association = state.industries.associate(&code, input).await?;
    Ok(Json(json!({ "association": association })))
}
