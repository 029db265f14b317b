use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use service::invoice::domain::{parse_id, InvoiceInput, InvoiceUpdate};

use crate::errors::ApiError;
use crate::extract::LenientJson;
use crate::state::ServerState;

/// Rows are wrapped in one extra array: `{"invoices": [[...]]}`.
#[utoipa::path(get, path = "/invoices", tag = "invoices", responses((status = 200, description = "Every invoice as id and comp_code, nested once", body = crate::openapi::InvoiceListDoc)))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Value>, ApiError> {
    let rows = state.invoices.list().await?;
    Ok(Json(json!({ "invoices": [rows] })))
}

#[utoipa::path(
    get,
    path = "/invoices/{id}",
    tag = "invoices",
    params(("id" = String, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Invoice with its company", body = crate::openapi::InvoiceDetailEnvelope),
        (status = 404, description = "Invoice cannot be found", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Non-integer id or store failure", body = crate::openapi::StoreErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let invoice = state.invoices.get(parse_id(&raw_id)?).await?;
    Ok(Json(json!({ "invoice": invoice })))
}

#[utoipa::path(
    post,
    path = "/invoices",
    tag = "invoices",
    request_body = crate::openapi::InvoiceInputDoc,
    responses(
        (status = 200, description = "Created invoice", body = crate::openapi::InvoiceEnvelope),
        (status = 404, description = "Please provide all inputs", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Store failure", body = crate::openapi::StoreErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    LenientJson(input): LenientJson<InvoiceInput>,
) -> Result<Json<Value>, ApiError> {
    let invoice = state.invoices.create(input).await?;
    Ok(Json(json!({ "invoice": invoice })))
}

#[utoipa::path(
    put,
    path = "/invoices/{id}",
    tag = "invoices",
    params(("id" = String, Path, description = "Invoice id")),
    request_body = crate::openapi::InvoiceUpdateDoc,
    responses(
        (status = 200, description = "Updated invoice", body = crate::openapi::InvoiceEnvelope),
        (status = 404, description = "Invoice cannot be found", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Missing amount, non-integer id or store failure", body = crate::openapi::StoreErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    LenientJson(input): LenientJson<InvoiceUpdate>,
) -> Result<Json<Value>, ApiError> {
    let invoice = state.invoices.update(parse_id(&raw_id)?, input).await?;
    Ok(Json(json!({ "invoice": invoice })))
}

#[utoipa::path(
    delete,
    path = "/invoices/{id}",
    tag = "invoices",
    params(("id" = String, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeletedDoc),
        (status = 404, description = "Invoice cannot be found", body = crate::openapi::ErrorEnvelope)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.invoices.delete(parse_id(&raw_id)?).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
