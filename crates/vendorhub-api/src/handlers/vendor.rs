//! Vendor CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use vendorhub_entity::vendor::model::Vendor;

use crate::dto::request::VendorRequest;
use crate::dto::response::{DeleteResponse, VendorListResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListQuery, ValidJson, parse_vendor_id};
use crate::state::AppState;

/// POST /api/vendors
pub async fn create_vendor(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<VendorRequest>,
) -> Result<(StatusCode, Json<Vendor>), ApiError> {
    let vendor = state.vendor_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// GET /api/vendors
pub async fn list_vendors(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<VendorListResponse>, ApiError> {
    let page = state
        .vendor_service
        .list(query.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/vendors/{id}
pub async fn get_vendor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vendor>, ApiError> {
    let id = parse_vendor_id(&id)?;
    let vendor = state.vendor_service.get(&auth, id).await?;
    Ok(Json(vendor))
}

/// PUT /api/vendors/{id}
pub async fn update_vendor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<VendorRequest>,
) -> Result<Json<Vendor>, ApiError> {
    let id = parse_vendor_id(&id)?;
    let vendor = state.vendor_service.update(&auth, id, req.into()).await?;
    Ok(Json(vendor))
}

/// DELETE /api/vendors/{id}
pub async fn delete_vendor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_vendor_id(&id)?;
    state.vendor_service.delete(&auth, id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
