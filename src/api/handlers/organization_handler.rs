//! Organization handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{ResourceId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateOrganization, Organization, UpdateOrganization};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create organization routes
pub fn organization_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_organizations).post(create_organization))
        .route(
            "/:id",
            get(get_organization)
                .put(update_organization)
                .delete(delete_organization),
        )
}

#[utoipa::path(
    get,
    path = "/organizations",
    tag = "Organizations",
    responses(
        (status = 200, description = "Envelope wrapping every organization", body = [Organization])
    )
)]
pub async fn list_organizations(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Organization>>>> {
    Ok(Json(state.organization_service.index().await?))
}

#[utoipa::path(
    get,
    path = "/organizations/{id}",
    tag = "Organizations",
    params(
        ("id" = i64, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Envelope wrapping the organization", body = Organization),
        (status = 404, description = "Organization not found")
    )
)]
pub async fn get_organization(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<ApiResponse<Organization>>> {
    Ok(Json(state.organization_service.show(id).await?))
}

#[utoipa::path(
    post,
    path = "/organizations",
    tag = "Organizations",
    request_body = CreateOrganization,
    responses(
        (status = 201, description = "Organization created successfully", body = Organization),
        (status = 400, description = "Invalid body or domain already in use")
    )
)]
pub async fn create_organization(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrganization>,
) -> AppResult<Created<Organization>> {
    Ok(Created(state.organization_service.store(payload).await?))
}

#[utoipa::path(
    put,
    path = "/organizations/{id}",
    tag = "Organizations",
    params(
        ("id" = i64, Path, description = "Organization ID")
    ),
    request_body = UpdateOrganization,
    responses(
        (status = 200, description = "Organization updated successfully", body = Organization),
        (status = 400, description = "Invalid body or domain already in use"),
        (status = 404, description = "Organization not found")
    )
)]
pub async fn update_organization(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(payload): ValidatedJson<UpdateOrganization>,
) -> AppResult<Json<ApiResponse<Organization>>> {
    Ok(Json(state.organization_service.update(id, payload).await?))
}

/// Delete an organization. Refused while it still owns workspaces.
#[utoipa::path(
    delete,
    path = "/organizations/{id}",
    tag = "Organizations",
    params(
        ("id" = i64, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Organization deleted successfully"),
        (status = 400, description = "Organization still has workspaces"),
        (status = 404, description = "Organization not found")
    )
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<ApiResponse<()>>> {
    Ok(Json(state.organization_service.destroy(id).await?))
}
