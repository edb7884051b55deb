//! Workspace handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{ResourceId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateWorkspace, UpdateWorkspace, Workspace};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create workspace routes
pub fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workspaces).post(create_workspace))
        .route(
            "/:id",
            get(get_workspace)
                .put(update_workspace)
                .delete(delete_workspace),
        )
}

/// List all workspaces
#[utoipa::path(
    get,
    path = "/workspaces",
    tag = "Workspaces",
    responses(
        (status = 200, description = "Envelope wrapping every workspace", body = [Workspace])
    )
)]
pub async fn list_workspaces(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Workspace>>>> {
    Ok(Json(state.workspace_service.index().await?))
}

/// Get workspace by ID
#[utoipa::path(
    get,
    path = "/workspaces/{id}",
    tag = "Workspaces",
    params(
        ("id" = i64, Path, description = "Workspace ID")
    ),
    responses(
        (status = 200, description = "Envelope wrapping the workspace", body = Workspace),
        (status = 404, description = "Workspace not found")
    )
)]
pub async fn get_workspace(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<ApiResponse<Workspace>>> {
    Ok(Json(state.workspace_service.show(id).await?))
}

/// Create a workspace under an existing organization
#[utoipa::path(
    post,
    path = "/workspaces",
    tag = "Workspaces",
    request_body = CreateWorkspace,
    responses(
        (status = 201, description = "Workspace created successfully", body = Workspace),
        (status = 400, description = "Invalid body or unknown organization")
    )
)]
pub async fn create_workspace(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateWorkspace>,
) -> AppResult<Created<Workspace>> {
    Ok(Created(state.workspace_service.store(payload).await?))
}

/// Update workspace
#[utoipa::path(
    put,
    path = "/workspaces/{id}",
    tag = "Workspaces",
    params(
        ("id" = i64, Path, description = "Workspace ID")
    ),
    request_body = UpdateWorkspace,
    responses(
        (status = 200, description = "Workspace updated successfully", body = Workspace),
        (status = 400, description = "Invalid body or unknown organization"),
        (status = 404, description = "Workspace not found")
    )
)]
pub async fn update_workspace(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(payload): ValidatedJson<UpdateWorkspace>,
) -> AppResult<Json<ApiResponse<Workspace>>> {
    Ok(Json(state.workspace_service.update(id, payload).await?))
}

/// Delete workspace
#[utoipa::path(
    delete,
    path = "/workspaces/{id}",
    tag = "Workspaces",
    params(
        ("id" = i64, Path, description = "Workspace ID")
    ),
    responses(
        (status = 200, description = "Workspace deleted successfully"),
        (status = 404, description = "Workspace not found")
    )
)]
pub async fn delete_workspace(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<ApiResponse<()>>> {
    Ok(Json(state.workspace_service.destroy(id).await?))
}
