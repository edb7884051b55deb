//! Workspace service - Handles workspace use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::RESOURCE_WORKSPACE;
use crate::domain::{CreateWorkspace, UpdateWorkspace, Workspace};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::ApiResponse;

/// Workspace service trait for dependency injection.
#[async_trait]
pub trait WorkspaceService: Send + Sync {
    /// All workspaces, ordered by ID
    async fn index(&self) -> AppResult<ApiResponse<Vec<Workspace>>>;

    /// One workspace; `ResourceNotFound` if absent
    async fn show(&self, id: i64) -> AppResult<ApiResponse<Workspace>>;

    /// Create a workspace under an existing organization
    async fn store(&self, input: CreateWorkspace) -> AppResult<ApiResponse<Workspace>>;

    /// Partially update a workspace
    async fn update(&self, id: i64, input: UpdateWorkspace) -> AppResult<ApiResponse<Workspace>>;

    /// Delete a workspace; the envelope carries no payload
    async fn destroy(&self, id: i64) -> AppResult<ApiResponse<()>>;
}

/// Concrete implementation of WorkspaceService using Unit of Work.
pub struct WorkspaceManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> WorkspaceManager<U> {
    /// Create new workspace service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn organization_exists(&self, organization_id: i64) -> AppResult<bool> {
        Ok(self
            .uow
            .organizations()
            .find_by_id(organization_id)
            .await?
            .is_some())
    }
}

#[async_trait]
impl<U: UnitOfWork> WorkspaceService for WorkspaceManager<U> {
    #[instrument(skip(self))]
    async fn index(&self) -> AppResult<ApiResponse<Vec<Workspace>>> {
        let workspaces = self.uow.workspaces().list().await?;
        Ok(ApiResponse::success(workspaces))
    }

    #[instrument(skip(self))]
    async fn show(&self, id: i64) -> AppResult<ApiResponse<Workspace>> {
        let workspace = self
            .uow
            .workspaces()
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_WORKSPACE, id)?;

        Ok(ApiResponse::success(workspace))
    }

    #[instrument(skip(self, input), fields(organization_id = input.organization_id))]
    async fn store(&self, input: CreateWorkspace) -> AppResult<ApiResponse<Workspace>> {
        if !self.organization_exists(input.organization_id).await? {
            return Err(AppError::creation(format!(
                "Workspace could not be created: organization with id {} does not exist",
                input.organization_id
            )));
        }

        let workspace = self.uow.workspaces().create(input).await?;
        info!(workspace_id = workspace.id, "Workspace created");

        Ok(ApiResponse::with_message(
            workspace,
            "Workspace created successfully",
        ))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: UpdateWorkspace) -> AppResult<ApiResponse<Workspace>> {
        self.uow
            .workspaces()
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_WORKSPACE, id)?;

        if let Some(organization_id) = input.organization_id {
            if !self.organization_exists(organization_id).await? {
                return Err(AppError::update(format!(
                    "Workspace with id {} could not be updated: organization with id {} does not exist",
                    id, organization_id
                )));
            }
        }

        let workspace = self.uow.workspaces().update(id, input).await?;
        info!("Workspace updated");

        Ok(ApiResponse::with_message(
            workspace,
            "Workspace updated successfully",
        ))
    }

    #[instrument(skip(self))]
    async fn destroy(&self, id: i64) -> AppResult<ApiResponse<()>> {
        self.uow.workspaces().delete(id).await?;
        info!("Workspace deleted");

        Ok(ApiResponse::message("Workspace deleted successfully"))
    }
}
