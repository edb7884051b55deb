//! Workspace repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::workspace::{self, ActiveModel, Entity as WorkspaceEntity};
use crate::config::RESOURCE_WORKSPACE;
use crate::domain::{CreateWorkspace, Timestamps, UpdateWorkspace, Workspace};
use crate::errors::{AppError, AppResult, DbResultExt, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Workspace repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Find workspace by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Workspace>>;

    /// List all workspaces ordered by ID
    async fn list(&self) -> AppResult<Vec<Workspace>>;

    /// Number of workspaces that belong to an organization
    async fn count_by_organization(&self, organization_id: i64) -> AppResult<u64>;

    /// Insert a new workspace, stamping both timestamps
    async fn create(&self, input: CreateWorkspace) -> AppResult<Workspace>;

    /// Apply the present fields of `changes`, stamping `updated_at`
    async fn update(&self, id: i64, changes: UpdateWorkspace) -> AppResult<Workspace>;

    /// Delete workspace by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of WorkspaceRepository
pub struct WorkspaceStore {
    db: DatabaseConnection,
}

impl WorkspaceStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkspaceRepository for WorkspaceStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Workspace>> {
        let result = WorkspaceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Workspace::from))
    }

    async fn list(&self) -> AppResult<Vec<Workspace>> {
        let models = WorkspaceEntity::find()
            .order_by_asc(workspace::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Workspace::from).collect())
    }

    async fn count_by_organization(&self, organization_id: i64) -> AppResult<u64> {
        WorkspaceEntity::find()
            .filter(workspace::Column::OrganizationId.eq(organization_id))
            .count(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn create(&self, input: CreateWorkspace) -> AppResult<Workspace> {
        let stamps = Timestamps::on_create(Utc::now());
        let active_model = ActiveModel {
            id: NotSet,
            organization_id: Set(input.organization_id),
            name: Set(input.name),
            description: Set(input.description),
            settings: Set(input.settings),
            created_at: Set(stamps.created_at),
            updated_at: Set(stamps.updated_at),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .or_creation_failed(RESOURCE_WORKSPACE)?;
        Ok(Workspace::from(model))
    }

    async fn update(&self, id: i64, changes: UpdateWorkspace) -> AppResult<Workspace> {
        let existing = WorkspaceEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(RESOURCE_WORKSPACE, id)?;

        let stamps =
            Timestamps::new(existing.created_at, existing.updated_at).on_update(Utc::now());
        let mut active: ActiveModel = existing.into();

        if let Some(organization_id) = changes.organization_id {
            active.organization_id = Set(organization_id);
        }
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }
        if let Some(settings) = changes.settings {
            active.settings = Set(Some(settings));
        }
        active.updated_at = Set(stamps.updated_at);

        let model = active
            .update(&self.db)
            .await
            .or_update_failed(RESOURCE_WORKSPACE, id)?;
        Ok(Workspace::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = WorkspaceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .or_deletion_failed(RESOURCE_WORKSPACE, id)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(RESOURCE_WORKSPACE, id));
        }

        Ok(())
    }
}
