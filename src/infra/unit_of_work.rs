//! Unit of Work pattern implementation.
//!
//! Centralizes access to every repository so services depend on a single
//! handle instead of one constructor argument per table. All repositories
//! share the same pooled connection.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    OrganizationRepository, OrganizationStore, UserRepository, UserStore, WorkspaceRepository,
    WorkspaceStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get organization repository
    fn organizations(&self) -> Arc<dyn OrganizationRepository>;

    /// Get workspace repository
    fn workspaces(&self) -> Arc<dyn WorkspaceRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    organization_repo: Arc<OrganizationStore>,
    workspace_repo: Arc<WorkspaceStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            organization_repo: Arc::new(OrganizationStore::new(db.clone())),
            workspace_repo: Arc::new(WorkspaceStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn organizations(&self) -> Arc<dyn OrganizationRepository> {
        self.organization_repo.clone()
    }

    fn workspaces(&self) -> Arc<dyn WorkspaceRepository> {
        self.workspace_repo.clone()
    }
}
