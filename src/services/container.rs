//! Service Container - Centralized service access.
//!
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{
    OrganizationManager, OrganizationService, UserManager, UserService, WorkspaceManager,
    WorkspaceService,
};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get organization service
    fn organizations(&self) -> Arc<dyn OrganizationService>;

    /// Get workspace service
    fn workspaces(&self) -> Arc<dyn WorkspaceService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    user_service: Arc<dyn UserService>,
    organization_service: Arc<dyn OrganizationService>,
    workspace_service: Arc<dyn WorkspaceService>,
}

impl Services {
    /// Create service container from a database connection. All services
    /// share one Unit of Work.
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            user_service: Arc::new(UserManager::new(uow.clone())),
            organization_service: Arc::new(OrganizationManager::new(uow.clone())),
            workspace_service: Arc::new(WorkspaceManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn organizations(&self) -> Arc<dyn OrganizationService> {
        self.organization_service.clone()
    }

    fn workspaces(&self) -> Arc<dyn WorkspaceService> {
        self.workspace_service.clone()
    }
}
