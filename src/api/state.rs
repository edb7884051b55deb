//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    OrganizationService, ServiceContainer, Services, UserService, WorkspaceService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Organization service
    pub organization_service: Arc<dyn OrganizationService>,
    /// Workspace service
    pub workspace_service: Arc<dyn WorkspaceService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            user_service: container.users(),
            organization_service: container.organizations(),
            workspace_service: container.workspaces(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        organization_service: Arc<dyn OrganizationService>,
        workspace_service: Arc<dyn WorkspaceService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            organization_service,
            workspace_service,
            database,
        }
    }
}
