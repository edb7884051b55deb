//! Unit of Work double for service tests.

use std::sync::Arc;

use crate::infra::{
    MockOrganizationRepository, MockUserRepository, MockWorkspaceRepository,
    OrganizationRepository, UnitOfWork, UserRepository, WorkspaceRepository,
};

/// Wraps repository mocks. Repositories left at their default have no
/// expectations, so any call into them fails the test.
pub(crate) struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    organizations: Arc<MockOrganizationRepository>,
    workspaces: Arc<MockWorkspaceRepository>,
}

impl TestUnitOfWork {
    pub(crate) fn new() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            organizations: Arc::new(MockOrganizationRepository::new()),
            workspaces: Arc::new(MockWorkspaceRepository::new()),
        }
    }

    pub(crate) fn with_users(mut self, repo: MockUserRepository) -> Self {
        self.users = Arc::new(repo);
        self
    }

    pub(crate) fn with_organizations(mut self, repo: MockOrganizationRepository) -> Self {
        self.organizations = Arc::new(repo);
        self
    }

    pub(crate) fn with_workspaces(mut self, repo: MockWorkspaceRepository) -> Self {
        self.workspaces = Arc::new(repo);
        self
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn organizations(&self) -> Arc<dyn OrganizationRepository> {
        self.organizations.clone()
    }

    fn workspaces(&self) -> Arc<dyn WorkspaceRepository> {
        self.workspaces.clone()
    }
}
