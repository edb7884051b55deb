//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! They are also where record timestamps are stamped before each write.

pub(crate) mod entities;
mod organization_repository;
mod user_repository;
mod workspace_repository;

#[cfg(test)]
mod test_support;

pub use organization_repository::{OrganizationRepository, OrganizationStore};
pub use user_repository::{UserRepository, UserStore};
pub use workspace_repository::{WorkspaceRepository, WorkspaceStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use organization_repository::MockOrganizationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use workspace_repository::MockWorkspaceRepository;
