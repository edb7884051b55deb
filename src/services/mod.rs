//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and every operation answers with an
//! [`ApiResponse`](crate::types::ApiResponse) envelope or an
//! [`AppError`](crate::errors::AppError).

pub mod container;
mod organization_service;
mod user_service;
mod workspace_service;

#[cfg(test)]
pub(crate) mod test_support;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use organization_service::{OrganizationManager, OrganizationService};
pub use user_service::{UserManager, UserService};
pub use workspace_service::{WorkspaceManager, WorkspaceService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
