//! Domain layer - Core business entities and logic
//!
//! Plain records for users, organizations and workspaces, the request
//! payloads that create or change them, and the lifecycle timestamp rules.

pub mod organization;
pub mod timestamps;
pub mod user;
pub mod workspace;

pub use organization::{CreateOrganization, Organization, SubscriptionType, UpdateOrganization};
pub use timestamps::Timestamps;
pub use user::{CreateUser, UpdateUser, User, UserStatus};
pub use workspace::{CreateWorkspace, UpdateWorkspace, Workspace};
