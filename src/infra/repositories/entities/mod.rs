//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod organization;
pub mod user;
pub mod workspace;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use organization::{
    ActiveModel as OrganizationActiveModel, Entity as OrganizationEntity,
    Model as OrganizationModel,
};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
#[allow(unused_imports)]
pub use workspace::{
    ActiveModel as WorkspaceActiveModel, Entity as WorkspaceEntity, Model as WorkspaceModel,
};
