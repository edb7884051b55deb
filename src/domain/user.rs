//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{USER_STATUS_ACTIVE, USER_STATUS_INACTIVE};

/// User account status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl From<&str> for UserStatus {
    fn from(s: &str) -> Self {
        match s {
            USER_STATUS_INACTIVE => UserStatus::Inactive,
            _ => UserStatus::Active,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "{}", USER_STATUS_ACTIVE),
            UserStatus::Inactive => write!(f, "{}", USER_STATUS_INACTIVE),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "+1 555 0100")]
    pub phone: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Display name
    #[serde(alias = "fullName")]
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    /// Email address, unique across users
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "+1 555 0100")]
    pub phone: Option<String>,
    /// Defaults to ACTIVE
    pub status: Option<UserStatus>,
}

/// User update data transfer object; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[serde(alias = "fullName")]
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    #[schema(example = "Jane Roe")]
    pub full_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<UserStatus>,
}
