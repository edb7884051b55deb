//! Workspace domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Workspace domain entity. Belongs to exactly one organization.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub organization_id: i64,
    #[schema(example = "Sales")]
    pub name: String,
    #[schema(example = "Pipeline and deals")]
    pub description: Option<String>,
    /// Free-form settings stored as JSON
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Workspace creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateWorkspace {
    #[serde(alias = "organizationId")]
    #[schema(example = 1)]
    pub organization_id: i64,
    #[validate(length(min = 1, message = "Workspace name is required"))]
    #[schema(example = "Sales")]
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
}

/// Workspace update data transfer object; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkspace {
    #[serde(alias = "organizationId")]
    pub organization_id: Option<i64>,
    #[validate(length(min = 1, message = "Workspace name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
}
