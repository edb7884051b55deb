//! Organization domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{SUBSCRIPTION_FREE, SUBSCRIPTION_PREMIUM, SUBSCRIPTION_STANDARD};

/// Subscription plan of an organization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionType {
    #[default]
    Free,
    Standard,
    Premium,
}

impl From<&str> for SubscriptionType {
    fn from(s: &str) -> Self {
        match s {
            SUBSCRIPTION_STANDARD => SubscriptionType::Standard,
            SUBSCRIPTION_PREMIUM => SubscriptionType::Premium,
            _ => SubscriptionType::Free,
        }
    }
}

impl std::fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            SubscriptionType::Free => SUBSCRIPTION_FREE,
            SubscriptionType::Standard => SUBSCRIPTION_STANDARD,
            SubscriptionType::Premium => SUBSCRIPTION_PREMIUM,
        };
        f.write_str(value)
    }
}

/// Organization domain entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Acme Corp")]
    pub name: String,
    #[schema(example = "acme.com")]
    pub domain: String,
    pub subscription_type: SubscriptionType,
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Organization creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrganization {
    #[validate(length(min = 1, max = 100, message = "Organization name must be 1-100 characters"))]
    #[schema(example = "Acme Corp")]
    pub name: String,
    /// Domain, unique across organizations
    #[validate(length(min = 1, message = "Organization domain is required"))]
    #[schema(example = "acme.com")]
    pub domain: String,
    /// Defaults to FREE
    #[serde(alias = "subscriptionType")]
    pub subscription_type: Option<SubscriptionType>,
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
}

/// Organization update data transfer object; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOrganization {
    #[validate(length(min = 1, max = 100, message = "Organization name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Organization domain cannot be empty"))]
    pub domain: Option<String>,
    #[serde(alias = "subscriptionType")]
    pub subscription_type: Option<SubscriptionType>,
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
}
