//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{organization_handler, user_handler, workspace_handler};
use crate::domain::{
    CreateOrganization, CreateUser, CreateWorkspace, Organization, SubscriptionType,
    UpdateOrganization, UpdateUser, UpdateWorkspace, User, UserStatus, Workspace,
};

/// OpenAPI documentation for the CRM backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CRM Backend",
        version = "0.1.0",
        description = "CRUD API for users, organizations and workspaces. Every response body is an envelope `{success, message, data}`; the schemas below describe `data`.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Organization endpoints
        organization_handler::list_organizations,
        organization_handler::get_organization,
        organization_handler::create_organization,
        organization_handler::update_organization,
        organization_handler::delete_organization,
        // Workspace endpoints
        workspace_handler::list_workspaces,
        workspace_handler::get_workspace,
        workspace_handler::create_workspace,
        workspace_handler::update_workspace,
        workspace_handler::delete_workspace,
    ),
    components(
        schemas(
            User,
            UserStatus,
            CreateUser,
            UpdateUser,
            Organization,
            SubscriptionType,
            CreateOrganization,
            UpdateOrganization,
            Workspace,
            CreateWorkspace,
            UpdateWorkspace,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Organizations", description = "Organization management operations"),
        (name = "Workspaces", description = "Workspace management operations")
    )
)]
pub struct ApiDoc;
