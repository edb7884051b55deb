//! HTTP request handlers.

pub mod organization_handler;
pub mod user_handler;
pub mod workspace_handler;

pub use organization_handler::organization_routes;
pub use user_handler::user_routes;
pub use workspace_handler::workspace_routes;
