//! CRM backend - CRUD HTTP API for users, organizations and workspaces.
//!
//! Every endpoint answers with the same `{success, message, data}` envelope,
//! and every failure is translated to an HTTP status in one place
//! ([`AppError`]'s `IntoResponse`).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and lifecycle timestamps
//! - **services**: Application use cases (one service per resource)
//! - **infra**: Database, migrations, repositories, Unit of Work
//! - **api**: HTTP handlers, extractors, middleware, and routes
//! - **types**: Shared response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Organization, User, Workspace};
pub use errors::{AppError, AppResult};
pub use types::ApiResponse;
