//! Centralized error handling.
//!
//! Every failure raised while serving a request ends up as an [`AppError`].
//! Its `IntoResponse` implementation is the single place where failures are
//! turned into HTTP responses: the four resource failure kinds keep their own
//! message, everything else collapses into a fixed generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::config::GENERIC_ERROR_MESSAGE;
use crate::types::ApiResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    ResourceNotFound(String),

    #[error("{0}")]
    ResourceCreation(String),

    #[error("{0}")]
    ResourceUpdate(String),

    #[error("{0}")]
    ResourceDeletion(String),

    // Request body rejected before it reached a service
    #[error("{0}")]
    InvalidInput(String),

    // External service errors
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ResourceCreation(_)
            | AppError::ResourceUpdate(_)
            | AppError::ResourceDeletion(_)
            | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::ResourceNotFound(msg)
            | AppError::ResourceCreation(msg)
            | AppError::ResourceUpdate(msg)
            | AppError::ResourceDeletion(msg)
            | AppError::InvalidInput(msg) => msg.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.user_message());
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, resource: &str, id: i64) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, resource: &str, id: i64) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(resource, id))
    }
}

/// Maps constraint violations reported by the database to the failure kind
/// of the write that hit them. Any other database error stays `Database`.
pub trait DbResultExt<T> {
    fn or_creation_failed(self, resource: &str) -> AppResult<T>;
    fn or_update_failed(self, resource: &str, id: i64) -> AppResult<T>;
    fn or_deletion_failed(self, resource: &str, id: i64) -> AppResult<T>;
}

impl<T> DbResultExt<T> for Result<T, DbErr> {
    fn or_creation_failed(self, resource: &str) -> AppResult<T> {
        self.map_err(|err| classify_write(Write::Create, resource, err))
    }

    fn or_update_failed(self, resource: &str, id: i64) -> AppResult<T> {
        self.map_err(|err| classify_write(Write::Update(id), resource, err))
    }

    fn or_deletion_failed(self, resource: &str, id: i64) -> AppResult<T> {
        self.map_err(|err| classify_write(Write::Delete(id), resource, err))
    }
}

/// The kind of write a database error came from.
#[derive(Debug, Clone, Copy)]
enum Write {
    Create,
    Update(i64),
    Delete(i64),
}

fn classify_write(write: Write, resource: &str, err: DbErr) -> AppError {
    let violation = err.sql_err();
    write_failure(write, resource, err, violation)
}

/// Picks the failure kind for `err`, given the constraint violation (if any)
/// the driver reported for it.
fn write_failure(
    write: Write,
    resource: &str,
    err: DbErr,
    violation: Option<SqlErr>,
) -> AppError {
    // Row vanished between the lookup and the write
    if let (Write::Update(id), DbErr::RecordNotUpdated) = (write, &err) {
        return AppError::not_found(resource, id);
    }

    let Some(reason) = violation.as_ref().and_then(constraint_reason) else {
        return AppError::Database(err);
    };

    match write {
        Write::Create => {
            AppError::creation(format!("{} could not be created: {}", resource, reason))
        }
        Write::Update(id) => AppError::update(format!(
            "{} with id {} could not be updated: {}",
            resource, id, reason
        )),
        Write::Delete(id) => AppError::deletion(format!(
            "{} with id {} could not be deleted: {}",
            resource, id, reason
        )),
    }
}

/// Fixed, non-leaking description of a constraint violation.
fn constraint_reason(violation: &SqlErr) -> Option<&'static str> {
    match violation {
        SqlErr::UniqueConstraintViolation(_) => {
            Some("a record with the same unique value already exists")
        }
        SqlErr::ForeignKeyConstraintViolation(_) => {
            Some("a related record is missing or still references it")
        }
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(resource: &str, id: i64) -> Self {
        AppError::ResourceNotFound(format!("{} with id {} not found", resource, id))
    }

    pub fn creation(msg: impl Into<String>) -> Self {
        AppError::ResourceCreation(msg.into())
    }

    pub fn update(msg: impl Into<String>) -> Self {
        AppError::ResourceUpdate(msg.into())
    }

    pub fn deletion(msg: impl Into<String>) -> Self {
        AppError::ResourceDeletion(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_resource_and_id() {
        let err = AppError::not_found("Workspace", 999);
        assert_eq!(err.user_message(), "Workspace with id 999 not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found("User", 7).unwrap_err();
        assert!(matches!(err, AppError::ResourceNotFound(_)));

        assert_eq!(Some(3).ok_or_not_found("User", 7).unwrap(), 3);
    }

    #[test]
    fn test_record_not_updated_becomes_not_found() {
        let result: Result<(), DbErr> = Err(DbErr::RecordNotUpdated);
        let err = result.or_update_failed("Organization", 4).unwrap_err();
        assert!(matches!(err, AppError::ResourceNotFound(_)));
        assert_eq!(err.user_message(), "Organization with id 4 not found");
    }

    #[test]
    fn test_unclassified_db_error_stays_database() {
        let result: Result<(), DbErr> = Err(DbErr::Custom("connection reset".to_string()));
        let err = result.or_creation_failed("User").unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    fn unique_violation() -> SqlErr {
        SqlErr::UniqueConstraintViolation(
            "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
        )
    }

    fn foreign_key_violation() -> SqlErr {
        SqlErr::ForeignKeyConstraintViolation(
            "update or delete on table \"organizations\" violates foreign key constraint \"fk_workspaces_organization\"".to_string(),
        )
    }

    #[test]
    fn test_unique_violation_on_create_is_creation_failure() {
        let err = write_failure(
            Write::Create,
            "User",
            DbErr::Custom("insert failed".to_string()),
            Some(unique_violation()),
        );

        assert!(matches!(err, AppError::ResourceCreation(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.user_message(),
            "User could not be created: a record with the same unique value already exists"
        );
    }

    #[test]
    fn test_unique_violation_on_update_is_update_failure() {
        let err = write_failure(
            Write::Update(9),
            "Organization",
            DbErr::Custom("update failed".to_string()),
            Some(unique_violation()),
        );

        assert!(matches!(err, AppError::ResourceUpdate(_)));
        assert!(err.user_message().starts_with("Organization with id 9 could not be updated"));
        assert!(!err.user_message().contains("users_email_key"));
    }

    #[test]
    fn test_foreign_key_violation_on_delete_is_deletion_failure() {
        let err = write_failure(
            Write::Delete(2),
            "Organization",
            DbErr::Custom("delete failed".to_string()),
            Some(foreign_key_violation()),
        );

        assert!(matches!(err, AppError::ResourceDeletion(_)));
        assert_eq!(
            err.user_message(),
            "Organization with id 2 could not be deleted: a related record is missing or still references it"
        );
        assert!(!err.user_message().contains("fk_workspaces_organization"));
    }

    #[test]
    fn test_foreign_key_violation_on_create_is_creation_failure() {
        let err = write_failure(
            Write::Create,
            "Workspace",
            DbErr::Custom("insert failed".to_string()),
            Some(foreign_key_violation()),
        );

        assert!(matches!(err, AppError::ResourceCreation(_)));
    }

    #[test]
    fn test_record_not_updated_wins_over_violation() {
        let err = write_failure(
            Write::Update(4),
            "User",
            DbErr::RecordNotUpdated,
            Some(unique_violation()),
        );

        assert_eq!(err.user_message(), "User with id 4 not found");
    }
}
