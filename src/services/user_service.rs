//! User service - Handles user-related business logic.
//!
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::RESOURCE_USER;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::ApiResponse;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn index(&self) -> AppResult<ApiResponse<Vec<User>>>;

    /// Get user by ID
    async fn show(&self, id: i64) -> AppResult<ApiResponse<User>>;

    /// Register a user whose email is not taken yet
    async fn store(&self, input: CreateUser) -> AppResult<ApiResponse<User>>;

    /// Update user details
    async fn update(&self, id: i64, input: UpdateUser) -> AppResult<ApiResponse<User>>;

    /// Permanently delete user
    async fn destroy(&self, id: i64) -> AppResult<ApiResponse<()>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    #[instrument(skip(self))]
    async fn index(&self) -> AppResult<ApiResponse<Vec<User>>> {
        let users = self.uow.users().list().await?;
        Ok(ApiResponse::success(users))
    }

    #[instrument(skip(self))]
    async fn show(&self, id: i64) -> AppResult<ApiResponse<User>> {
        let user = self
            .uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_USER, id)?;

        Ok(ApiResponse::success(user))
    }

    #[instrument(skip(self, input))]
    async fn store(&self, input: CreateUser) -> AppResult<ApiResponse<User>> {
        if self.uow.users().find_by_email(&input.email).await?.is_some() {
            return Err(AppError::creation(format!(
                "User with email {} already exists",
                input.email
            )));
        }

        let user = self.uow.users().create(input).await?;
        info!(user_id = user.id, "User created");

        Ok(ApiResponse::with_message(user, "User created successfully"))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: UpdateUser) -> AppResult<ApiResponse<User>> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_USER, id)?;

        if let Some(email) = input.email.as_deref() {
            let taken = self.uow.users().find_by_email(email).await?;
            if matches!(taken, Some(other) if other.id != id) {
                return Err(AppError::update(format!(
                    "User with email {} already exists",
                    email
                )));
            }
        }

        let user = self.uow.users().update(id, input).await?;
        info!("User updated");

        Ok(ApiResponse::with_message(user, "User updated successfully"))
    }

    #[instrument(skip(self))]
    async fn destroy(&self, id: i64) -> AppResult<ApiResponse<()>> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_USER, id)?;

        self.uow.users().delete(id).await?;
        info!("User deleted");

        Ok(ApiResponse::message("User deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserStatus;
    use crate::infra::MockUserRepository;
    use crate::services::test_support::TestUnitOfWork;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_user(id: i64, email: &str) -> User {
        let now = Utc::now();
        User {
            id,
            full_name: "Jane Doe".to_string(),
            email: email.to_string(),
            phone: None,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(users: MockUserRepository) -> UserManager<TestUnitOfWork> {
        UserManager::new(Arc::new(TestUnitOfWork::new().with_users(users)))
    }

    fn new_user(email: &str) -> CreateUser {
        CreateUser {
            full_name: "Jane Doe".to_string(),
            email: email.to_string(),
            phone: Some("+1 555 0100".to_string()),
            status: None,
        }
    }

    #[tokio::test]
    async fn test_index_wraps_all_users() {
        let mut users = MockUserRepository::new();
        users
            .expect_list()
            .returning(|| Ok(vec![sample_user(1, "a@example.com"), sample_user(2, "b@example.com")]));

        let response = service(users).index().await.unwrap();

        assert!(response.success);
        assert!(response.message.is_none());
        assert_eq!(response.data.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_show_missing_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().with(eq(999)).returning(|_| Ok(None));

        let err = service(users).show(999).await.unwrap_err();

        assert!(matches!(err, AppError::ResourceNotFound(_)));
        assert_eq!(err.user_message(), "User with id 999 not found");
    }

    #[tokio::test]
    async fn test_store_creates_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create()
            .times(1)
            .returning(|input| Ok(sample_user(5, &input.email)));

        let response = service(users).store(new_user("new@example.com")).await.unwrap();

        assert_eq!(response.message.as_deref(), Some("User created successfully"));
        assert_eq!(response.data.unwrap().email, "new@example.com");
    }

    #[tokio::test]
    async fn test_store_rejects_taken_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(sample_user(1, email))));
        users.expect_create().never();

        let err = service(users)
            .store(new_user("taken@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ResourceCreation(_)));
        assert_eq!(err.user_message(), "User with email taken@example.com already exists");
    }

    #[tokio::test]
    async fn test_update_rejects_email_of_another_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id, "own@example.com"))));
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(sample_user(2, email))));
        users.expect_update().never();

        let changes = UpdateUser {
            email: Some("other@example.com".to_string()),
            ..UpdateUser::default()
        };
        let err = service(users).update(1, changes).await.unwrap_err();

        assert!(matches!(err, AppError::ResourceUpdate(_)));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let err = service(users)
            .update(3, UpdateUser::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_destroy_returns_message_without_payload() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id, "gone@example.com"))));
        users.expect_delete().with(eq(1)).times(1).returning(|_| Ok(()));

        let response = service(users).destroy(1).await.unwrap();

        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("User deleted successfully"));
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn test_database_failure_is_not_classified() {
        let mut users = MockUserRepository::new();
        users
            .expect_list()
            .returning(|| Err(AppError::Database(sea_orm::DbErr::Custom("boom".to_string()))));

        let err = service(users).index().await.unwrap_err();

        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, AppError::Database(_)));
    }
}
