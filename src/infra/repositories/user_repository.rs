//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::RESOURCE_USER;
use crate::domain::{CreateUser, Timestamps, UpdateUser, User};
use crate::errors::{AppError, AppResult, DbResultExt, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users ordered by ID
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user, stamping both timestamps
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// Apply the present fields of `changes`, stamping `updated_at`
    async fn update(&self, id: i64, changes: UpdateUser) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let stamps = Timestamps::on_create(Utc::now());
        let active_model = ActiveModel {
            id: NotSet,
            full_name: Set(input.full_name),
            email: Set(input.email),
            phone: Set(input.phone),
            status: Set(input.status.unwrap_or_default().to_string()),
            created_at: Set(stamps.created_at),
            updated_at: Set(stamps.updated_at),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .or_creation_failed(RESOURCE_USER)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(RESOURCE_USER, id)?;

        let stamps =
            Timestamps::new(existing.created_at, existing.updated_at).on_update(Utc::now());
        let mut active: ActiveModel = existing.into();

        if let Some(full_name) = changes.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(status) = changes.status {
            active.status = Set(status.to_string());
        }
        active.updated_at = Set(stamps.updated_at);

        let model = active
            .update(&self.db)
            .await
            .or_update_failed(RESOURCE_USER, id)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .or_deletion_failed(RESOURCE_USER, id)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(RESOURCE_USER, id));
        }

        Ok(())
    }
}
