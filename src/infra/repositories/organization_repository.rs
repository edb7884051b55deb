//! Organization repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::organization::{self, ActiveModel, Entity as OrganizationEntity};
use crate::config::RESOURCE_ORGANIZATION;
use crate::domain::{CreateOrganization, Organization, Timestamps, UpdateOrganization};
use crate::errors::{AppError, AppResult, DbResultExt, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Organization repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Find organization by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Organization>>;

    /// Find organization by its unique domain
    async fn find_by_domain(&self, domain: &str) -> AppResult<Option<Organization>>;

    /// List all organizations ordered by ID
    async fn list(&self) -> AppResult<Vec<Organization>>;

    /// Insert a new organization, stamping both timestamps
    async fn create(&self, input: CreateOrganization) -> AppResult<Organization>;

    /// Apply the present fields of `changes`, stamping `updated_at`
    async fn update(&self, id: i64, changes: UpdateOrganization) -> AppResult<Organization>;

    /// Delete organization by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of OrganizationRepository
pub struct OrganizationStore {
    db: DatabaseConnection,
}

impl OrganizationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrganizationRepository for OrganizationStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Organization>> {
        let result = OrganizationEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Organization::from))
    }

    async fn find_by_domain(&self, domain: &str) -> AppResult<Option<Organization>> {
        let result = OrganizationEntity::find()
            .filter(organization::Column::Domain.eq(domain))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Organization::from))
    }

    async fn list(&self) -> AppResult<Vec<Organization>> {
        let models = OrganizationEntity::find()
            .order_by_asc(organization::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Organization::from).collect())
    }

    async fn create(&self, input: CreateOrganization) -> AppResult<Organization> {
        let stamps = Timestamps::on_create(Utc::now());
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(input.name),
            domain: Set(input.domain),
            subscription_type: Set(input.subscription_type.unwrap_or_default().to_string()),
            settings: Set(input.settings),
            created_at: Set(stamps.created_at),
            updated_at: Set(stamps.updated_at),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .or_creation_failed(RESOURCE_ORGANIZATION)?;
        Ok(Organization::from(model))
    }

    async fn update(&self, id: i64, changes: UpdateOrganization) -> AppResult<Organization> {
        let existing = OrganizationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(RESOURCE_ORGANIZATION, id)?;

        let stamps =
            Timestamps::new(existing.created_at, existing.updated_at).on_update(Utc::now());
        let mut active: ActiveModel = existing.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(domain) = changes.domain {
            active.domain = Set(domain);
        }
        if let Some(subscription_type) = changes.subscription_type {
            active.subscription_type = Set(subscription_type.to_string());
        }
        if let Some(settings) = changes.settings {
            active.settings = Set(Some(settings));
        }
        active.updated_at = Set(stamps.updated_at);

        let model = active
            .update(&self.db)
            .await
            .or_update_failed(RESOURCE_ORGANIZATION, id)?;
        Ok(Organization::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = OrganizationEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .or_deletion_failed(RESOURCE_ORGANIZATION, id)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(RESOURCE_ORGANIZATION, id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::test_support::{assignments, executed, written_timestamps};
    use chrono::{DateTime, Duration};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn stored(id: i64, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> organization::Model {
        organization::Model {
            id,
            name: "Acme".to_string(),
            domain: "acme.com".to_string(),
            subscription_type: "PREMIUM".to_string(),
            settings: None,
            created_at,
            updated_at,
        }
    }

    #[tokio::test]
    async fn test_create_writes_equal_timestamps_and_default_plan() {
        let now = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored(1, now, now)]])
            .into_connection();

        let input = CreateOrganization {
            name: "Acme".to_string(),
            domain: "acme.com".to_string(),
            subscription_type: None,
            settings: None,
        };
        OrganizationStore::new(db.clone()).create(input).await.unwrap();

        let statements = executed(db);
        let insert = &statements[0];
        let stamps = written_timestamps(insert);
        assert_eq!(stamps.len(), 2);
        assert_eq!(stamps[0], stamps[1]);
        assert!(insert
            .values
            .iter()
            .flat_map(|values| values.0.iter())
            .any(|value| *value == sea_orm::Value::from("FREE")));
    }

    #[tokio::test]
    async fn test_update_leaves_created_at_alone() {
        let created = Utc::now() - Duration::days(30);
        let previous = Utc::now() - Duration::minutes(5);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![stored(2, created, previous)],
                vec![stored(2, created, Utc::now())],
            ])
            .into_connection();

        let changes = UpdateOrganization {
            domain: Some("acme.io".to_string()),
            ..UpdateOrganization::default()
        };
        OrganizationStore::new(db.clone())
            .update(2, changes)
            .await
            .unwrap();

        let statements = executed(db);
        let update = &statements[1];
        assert!(!assignments(update).contains("created_at"));
        let stamps = written_timestamps(update);
        assert_eq!(stamps.len(), 1);
        assert!(stamps[0] >= previous);
    }
}
