//! Organization service - Handles organization use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::RESOURCE_ORGANIZATION;
use crate::domain::{CreateOrganization, Organization, UpdateOrganization};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::ApiResponse;

/// Organization service trait for dependency injection.
#[async_trait]
pub trait OrganizationService: Send + Sync {
    async fn index(&self) -> AppResult<ApiResponse<Vec<Organization>>>;

    async fn show(&self, id: i64) -> AppResult<ApiResponse<Organization>>;

    /// Create an organization with a domain no other organization uses
    async fn store(&self, input: CreateOrganization) -> AppResult<ApiResponse<Organization>>;

    async fn update(
        &self,
        id: i64,
        input: UpdateOrganization,
    ) -> AppResult<ApiResponse<Organization>>;

    /// Delete an organization that no longer owns any workspace
    async fn destroy(&self, id: i64) -> AppResult<ApiResponse<()>>;
}

/// Concrete implementation of OrganizationService using Unit of Work.
pub struct OrganizationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OrganizationManager<U> {
    /// Create new organization service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// ID of the organization already using `domain`, if any
    async fn domain_owner(&self, domain: &str) -> AppResult<Option<i64>> {
        Ok(self
            .uow
            .organizations()
            .find_by_domain(domain)
            .await?
            .map(|organization| organization.id))
    }
}

#[async_trait]
impl<U: UnitOfWork> OrganizationService for OrganizationManager<U> {
    #[instrument(skip(self))]
    async fn index(&self) -> AppResult<ApiResponse<Vec<Organization>>> {
        let organizations = self.uow.organizations().list().await?;
        Ok(ApiResponse::success(organizations))
    }

    #[instrument(skip(self))]
    async fn show(&self, id: i64) -> AppResult<ApiResponse<Organization>> {
        let organization = self
            .uow
            .organizations()
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_ORGANIZATION, id)?;

        Ok(ApiResponse::success(organization))
    }

    #[instrument(skip(self, input), fields(domain = %input.domain))]
    async fn store(&self, input: CreateOrganization) -> AppResult<ApiResponse<Organization>> {
        if self.domain_owner(&input.domain).await?.is_some() {
            return Err(AppError::creation(format!(
                "Organization with domain {} already exists",
                input.domain
            )));
        }

        let organization = self.uow.organizations().create(input).await?;
        info!(organization_id = organization.id, "Organization created");

        Ok(ApiResponse::with_message(
            organization,
            "Organization created successfully",
        ))
    }

    #[instrument(skip(self, input))]
    async fn update(
        &self,
        id: i64,
        input: UpdateOrganization,
    ) -> AppResult<ApiResponse<Organization>> {
        self.uow
            .organizations()
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_ORGANIZATION, id)?;

        if let Some(domain) = input.domain.as_deref() {
            if matches!(self.domain_owner(domain).await?, Some(owner) if owner != id) {
                return Err(AppError::update(format!(
                    "Organization with domain {} already exists",
                    domain
                )));
            }
        }

        let organization = self.uow.organizations().update(id, input).await?;
        info!("Organization updated");

        Ok(ApiResponse::with_message(
            organization,
            "Organization updated successfully",
        ))
    }

    #[instrument(skip(self))]
    async fn destroy(&self, id: i64) -> AppResult<ApiResponse<()>> {
        self.uow
            .organizations()
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_ORGANIZATION, id)?;

        let workspaces = self.uow.workspaces().count_by_organization(id).await?;
        if workspaces > 0 {
            return Err(AppError::deletion(format!(
                "Organization with id {} could not be deleted: it still has {} workspace(s)",
                id, workspaces
            )));
        }

        self.uow.organizations().delete(id).await?;
        info!("Organization deleted");

        Ok(ApiResponse::message("Organization deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubscriptionType;
    use crate::infra::{MockOrganizationRepository, MockWorkspaceRepository};
    use crate::services::test_support::TestUnitOfWork;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_organization(id: i64, domain: &str) -> Organization {
        let now = Utc::now();
        Organization {
            id,
            name: "Acme".to_string(),
            domain: domain.to_string(),
            subscription_type: SubscriptionType::Standard,
            settings: Some(serde_json::json!({ "theme": "light", "language": "en" })),
            created_at: now,
            updated_at: now,
        }
    }

    fn service(uow: TestUnitOfWork) -> OrganizationManager<TestUnitOfWork> {
        OrganizationManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_index_returns_organizations_in_order() {
        let mut organizations = MockOrganizationRepository::new();
        organizations.expect_list().times(1).returning(|| {
            Ok(vec![
                sample_organization(1, "acme.com"),
                sample_organization(2, "globex.com"),
            ])
        });

        let response = service(TestUnitOfWork::new().with_organizations(organizations))
            .index()
            .await
            .unwrap();

        let ids: Vec<i64> = response.data.unwrap().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(response.message.is_none());
    }

    #[tokio::test]
    async fn test_store_rejects_duplicate_domain() {
        let mut organizations = MockOrganizationRepository::new();
        organizations
            .expect_find_by_domain()
            .returning(|domain| Ok(Some(sample_organization(1, domain))));

        let input = CreateOrganization {
            name: "Acme".to_string(),
            domain: "acme.com".to_string(),
            subscription_type: None,
            settings: None,
        };
        let err = service(TestUnitOfWork::new().with_organizations(organizations))
            .store(input)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ResourceCreation(_)));
        assert_eq!(err.user_message(), "Organization with domain acme.com already exists");
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_domain() {
        let mut organizations = MockOrganizationRepository::new();
        organizations
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_organization(id, "acme.com"))));
        organizations
            .expect_find_by_domain()
            .returning(|domain| Ok(Some(sample_organization(4, domain))));
        organizations
            .expect_update()
            .times(1)
            .returning(|id, _| Ok(sample_organization(id, "acme.com")));

        let changes = UpdateOrganization {
            domain: Some("acme.com".to_string()),
            ..UpdateOrganization::default()
        };
        let response = service(TestUnitOfWork::new().with_organizations(organizations))
            .update(4, changes)
            .await
            .unwrap();

        assert!(response.success);
    }

    #[tokio::test]
    async fn test_update_rejects_domain_of_another_organization() {
        let mut organizations = MockOrganizationRepository::new();
        organizations
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_organization(id, "acme.com"))));
        organizations
            .expect_find_by_domain()
            .returning(|domain| Ok(Some(sample_organization(9, domain))));

        let changes = UpdateOrganization {
            domain: Some("globex.com".to_string()),
            ..UpdateOrganization::default()
        };
        let err = service(TestUnitOfWork::new().with_organizations(organizations))
            .update(4, changes)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ResourceUpdate(_)));
    }

    #[tokio::test]
    async fn test_destroy_with_workspaces_fails_deletion() {
        let mut organizations = MockOrganizationRepository::new();
        organizations
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_organization(id, "acme.com"))));

        let mut workspaces = MockWorkspaceRepository::new();
        workspaces
            .expect_count_by_organization()
            .with(eq(1))
            .returning(|_| Ok(2));

        let uow = TestUnitOfWork::new()
            .with_organizations(organizations)
            .with_workspaces(workspaces);
        let err = service(uow).destroy(1).await.unwrap_err();

        assert!(matches!(err, AppError::ResourceDeletion(_)));
        assert_eq!(
            err.user_message(),
            "Organization with id 1 could not be deleted: it still has 2 workspace(s)"
        );
    }

    #[tokio::test]
    async fn test_destroy_missing_organization_is_not_found() {
        let mut organizations = MockOrganizationRepository::new();
        organizations.expect_find_by_id().returning(|_| Ok(None));

        let err = service(TestUnitOfWork::new().with_organizations(organizations))
            .destroy(8)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ResourceNotFound(_)));
    }

    #[tokio::test]
    async fn test_destroy_without_workspaces_succeeds() {
        let mut organizations = MockOrganizationRepository::new();
        organizations
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_organization(id, "acme.com"))));
        organizations.expect_delete().times(1).returning(|_| Ok(()));

        let mut workspaces = MockWorkspaceRepository::new();
        workspaces.expect_count_by_organization().returning(|_| Ok(0));

        let uow = TestUnitOfWork::new()
            .with_organizations(organizations)
            .with_workspaces(workspaces);
        let response = service(uow).destroy(1).await.unwrap();

        assert_eq!(response.message.as_deref(), Some("Organization deleted successfully"));
        assert!(response.data.is_none());
    }
}
