//! Workspace database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Workspace;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "workspaces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Organization to which the workspace belongs
    pub organization_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub settings: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Workspace {
    fn from(model: Model) -> Self {
        Workspace {
            id: model.id,
            organization_id: model.organization_id,
            name: model.name,
            description: model.description,
            settings: model.settings,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
