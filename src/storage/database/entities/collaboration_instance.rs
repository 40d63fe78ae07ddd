use crate::core::models::{self, EnvironmentGrant, WorkflowGrant};
use sea_orm::entity::prelude::*;

/// Collaboration instance database model, one row per (user, project)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "collaboration_instances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: String,

    pub project_key: String,

    /// Workflow grants as a JSON array
    #[sea_orm(column_type = "Json")]
    pub workflows: Json,

    /// Environment grants as a JSON array
    #[sea_orm(column_type = "Json")]
    pub products: Json,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert the row into a domain collaboration instance
    pub fn to_domain_instance(
        &self,
    ) -> crate::utils::error::Result<models::CollaborationInstance> {
        let workflows: Vec<WorkflowGrant> = serde_json::from_value(self.workflows.clone())?;
        let products: Vec<EnvironmentGrant> = serde_json::from_value(self.products.clone())?;
        Ok(models::CollaborationInstance {
            user_id: self.user_id.clone(),
            project_key: self.project_key.clone(),
            workflows,
            products,
        })
    }
}
