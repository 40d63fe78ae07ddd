use crate::core::models;
use sea_orm::entity::prelude::*;

/// Role binding database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role_bindings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Subject; `*` for public-project bindings
    pub user_id: String,

    pub namespace: String,

    pub role_name: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_binding(&self) -> models::RoleBinding {
        models::RoleBinding::new(&self.user_id, &self.namespace, &self.role_name)
    }
}
