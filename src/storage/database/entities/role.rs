use crate::core::models;
use sea_orm::entity::prelude::*;

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Project key or the general namespace
    pub namespace: String,

    /// Role name, unique within the namespace
    pub name: String,

    /// Ordered rules as a JSON array of `{ "verbs": [...] }`
    #[sea_orm(column_type = "Json")]
    pub rules: Json,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert the row into a domain role
    pub fn to_domain_role(&self) -> crate::utils::error::Result<models::Role> {
        let rules: Vec<models::Rule> = serde_json::from_value(self.rules.clone())?;
        Ok(models::Role::new(&self.namespace, &self.name, rules))
    }
}
