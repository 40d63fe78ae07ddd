use crate::core::models;
use crate::utils::error::{AuthzError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role};
use super::types::{SeaOrmDatabase, now};

impl SeaOrmDatabase {
    /// Find a role by namespace and name
    pub async fn find_role(&self, namespace: &str, name: &str) -> Result<Option<models::Role>> {
        let row = entities::Role::find()
            .filter(role::Column::Namespace.eq(namespace))
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        row.map(|model| model.to_domain_role()).transpose()
    }

    /// Roles in `namespace` whose rules grant `verb`.
    ///
    /// Rules are stored as JSON, so the verb filter runs after loading the
    /// namespace's roles.
    pub async fn find_roles_by_verb(
        &self,
        namespace: &str,
        verb: &str,
    ) -> Result<Vec<models::Role>> {
        let rows = entities::Role::find()
            .filter(role::Column::Namespace.eq(namespace))
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        let mut roles = Vec::new();
        for row in rows {
            let role = row.to_domain_role()?;
            if role.grants(verb) {
                roles.push(role);
            }
        }
        Ok(roles)
    }

    /// Insert a role or replace the rules of an existing one
    pub async fn upsert_role(&self, role: models::Role) -> Result<()> {
        debug!("Storing role {}/{}", role.namespace, role.name);

        let rules = serde_json::to_value(&role.rules)?;
        let existing = entities::Role::find()
            .filter(role::Column::Namespace.eq(&role.namespace))
            .filter(role::Column::Name.eq(&role.name))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        match existing {
            Some(model) => {
                let mut active: role::ActiveModel = model.into();
                active.rules = Set(rules);
                active.updated_at = Set(now());
                active.update(&self.db).await.map_err(AuthzError::Database)?;
            }
            None => {
                let timestamp = now();
                let active = role::ActiveModel {
                    id: NotSet,
                    namespace: Set(role.namespace),
                    name: Set(role.name),
                    rules: Set(rules),
                    created_at: Set(timestamp),
                    updated_at: Set(timestamp),
                };
                entities::Role::insert(active)
                    .exec(&self.db)
                    .await
                    .map_err(AuthzError::Database)?;
            }
        }

        Ok(())
    }
}
