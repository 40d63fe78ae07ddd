use crate::core::models::{self, WILDCARD};
use crate::utils::error::{AuthzError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role_binding};
use super::types::{SeaOrmDatabase, now};

impl SeaOrmDatabase {
    /// Every binding held by `user_id`
    pub async fn find_user_bindings(&self, user_id: &str) -> Result<Vec<models::RoleBinding>> {
        let rows = entities::RoleBinding::find()
            .filter(role_binding::Column::UserId.eq(user_id))
            .order_by_asc(role_binding::Column::Namespace)
            .order_by_asc(role_binding::Column::RoleName)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(rows.iter().map(|row| row.to_domain_binding()).collect())
    }

    /// Public bindings whose namespace starts with `prefix`.
    ///
    /// The prefix is matched in Rust rather than with SQL `LIKE`, which is
    /// case-insensitive on SQLite and treats `_` and `%` as wildcards.
    pub async fn find_public_bindings(&self, prefix: &str) -> Result<Vec<models::RoleBinding>> {
        let rows = entities::RoleBinding::find()
            .filter(role_binding::Column::UserId.eq(WILDCARD))
            .order_by_asc(role_binding::Column::Namespace)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(rows
            .iter()
            .filter(|row| row.namespace.starts_with(prefix))
            .map(|row| row.to_domain_binding())
            .collect())
    }

    /// Insert a binding unless an identical one exists
    pub async fn insert_binding(&self, binding: models::RoleBinding) -> Result<()> {
        let existing = entities::RoleBinding::find()
            .filter(role_binding::Column::UserId.eq(&binding.user_id))
            .filter(role_binding::Column::Namespace.eq(&binding.namespace))
            .filter(role_binding::Column::RoleName.eq(&binding.role_name))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        if existing.is_some() {
            debug!("Role binding already present: {:?}", binding);
            return Ok(());
        }

        let active = role_binding::ActiveModel {
            id: NotSet,
            user_id: Set(binding.user_id),
            namespace: Set(binding.namespace),
            role_name: Set(binding.role_name),
            created_at: Set(now()),
        };
        entities::RoleBinding::insert(active)
            .exec(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(())
    }
}
