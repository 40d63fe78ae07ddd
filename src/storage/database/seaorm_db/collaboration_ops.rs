use crate::core::models;
use crate::utils::error::{AuthzError, Result};
use sea_orm::*;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::super::entities::{
    self, collaboration_instance, collaboration_mode, collaboration_mode_member,
};
use super::types::{SeaOrmDatabase, now};

impl SeaOrmDatabase {
    /// The instance for (user, project), or an empty one when none is stored
    pub async fn find_collaboration_instance(
        &self,
        user_id: &str,
        project_key: &str,
    ) -> Result<models::CollaborationInstance> {
        let row = entities::CollaborationInstance::find()
            .filter(collaboration_instance::Column::UserId.eq(user_id))
            .filter(collaboration_instance::Column::ProjectKey.eq(project_key))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        match row {
            Some(model) => model.to_domain_instance(),
            None => Ok(models::CollaborationInstance::empty(user_id, project_key)),
        }
    }

    /// Insert an instance or replace the grants of the existing one
    pub async fn upsert_collaboration_instance(
        &self,
        instance: models::CollaborationInstance,
    ) -> Result<()> {
        debug!(
            "Storing collaboration instance {}/{}",
            instance.user_id, instance.project_key
        );

        let workflows = serde_json::to_value(&instance.workflows)?;
        let products = serde_json::to_value(&instance.products)?;
        let existing = entities::CollaborationInstance::find()
            .filter(collaboration_instance::Column::UserId.eq(&instance.user_id))
            .filter(collaboration_instance::Column::ProjectKey.eq(&instance.project_key))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        match existing {
            Some(model) => {
                let mut active: collaboration_instance::ActiveModel = model.into();
                active.workflows = Set(workflows);
                active.products = Set(products);
                active.updated_at = Set(now());
                active.update(&self.db).await.map_err(AuthzError::Database)?;
            }
            None => {
                let active = collaboration_instance::ActiveModel {
                    id: NotSet,
                    user_id: Set(instance.user_id),
                    project_key: Set(instance.project_key),
                    workflows: Set(workflows),
                    products: Set(products),
                    updated_at: Set(now()),
                };
                entities::CollaborationInstance::insert(active)
                    .exec(&self.db)
                    .await
                    .map_err(AuthzError::Database)?;
            }
        }

        Ok(())
    }

    /// Collaboration modes `user_id` is a member of, with their full member lists
    pub async fn find_user_collaboration_modes(
        &self,
        user_id: &str,
    ) -> Result<Vec<models::CollaborationMode>> {
        let memberships = entities::CollaborationModeMember::find()
            .filter(collaboration_mode_member::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;
        if memberships.is_empty() {
            return Ok(Vec::new());
        }

        let mode_ids: Vec<i32> = memberships.iter().map(|m| m.mode_id).collect();
        let modes = entities::CollaborationMode::find()
            .filter(collaboration_mode::Column::Id.is_in(mode_ids.clone()))
            .order_by_asc(collaboration_mode::Column::ProjectName)
            .order_by_asc(collaboration_mode::Column::Name)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        let members = entities::CollaborationModeMember::find()
            .filter(collaboration_mode_member::Column::ModeId.is_in(mode_ids))
            .order_by_asc(collaboration_mode_member::Column::UserId)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        let mut members_by_mode: HashMap<i32, Vec<String>> = HashMap::new();
        for member in members {
            members_by_mode
                .entry(member.mode_id)
                .or_default()
                .push(member.user_id);
        }

        Ok(modes
            .into_iter()
            .map(|mode| models::CollaborationMode {
                members: members_by_mode.remove(&mode.id).unwrap_or_default(),
                name: mode.name,
                project_name: mode.project_name,
            })
            .collect())
    }

    /// Insert or replace a mode and its member list in one transaction
    pub async fn upsert_collaboration_mode(&self, mode: models::CollaborationMode) -> Result<()> {
        debug!(
            "Storing collaboration mode {}/{}",
            mode.project_name, mode.name
        );

        let txn = self.db.begin().await.map_err(AuthzError::Database)?;

        let existing = entities::CollaborationMode::find()
            .filter(collaboration_mode::Column::ProjectName.eq(&mode.project_name))
            .filter(collaboration_mode::Column::Name.eq(&mode.name))
            .one(&txn)
            .await
            .map_err(AuthzError::Database)?;

        let mode_id = match existing {
            Some(model) => {
                let id = model.id;
                let mut active: collaboration_mode::ActiveModel = model.into();
                active.updated_at = Set(now());
                active.update(&txn).await.map_err(AuthzError::Database)?;

                entities::CollaborationModeMember::delete_many()
                    .filter(collaboration_mode_member::Column::ModeId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(AuthzError::Database)?;
                id
            }
            None => {
                let timestamp = now();
                let active = collaboration_mode::ActiveModel {
                    id: NotSet,
                    name: Set(mode.name.clone()),
                    project_name: Set(mode.project_name.clone()),
                    created_at: Set(timestamp),
                    updated_at: Set(timestamp),
                };
                let inserted = active.insert(&txn).await.map_err(AuthzError::Database)?;
                inserted.id
            }
        };

        let members: BTreeSet<&str> = mode.members.iter().map(String::as_str).collect();
        if !members.is_empty() {
            let rows = members
                .into_iter()
                .map(|user_id| collaboration_mode_member::ActiveModel {
                    mode_id: Set(mode_id),
                    user_id: Set(user_id.to_string()),
                });
            entities::CollaborationModeMember::insert_many(rows)
                .exec_without_returning(&txn)
                .await
                .map_err(AuthzError::Database)?;
        }

        txn.commit().await.map_err(AuthzError::Database)?;
        Ok(())
    }
}
