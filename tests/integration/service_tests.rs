//! Authorization service tests
//!
//! Every scenario runs against both backends to keep them behaviorally equal.

#[cfg(test)]
mod tests {
    use crate::common::assertions::AuthorizedResourcesAssertions;
    use crate::common::{PlatformFixture, TestDatabase};
    use devops_authz::config::RbacConfig;
    use devops_authz::{
        AuthorizationService, AuthzStore, InMemoryStore, ProjectCapability, SystemCapability,
    };
    use std::sync::Arc;

    async fn memory_store() -> Arc<dyn AuthzStore> {
        let store = Arc::new(InMemoryStore::new());
        PlatformFixture::seed().apply(store.as_ref()).await.unwrap();
        store
    }

    async fn database_store() -> Arc<dyn AuthzStore> {
        TestDatabase::seeded().await.db_arc()
    }

    async fn services(prefix: &str) -> Vec<AuthorizationService> {
        let config = RbacConfig {
            public_project_prefix: prefix.to_string(),
        };
        vec![
            AuthorizationService::new(memory_store().await, &config),
            AuthorizationService::new(database_store().await, &config),
        ]
    }

    #[tokio::test]
    async fn test_system_admin_short_circuit() {
        for service in services("").await {
            let info = service.get_user_auth_info("root").await.unwrap();
            assert!(info.is_system_admin());
            assert!(info.project_auth_info().is_none());
            assert_eq!(
                serde_json::to_value(&info).unwrap(),
                serde_json::json!({ "is_system_admin": true })
            );

            let internal = service.get_user_auth_info("").await.unwrap();
            assert!(internal.is_system_admin());
        }
    }

    #[tokio::test]
    async fn test_role_and_public_projects_merge() {
        for service in services("").await {
            let info = service.get_user_auth_info("alice").await.unwrap();
            assert_eq!(info.assert_scoped(), vec!["pub-docs", "sandbox", "shop"]);

            assert!(info.allows_project("shop", ProjectCapability::WorkflowExecute));
            assert!(info.allows_project("shop", ProjectCapability::BuildView));
            assert!(!info.allows_project("shop", ProjectCapability::WorkflowEdit));
            assert!(!info.is_project_admin("shop"));

            info.assert_read_only("pub-docs");
            info.assert_read_only("sandbox");

            assert!(info.allows_system(SystemCapability::ProjectCreate));
            assert!(info.allows_system(SystemCapability::TemplateView));
            assert!(!info.allows_system(SystemCapability::ProjectDelete));
        }
    }

    #[tokio::test]
    async fn test_project_admin_flag_is_not_expanded() {
        for service in services("").await {
            let info = service.get_user_auth_info("bob").await.unwrap();
            assert!(info.is_project_admin("shop"));
            assert!(!info.allows_project("shop", ProjectCapability::WorkflowView));
            assert!(info.allows_project("billing", ProjectCapability::ServiceView));
            assert!(!info.is_project_admin("billing"));
        }
    }

    #[tokio::test]
    async fn test_public_prefix_limits_public_projects() {
        for service in services("pub-").await {
            let info = service.get_user_auth_info("dave").await.unwrap();
            assert_eq!(info.assert_scoped(), vec!["pub-docs"]);

            let projects = service.list_authorized_projects("dave").await.unwrap();
            assert_eq!(projects, vec!["billing", "pub-docs"]);
        }
    }

    #[tokio::test]
    async fn test_can() {
        for service in services("").await {
            assert!(
                service
                    .can("alice", "shop", ProjectCapability::WorkflowView)
                    .await
                    .unwrap()
            );
            assert!(
                !service
                    .can("alice", "billing", ProjectCapability::WorkflowView)
                    .await
                    .unwrap()
            );
            assert!(
                service
                    .can("root", "anything", ProjectCapability::DeliveryDelete)
                    .await
                    .unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_collaboration_checks() {
        for service in services("").await {
            let check = |resource: &'static str, name: &'static str, action: &'static str| {
                let service = service.clone();
                async move {
                    service
                        .check_collaboration_mode_permission(
                            "carol",
                            "shop",
                            resource,
                            name,
                            action,
                        )
                        .await
                        .unwrap()
                }
            };

            assert!(check("workflow", "nightly", "run").await);
            assert!(!check("workflow", "hotfix", "run").await);
            assert!(check("environment", "staging", "edit_config").await);
            assert!(!check("environment", "prod", "edit_config").await);
            assert!(!check("pipeline", "nightly", "view").await);
            assert!(
                !service
                    .check_collaboration_mode_permission(
                        "alice",
                        "shop",
                        "workflow",
                        "nightly",
                        "view",
                    )
                    .await
                    .unwrap()
            );

            assert!(
                service
                    .check_permission_given_by_collaboration_mode(
                        "carol",
                        "shop",
                        "environment",
                        "edit_config",
                    )
                    .await
                    .unwrap()
            );
            assert!(
                !service
                    .check_permission_given_by_collaboration_mode(
                        "carol",
                        "shop",
                        "workflow",
                        "edit",
                    )
                    .await
                    .unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_collaboration_listings() {
        for service in services("").await {
            let workflows = service.list_authorized_workflows("carol", "shop").await.unwrap();
            assert_eq!(workflows.workflow_names, vec!["nightly"]);
            assert_eq!(workflows.custom_workflow_names, vec!["hotfix"]);

            let envs = service.list_authorized_envs("carol", "shop").await.unwrap();
            assert!(envs.read_envs.contains(&"staging".to_string()));
            assert!(envs.read_envs.contains(&"prod".to_string()));
            assert_eq!(envs.edit_envs, vec!["staging"]);

            let none = service.list_authorized_envs("alice", "shop").await.unwrap();
            assert!(none.read_envs.is_empty());
            assert!(none.edit_envs.is_empty());
        }
    }

    #[tokio::test]
    async fn test_project_visibility() {
        for service in services("").await {
            assert_eq!(
                service.list_authorized_projects("alice").await.unwrap(),
                vec!["pub-docs", "sandbox", "shop"]
            );
            assert_eq!(
                service.list_authorized_projects("carol").await.unwrap(),
                vec!["billing", "pub-docs", "sandbox"]
            );
            assert_eq!(
                service.list_authorized_projects("root").await.unwrap(),
                vec!["pub-docs", "sandbox"]
            );
        }
    }

    #[tokio::test]
    async fn test_project_visibility_by_verb() {
        for service in services("").await {
            assert_eq!(
                service
                    .list_authorized_projects_by_verb("alice", "workflow", "view")
                    .await
                    .unwrap(),
                vec!["shop"]
            );
            assert_eq!(
                service
                    .list_authorized_projects_by_verb("bob", "workflow", "workflow:view")
                    .await
                    .unwrap(),
                vec!["billing", "shop"]
            );
            assert_eq!(
                service
                    .list_authorized_projects_by_verb("carol", "workflow", "view")
                    .await
                    .unwrap(),
                vec!["billing"]
            );
            assert!(
                service
                    .list_authorized_projects_by_verb("carol", "workflow", "run")
                    .await
                    .unwrap()
                    .is_empty()
            );
            assert!(
                service
                    .list_authorized_projects_by_verb("dave", "workflow", "view")
                    .await
                    .unwrap()
                    .is_empty()
            );
        }
    }
}
