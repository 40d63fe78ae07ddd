//! SeaORM store tests against an in-memory SQLite database

use super::SeaOrmDatabase;
use crate::config::DatabaseConfig;
use crate::core::models::{
    CollaborationInstance, CollaborationMode, CollaborationResource, EnvironmentGrant, Role,
    RoleBinding, Rule, WorkflowGrant,
};
use crate::storage::{
    AuthzStore, CollaborationInstanceStore, CollaborationModeStore, InMemoryStore,
    RoleBindingStore, RoleStore,
};

async fn test_db() -> SeaOrmDatabase {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
    };
    let db = SeaOrmDatabase::new(&config).await.unwrap();
    db.migrate().await.unwrap();
    db
}

#[tokio::test]
async fn test_health_check_and_backend() {
    let db = test_db().await;
    assert!(AuthzStore::health_check(&db).await.is_ok());
    assert_eq!(db.backend_name(), "sqlite");
}

#[tokio::test]
async fn test_role_upsert_and_lookup() {
    let db = test_db().await;
    db.put_role(Role::new("p1", "dev", vec![Rule::new(["workflow:view"])]))
        .await
        .unwrap();
    db.put_role(Role::new(
        "p1",
        "dev",
        vec![Rule::new(["workflow:view", "workflow:execute"])],
    ))
    .await
    .unwrap();

    let role = db.get_role("p1", "dev").await.unwrap().unwrap();
    assert!(role.grants("workflow:execute"));
    assert!(db.get_role("p1", "missing").await.unwrap().is_none());
    assert!(db.get_role("p2", "dev").await.unwrap().is_none());

    let roles = db.list_roles_by_verb("p1", "workflow:execute").await.unwrap();
    assert_eq!(roles.len(), 1);
    assert!(db.list_roles_by_verb("p1", "delivery:create").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bindings_are_deduplicated_and_filtered() {
    let db = test_db().await;
    db.add_role_binding(RoleBinding::new("alice", "p1", "dev")).await.unwrap();
    db.add_role_binding(RoleBinding::new("alice", "p1", "dev")).await.unwrap();
    db.add_role_binding(RoleBinding::new("alice", "p2", "read-only")).await.unwrap();
    db.add_role_binding(RoleBinding::public("pub-docs", "read-only")).await.unwrap();
    db.add_role_binding(RoleBinding::public("sandbox", "read-only")).await.unwrap();

    let bindings = db.list_user_role_bindings("alice").await.unwrap();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].namespace, "p1");

    let public = db.list_public_project_bindings("pub-").await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].namespace, "pub-docs");

    let all_public = db.list_public_project_bindings("").await.unwrap();
    assert_eq!(all_public.len(), 2);
}

#[tokio::test]
async fn test_collaboration_instance_roundtrip() {
    let db = test_db().await;

    let missing = db.find_instance("bob", "p1").await.unwrap();
    assert!(missing.is_empty());

    let instance = CollaborationInstance {
        user_id: "bob".to_string(),
        project_key: "p1".to_string(),
        workflows: vec![WorkflowGrant::new("wf1", "common", ["view", "run"])],
        products: vec![EnvironmentGrant::new("dev", ["view"])],
    };
    db.put_collaboration_instance(instance.clone()).await.unwrap();

    let found = db.find_instance("bob", "p1").await.unwrap();
    assert_eq!(found, instance);
    assert!(found.allows_named(CollaborationResource::Workflow, "wf1", "run"));

    let replaced = CollaborationInstance {
        workflows: Vec::new(),
        ..instance
    };
    db.put_collaboration_instance(replaced).await.unwrap();
    let found = db.find_instance("bob", "p1").await.unwrap();
    assert!(found.workflows.is_empty());
    assert_eq!(found.products.len(), 1);
}

#[tokio::test]
async fn test_collaboration_modes_by_member() {
    let db = test_db().await;
    db.put_collaboration_mode(CollaborationMode::new("ops", "p3", ["bob", "carol"]))
        .await
        .unwrap();
    db.put_collaboration_mode(CollaborationMode::new("qa", "p4", ["carol"]))
        .await
        .unwrap();

    let modes = db.list_user_collaboration_modes("bob").await.unwrap();
    assert_eq!(modes.len(), 1);
    assert_eq!(modes[0].project_name, "p3");
    assert_eq!(modes[0].members, vec!["bob", "carol"]);

    let modes = db.list_user_collaboration_modes("carol").await.unwrap();
    assert_eq!(modes.len(), 2);

    // Replacing the member list drops bob
    db.put_collaboration_mode(CollaborationMode::new("ops", "p3", ["carol", "carol"]))
        .await
        .unwrap();
    assert!(db.list_user_collaboration_modes("bob").await.unwrap().is_empty());
    let modes = db.list_user_collaboration_modes("carol").await.unwrap();
    assert_eq!(modes[0].members, vec!["carol"]);

    assert!(db.list_user_collaboration_modes("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_public_prefix_is_case_sensitive_and_literal() {
    let db = test_db().await;
    let memory = InMemoryStore::new();
    for namespace in ["team-a", "TEAM-b", "teamXc", "team_d"] {
        let binding = RoleBinding::public(namespace, "read-only");
        db.add_role_binding(binding.clone()).await.unwrap();
        memory.add_role_binding(binding).await.unwrap();
    }

    for (prefix, expected) in [
        ("team-", vec!["team-a"]),
        ("team_", vec!["team_d"]),
        ("TEAM", vec!["TEAM-b"]),
        ("%", vec![]),
    ] {
        let from_db: Vec<String> = db
            .list_public_project_bindings(prefix)
            .await
            .unwrap()
            .into_iter()
            .map(|binding| binding.namespace)
            .collect();
        let mut from_memory: Vec<String> = memory
            .list_public_project_bindings(prefix)
            .await
            .unwrap()
            .into_iter()
            .map(|binding| binding.namespace)
            .collect();
        from_memory.sort();

        assert_eq!(from_db, expected, "database, prefix {:?}", prefix);
        assert_eq!(from_memory, expected, "memory, prefix {:?}", prefix);
    }
}
