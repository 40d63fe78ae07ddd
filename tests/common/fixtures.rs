//! Test fixtures
//!
//! A small platform shared by the integration tests:
//!
//! | user   | grants                                                        |
//! |--------|---------------------------------------------------------------|
//! | root   | `admin` in the general namespace                              |
//! | alice  | `dev` in `shop`, `project-creator` in the general namespace   |
//! | bob    | `project-admin` in `shop`, `viewer` in `billing`              |
//! | carol  | collaboration instance in `shop`, mode member of `billing`    |
//! | *      | `read-only` in `pub-docs` and `sandbox` (public projects)     |

use devops_authz::SeedData;

const PLATFORM_SEED: &str = r#"
roles:
  - namespace: __system__
    name: admin
  - namespace: __system__
    name: project-creator
    rules:
      - verbs: ["project:create", "template:view"]
  - namespace: shop
    name: dev
    rules:
      - verbs: ["workflow:view", "workflow:execute"]
      - verbs: ["environment:view", "build:view", "not-a-verb"]
  - namespace: shop
    name: project-admin
  - namespace: billing
    name: viewer
    rules:
      - verbs: ["workflow:view", "service:view"]
role_bindings:
  - { user_id: root, namespace: __system__, role_name: admin }
  - { user_id: alice, namespace: shop, role_name: dev }
  - { user_id: alice, namespace: __system__, role_name: project-creator }
  - { user_id: bob, namespace: shop, role_name: project-admin }
  - { user_id: bob, namespace: billing, role_name: viewer }
  - { user_id: "*", namespace: pub-docs, role_name: read-only }
  - { user_id: "*", namespace: sandbox, role_name: read-only }
collaboration_instances:
  - user_id: carol
    project_key: shop
    workflows:
      - { name: nightly, type: common, verbs: [view, run] }
      - { name: hotfix, type: custom, verbs: [view] }
    environments:
      - { name: staging, verbs: [view, edit_config] }
      - { name: prod, verbs: [view] }
  - user_id: carol
    project_key: billing
    workflows:
      - { name: invoices, type: common, verbs: [view] }
collaboration_modes:
  - { name: release, project_name: billing, members: [carol, dave] }
"#;

/// Factory for the shared platform seed
pub struct PlatformFixture;

impl PlatformFixture {
    /// The parsed platform seed
    pub fn seed() -> SeedData {
        SeedData::from_yaml(PLATFORM_SEED).expect("platform seed must parse")
    }

    /// Raw YAML, for tests that write a seed file
    pub fn yaml() -> &'static str {
        PLATFORM_SEED
    }
}
