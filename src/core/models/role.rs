//! Roles, rules and role bindings

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reserved namespace holding system-scope roles and bindings
pub const GENERAL_NAMESPACE: &str = "__system__";

/// Wildcard marker; as a binding subject it marks a public project
pub const WILDCARD: &str = "*";

/// Role that, bound in [`GENERAL_NAMESPACE`], makes a user system admin
pub const ADMIN_ROLE: &str = "admin";

/// Role carrying "everything in this project" semantics on top of its verbs
pub const PROJECT_ADMIN_ROLE: &str = "project-admin";

/// The single admin short-circuit predicate.
///
/// Only the admin role bound in the general namespace qualifies; an `admin`
/// role defined inside a project is an ordinary project role.
pub fn is_system_admin_role(role_name: &str, namespace: &str) -> bool {
    namespace == GENERAL_NAMESPACE && role_name == ADMIN_ROLE
}

/// Whether a namespace names a real project rather than a reserved scope
pub fn is_project_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace != GENERAL_NAMESPACE && namespace != WILDCARD
}

/// A single rule: a set of resource-qualified verbs such as `workflow:view`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Verbs granted by this rule
    #[serde(default)]
    pub verbs: BTreeSet<String>,
}

impl Rule {
    /// Build a rule from any iterator of verbs
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verbs: verbs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn grants(&self, verb: &str) -> bool {
        self.verbs.contains(verb)
    }
}

/// Role definition scoped to a namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Project key or [`GENERAL_NAMESPACE`]
    pub namespace: String,
    /// Role name, unique within the namespace
    pub name: String,
    /// Ordered rules
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Role {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            rules,
        }
    }

    /// Whether any rule of this role grants `verb`
    pub fn grants(&self, verb: &str) -> bool {
        self.rules.iter().any(|rule| rule.grants(verb))
    }

    /// Every verb granted by this role, in rule order
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.verbs.iter().map(String::as_str))
    }
}

/// Association of a user to a role within a namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleBinding {
    /// Subject; [`WILDCARD`] for public-project bindings
    pub user_id: String,
    /// Project key or [`GENERAL_NAMESPACE`]
    pub namespace: String,
    /// Bound role name
    pub role_name: String,
}

impl RoleBinding {
    pub fn new(
        user_id: impl Into<String>,
        namespace: impl Into<String>,
        role_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            namespace: namespace.into(),
            role_name: role_name.into(),
        }
    }

    /// Binding that makes `namespace` readable by everyone
    pub fn public(namespace: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self::new(WILDCARD, namespace, role_name)
    }

    pub fn is_public(&self) -> bool {
        self.user_id == WILDCARD
    }
}
