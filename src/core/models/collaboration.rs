//! Collaboration-mode data
//!
//! A collaboration instance is a per-user, per-project list of explicitly named
//! workflows and environments, each with its own verbs. It is independent of
//! role bindings and is checked on its own.

use serde::{Deserialize, Serialize};

/// Workflow type used by collaboration grants for custom workflows
pub const CUSTOM_WORKFLOW_TYPE: &str = "custom";

/// Verb granted on a workflow or environment in a collaboration instance
pub mod collaboration_verbs {
    pub const VIEW: &str = "view";
    pub const EDIT_CONFIG: &str = "edit_config";
}

/// Resource families a collaboration instance can grant on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborationResource {
    Workflow,
    Environment,
}

impl CollaborationResource {
    /// Parse a resource type; unknown types yield `None`, never an error
    pub fn parse(resource: &str) -> Option<Self> {
        match resource {
            "workflow" => Some(Self::Workflow),
            "environment" | "env" | "product" => Some(Self::Environment),
            _ => None,
        }
    }
}

/// A workflow granted by a collaboration instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowGrant {
    pub name: String,
    /// Workflow type, e.g. `common` or [`CUSTOM_WORKFLOW_TYPE`]
    #[serde(default, rename = "type")]
    pub workflow_type: String,
    #[serde(default)]
    pub verbs: Vec<String>,
}

impl WorkflowGrant {
    pub fn new<I, S>(name: impl Into<String>, workflow_type: impl Into<String>, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            workflow_type: workflow_type.into(),
            verbs: verbs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.workflow_type == CUSTOM_WORKFLOW_TYPE
    }
}

/// An environment granted by a collaboration instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentGrant {
    pub name: String,
    #[serde(default)]
    pub verbs: Vec<String>,
}

impl EnvironmentGrant {
    pub fn new<I, S>(name: impl Into<String>, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            verbs: verbs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Name and verbs of one granted resource, regardless of its family
pub trait GrantedResource {
    fn name(&self) -> &str;
    fn verbs(&self) -> &[String];

    fn allows(&self, action: &str) -> bool {
        self.verbs().iter().any(|verb| verb == action)
    }
}

impl GrantedResource for WorkflowGrant {
    fn name(&self) -> &str {
        &self.name
    }

    fn verbs(&self) -> &[String] {
        &self.verbs
    }
}

impl GrantedResource for EnvironmentGrant {
    fn name(&self) -> &str {
        &self.name
    }

    fn verbs(&self) -> &[String] {
        &self.verbs
    }
}

/// Materialized collaboration grants for one (user, project) pair.
///
/// Absence is represented by [`CollaborationInstance::empty`], whose lists are
/// empty and safe to iterate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationInstance {
    pub user_id: String,
    pub project_key: String,
    #[serde(default)]
    pub workflows: Vec<WorkflowGrant>,
    #[serde(default, alias = "environments")]
    pub products: Vec<EnvironmentGrant>,
}

impl CollaborationInstance {
    /// Zero instance for a pair that has no collaboration grants
    pub fn empty(user_id: impl Into<String>, project_key: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            project_key: project_key.into(),
            workflows: Vec::new(),
            products: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty() && self.products.is_empty()
    }

    /// Grants of one resource family as trait objects
    pub fn grants(&self, resource: CollaborationResource) -> Vec<&dyn GrantedResource> {
        match resource {
            CollaborationResource::Workflow => self
                .workflows
                .iter()
                .map(|grant| grant as &dyn GrantedResource)
                .collect(),
            CollaborationResource::Environment => self
                .products
                .iter()
                .map(|grant| grant as &dyn GrantedResource)
                .collect(),
        }
    }

    /// Whether the grant named `name` in the `resource` list allows `action`.
    ///
    /// The first grant with a matching name decides.
    pub fn allows_named(&self, resource: CollaborationResource, name: &str, action: &str) -> bool {
        self.grants(resource)
            .into_iter()
            .find(|grant| grant.name() == name)
            .is_some_and(|grant| grant.allows(action))
    }

    /// Whether any grant in the `resource` list allows `action`
    pub fn allows_any(&self, resource: CollaborationResource, action: &str) -> bool {
        self.grants(resource)
            .into_iter()
            .any(|grant| grant.allows(action))
    }
}

/// A collaboration mode a user is a member of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationMode {
    /// Mode name, unique within the project
    pub name: String,
    /// Project the mode belongs to
    pub project_name: String,
    /// Member user ids
    #[serde(default)]
    pub members: Vec<String>,
}

impl CollaborationMode {
    pub fn new<I, S>(name: impl Into<String>, project_name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            project_name: project_name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| member == user_id)
    }
}
