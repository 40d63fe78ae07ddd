//! Permission resolution configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Only public projects whose key starts with this prefix are granted
    /// read access; empty means every public project
    #[serde(default)]
    pub public_project_prefix: String,
}

impl RbacConfig {
    /// Merge; an empty prefix in `other` is ignored
    pub fn merge(mut self, other: Self) -> Self {
        if !other.public_project_prefix.is_empty() {
            self.public_project_prefix = other.public_project_prefix;
        }
        self
    }
}
