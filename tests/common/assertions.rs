//! Custom test assertions over capability matrices

use devops_authz::{AuthorizedResources, ProjectCapability};

/// Assertions for [`AuthorizedResources`]
pub trait AuthorizedResourcesAssertions {
    /// Assert the result is scoped (not the admin short-circuit) and return the project keys
    fn assert_scoped(&self) -> Vec<String>;

    /// Assert `project` grants exactly the view-class capabilities of a public project
    fn assert_read_only(&self, project: &str);
}

const VIEW_CAPABILITIES: &[ProjectCapability] = &[
    ProjectCapability::WorkflowView,
    ProjectCapability::EnvView,
    ProjectCapability::ProductionEnvView,
    ProjectCapability::TestView,
    ProjectCapability::ScanView,
    ProjectCapability::ServiceView,
    ProjectCapability::BuildView,
    ProjectCapability::DeliveryView,
];

impl AuthorizedResourcesAssertions for AuthorizedResources {
    fn assert_scoped(&self) -> Vec<String> {
        assert!(!self.is_system_admin(), "Expected a scoped result, got admin");
        assert!(
            self.system_actions().is_some(),
            "Scoped result must carry system actions"
        );
        let mut keys: Vec<String> = self
            .project_auth_info()
            .expect("Scoped result must carry project actions")
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    fn assert_read_only(&self, project: &str) {
        for capability in VIEW_CAPABILITIES {
            assert!(
                self.allows_project(project, *capability),
                "Expected {:?} on {}",
                capability,
                project
            );
        }
        for capability in [
            ProjectCapability::WorkflowExecute,
            ProjectCapability::EnvEditConfig,
            ProjectCapability::DeliveryCreate,
        ] {
            assert!(
                !self.allows_project(project, capability),
                "Unexpected {:?} on {}",
                capability,
                project
            );
        }
    }
}
