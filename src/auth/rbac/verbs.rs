//! Verb to capability lookup tables
//!
//! Role rules carry opaque, resource-qualified verbs. Each known verb maps to
//! exactly one project capability or one system capability through the static
//! tables below; verbs that appear in neither table are ignored.

use super::capability::Capability;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Per-project capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ProjectCapability {
    WorkflowView,
    WorkflowCreate,
    WorkflowEdit,
    WorkflowDelete,
    WorkflowExecute,
    WorkflowDebug,
    EnvView,
    EnvCreate,
    EnvEditConfig,
    EnvManage,
    EnvDelete,
    EnvDebugPod,
    ProductionEnvView,
    ProductionEnvCreate,
    ProductionEnvEditConfig,
    ProductionEnvManage,
    ProductionEnvDelete,
    ProductionEnvDebugPod,
    TestView,
    TestCreate,
    TestEdit,
    TestDelete,
    TestExecute,
    ScanView,
    ScanCreate,
    ScanEdit,
    ScanDelete,
    ScanExecute,
    ServiceView,
    ServiceCreate,
    ServiceEdit,
    ServiceDelete,
    ProductionServiceView,
    ProductionServiceCreate,
    ProductionServiceEdit,
    ProductionServiceDelete,
    BuildView,
    BuildCreate,
    BuildEdit,
    BuildDelete,
    DeliveryView,
    DeliveryCreate,
    DeliveryDelete,
    VersionView,
    VersionCreate,
    VersionDelete,
}

/// System-wide capabilities, granted by roles bound in the general namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SystemCapability {
    ProjectCreate,
    ProjectDelete,
    TemplateView,
    TemplateCreate,
    TemplateEdit,
    TemplateDelete,
    TestCenterView,
    ReleaseCenterView,
    DeliveryCenterViewVersions,
    DeliveryCenterViewArtifacts,
    DataCenterViewOverview,
    DataCenterViewInsight,
    DataCenterEditInsight,
    ReleasePlanView,
    ReleasePlanCreate,
    ReleasePlanEdit,
    ReleasePlanDelete,
    ClusterView,
    ClusterCreate,
    ClusterEdit,
    ClusterDelete,
    VmView,
    VmCreate,
    VmEdit,
    VmDelete,
    RegistryView,
    RegistryCreate,
    RegistryEdit,
    RegistryDelete,
    S3StorageView,
    S3StorageCreate,
    S3StorageEdit,
    S3StorageDelete,
    HelmRepoView,
    HelmRepoCreate,
    HelmRepoEdit,
    HelmRepoDelete,
    BusinessDirectoryView,
    DbInstanceView,
    DbInstanceCreate,
    DbInstanceEdit,
    DbInstanceDelete,
    LabelView,
    LabelCreate,
    LabelDelete,
}

/// Project verb table; order matches [`ProjectCapability`] declaration order
pub const PROJECT_VERB_TABLE: &[(&str, ProjectCapability)] = &[
    ("workflow:view", ProjectCapability::WorkflowView),
    ("workflow:create", ProjectCapability::WorkflowCreate),
    ("workflow:edit", ProjectCapability::WorkflowEdit),
    ("workflow:delete", ProjectCapability::WorkflowDelete),
    ("workflow:execute", ProjectCapability::WorkflowExecute),
    ("workflow:debug", ProjectCapability::WorkflowDebug),
    ("environment:view", ProjectCapability::EnvView),
    ("environment:create", ProjectCapability::EnvCreate),
    ("environment:edit_config", ProjectCapability::EnvEditConfig),
    ("environment:manage", ProjectCapability::EnvManage),
    ("environment:delete", ProjectCapability::EnvDelete),
    ("environment:debug_pod", ProjectCapability::EnvDebugPod),
    ("production_environment:view", ProjectCapability::ProductionEnvView),
    ("production_environment:create", ProjectCapability::ProductionEnvCreate),
    (
        "production_environment:edit_config",
        ProjectCapability::ProductionEnvEditConfig,
    ),
    ("production_environment:manage", ProjectCapability::ProductionEnvManage),
    ("production_environment:delete", ProjectCapability::ProductionEnvDelete),
    (
        "production_environment:debug_pod",
        ProjectCapability::ProductionEnvDebugPod,
    ),
    ("test:view", ProjectCapability::TestView),
    ("test:create", ProjectCapability::TestCreate),
    ("test:edit", ProjectCapability::TestEdit),
    ("test:delete", ProjectCapability::TestDelete),
    ("test:execute", ProjectCapability::TestExecute),
    ("scan:view", ProjectCapability::ScanView),
    ("scan:create", ProjectCapability::ScanCreate),
    ("scan:edit", ProjectCapability::ScanEdit),
    ("scan:delete", ProjectCapability::ScanDelete),
    ("scan:execute", ProjectCapability::ScanExecute),
    ("service:view", ProjectCapability::ServiceView),
    ("service:create", ProjectCapability::ServiceCreate),
    ("service:edit", ProjectCapability::ServiceEdit),
    ("service:delete", ProjectCapability::ServiceDelete),
    ("production_service:view", ProjectCapability::ProductionServiceView),
    ("production_service:create", ProjectCapability::ProductionServiceCreate),
    ("production_service:edit", ProjectCapability::ProductionServiceEdit),
    ("production_service:delete", ProjectCapability::ProductionServiceDelete),
    ("build:view", ProjectCapability::BuildView),
    ("build:create", ProjectCapability::BuildCreate),
    ("build:edit", ProjectCapability::BuildEdit),
    ("build:delete", ProjectCapability::BuildDelete),
    ("delivery:view", ProjectCapability::DeliveryView),
    ("delivery:create", ProjectCapability::DeliveryCreate),
    ("delivery:delete", ProjectCapability::DeliveryDelete),
    ("version:view", ProjectCapability::VersionView),
    ("version:create", ProjectCapability::VersionCreate),
    ("version:delete", ProjectCapability::VersionDelete),
];

/// System verb table; order matches [`SystemCapability`] declaration order
pub const SYSTEM_VERB_TABLE: &[(&str, SystemCapability)] = &[
    ("project:create", SystemCapability::ProjectCreate),
    ("project:delete", SystemCapability::ProjectDelete),
    ("template:view", SystemCapability::TemplateView),
    ("template:create", SystemCapability::TemplateCreate),
    ("template:edit", SystemCapability::TemplateEdit),
    ("template:delete", SystemCapability::TemplateDelete),
    ("test_center:view", SystemCapability::TestCenterView),
    ("release_center:view", SystemCapability::ReleaseCenterView),
    (
        "delivery_center:view_versions",
        SystemCapability::DeliveryCenterViewVersions,
    ),
    (
        "delivery_center:view_artifacts",
        SystemCapability::DeliveryCenterViewArtifacts,
    ),
    ("data_center:view_overview", SystemCapability::DataCenterViewOverview),
    ("data_center:view_insight", SystemCapability::DataCenterViewInsight),
    ("data_center:edit_insight", SystemCapability::DataCenterEditInsight),
    ("release_plan:view", SystemCapability::ReleasePlanView),
    ("release_plan:create", SystemCapability::ReleasePlanCreate),
    ("release_plan:edit", SystemCapability::ReleasePlanEdit),
    ("release_plan:delete", SystemCapability::ReleasePlanDelete),
    ("cluster_management:view", SystemCapability::ClusterView),
    ("cluster_management:create", SystemCapability::ClusterCreate),
    ("cluster_management:edit", SystemCapability::ClusterEdit),
    ("cluster_management:delete", SystemCapability::ClusterDelete),
    ("vm_management:view", SystemCapability::VmView),
    ("vm_management:create", SystemCapability::VmCreate),
    ("vm_management:edit", SystemCapability::VmEdit),
    ("vm_management:delete", SystemCapability::VmDelete),
    ("registry_management:view", SystemCapability::RegistryView),
    ("registry_management:create", SystemCapability::RegistryCreate),
    ("registry_management:edit", SystemCapability::RegistryEdit),
    ("registry_management:delete", SystemCapability::RegistryDelete),
    ("s3_storage_management:view", SystemCapability::S3StorageView),
    ("s3_storage_management:create", SystemCapability::S3StorageCreate),
    ("s3_storage_management:edit", SystemCapability::S3StorageEdit),
    ("s3_storage_management:delete", SystemCapability::S3StorageDelete),
    ("helm_repo_management:view", SystemCapability::HelmRepoView),
    ("helm_repo_management:create", SystemCapability::HelmRepoCreate),
    ("helm_repo_management:edit", SystemCapability::HelmRepoEdit),
    ("helm_repo_management:delete", SystemCapability::HelmRepoDelete),
    ("business_directory:view", SystemCapability::BusinessDirectoryView),
    ("db_instance_management:view", SystemCapability::DbInstanceView),
    ("db_instance_management:create", SystemCapability::DbInstanceCreate),
    ("db_instance_management:edit", SystemCapability::DbInstanceEdit),
    ("db_instance_management:delete", SystemCapability::DbInstanceDelete),
    ("label_management:view", SystemCapability::LabelView),
    ("label_management:create", SystemCapability::LabelCreate),
    ("label_management:delete", SystemCapability::LabelDelete),
];

/// View-class verbs every user gets on a public project
pub const PUBLIC_VIEW_CAPABILITIES: [ProjectCapability; 8] = [
    ProjectCapability::WorkflowView,
    ProjectCapability::EnvView,
    ProjectCapability::ProductionEnvView,
    ProjectCapability::TestView,
    ProjectCapability::ScanView,
    ProjectCapability::ServiceView,
    ProjectCapability::BuildView,
    ProjectCapability::DeliveryView,
];

static PROJECT_CAPABILITIES: OnceLock<Vec<ProjectCapability>> = OnceLock::new();
static SYSTEM_CAPABILITIES: OnceLock<Vec<SystemCapability>> = OnceLock::new();
static PROJECT_VERB_INDEX: OnceLock<HashMap<&'static str, ProjectCapability>> = OnceLock::new();
static SYSTEM_VERB_INDEX: OnceLock<HashMap<&'static str, SystemCapability>> = OnceLock::new();

impl ProjectCapability {
    /// Look up the capability a project verb grants
    pub fn from_verb(verb: &str) -> Option<Self> {
        PROJECT_VERB_INDEX
            .get_or_init(|| PROJECT_VERB_TABLE.iter().copied().collect())
            .get(verb)
            .copied()
    }
}

impl SystemCapability {
    /// Look up the capability a system verb grants
    pub fn from_verb(verb: &str) -> Option<Self> {
        SYSTEM_VERB_INDEX
            .get_or_init(|| SYSTEM_VERB_TABLE.iter().copied().collect())
            .get(verb)
            .copied()
    }
}

fn all_project_capabilities() -> &'static [ProjectCapability] {
    PROJECT_CAPABILITIES.get_or_init(|| PROJECT_VERB_TABLE.iter().map(|(_, cap)| *cap).collect())
}

fn all_system_capabilities() -> &'static [SystemCapability] {
    SYSTEM_CAPABILITIES.get_or_init(|| SYSTEM_VERB_TABLE.iter().map(|(_, cap)| *cap).collect())
}

impl Capability for ProjectCapability {
    fn all() -> &'static [Self] {
        all_project_capabilities()
    }

    fn index(self) -> u32 {
        self as u32
    }

    fn verb(self) -> &'static str {
        PROJECT_VERB_TABLE[self as usize].0
    }
}

impl Capability for SystemCapability {
    fn all() -> &'static [Self] {
        all_system_capabilities()
    }

    fn index(self) -> u32 {
        self as u32
    }

    fn verb(self) -> &'static str {
        SYSTEM_VERB_TABLE[self as usize].0
    }
}
