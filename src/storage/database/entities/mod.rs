/// Collaboration instance entity module
pub mod collaboration_instance;
/// Collaboration mode entity module
pub mod collaboration_mode;
/// Collaboration mode member entity module
pub mod collaboration_mode_member;
/// Role entity module
pub mod role;
/// Role binding entity module
pub mod role_binding;

pub use collaboration_instance::Entity as CollaborationInstance;
pub use collaboration_mode::Entity as CollaborationMode;
pub use collaboration_mode_member::Entity as CollaborationModeMember;
pub use role::Entity as Role;
pub use role_binding::Entity as RoleBinding;
