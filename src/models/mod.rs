pub mod entity;
pub mod page;
pub mod project;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use entity::{Draft, Entity, EntityKind, Fields};
pub use page::{body_error, Page};
pub use project::{Project, ProjectDraft};
pub use team::{Team, TeamDraft};
pub use user::{User, UserDraft};

/// Field list for entities whose only editable field is the name.
pub(crate) const NAME_ONLY: &[&str] = &["Name"];
