use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AdminError;

/// The server-managed record types the console can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Team,
    Project,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::User, EntityKind::Team, EntityKind::Project];

    /// Path of the collection endpoint, relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            EntityKind::User => "private/users",
            EntityKind::Team => "private/teams",
            EntityKind::Project => "private/projects",
        }
    }

    /// Key holding the record list in a list response.
    pub fn collection_key(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Team => "teams",
            EntityKind::Project => "projects",
        }
    }

    /// Sidebar and table title.
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::User => "Usuários",
            EntityKind::Team => "Equipes",
            EntityKind::Project => "Projetos",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Team => "team",
            EntityKind::Project => "project",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

impl FromStr for EntityKind {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" | "users" | "usuarios" => Ok(EntityKind::User),
            "team" | "teams" | "equipes" => Ok(EntityKind::Team),
            "project" | "projects" | "projetos" => Ok(EntityKind::Project),
            other => Err(AdminError::InvalidInput(format!("Unknown entity type: {}", other))),
        }
    }
}

/// Positional, string-typed access to the editable fields of a record or
/// draft. Field 0 is always the name.
pub trait Fields {
    fn field_names() -> &'static [&'static str];
    fn field(&self, index: usize) -> Option<String>;
    fn set_field(&mut self, index: usize, value: String);
}

/// A user-entered payload that has not been persisted yet.
pub trait Draft: Fields + Clone + fmt::Debug + Default + Serialize + Send + Sync + 'static {
    fn name(&self) -> &str;

    /// Whether the form may be submitted at all.
    fn is_submittable(&self) -> bool {
        !self.name().is_empty()
    }
}

/// A record managed by the remote API and rendered by a table controller.
pub trait Entity:
    Fields + Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: Draft;

    const KIND: EntityKind;

    fn id(&self) -> i64;
    fn name(&self) -> &str;

    /// Column headers after ID and name.
    fn extra_columns() -> &'static [&'static str] {
        &[]
    }

    /// Cell values matching `extra_columns`.
    fn extra_cells(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Read a text field that the server may send as `null` or omit.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trim optional text input down to `None` when blank.
pub(crate) fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
