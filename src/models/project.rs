use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{lenient_text, Draft, Entity, EntityKind, Fields};
use super::NAME_ONLY;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Fields for Project {
    fn field_names() -> &'static [&'static str] {
        NAME_ONLY
    }

    fn field(&self, index: usize) -> Option<String> {
        (index == 0).then(|| self.name.clone())
    }

    fn set_field(&mut self, index: usize, value: String) {
        if index == 0 {
            self.name = value;
        }
    }
}

impl Entity for Project {
    type Draft = ProjectDraft;

    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
}

impl Fields for ProjectDraft {
    fn field_names() -> &'static [&'static str] {
        NAME_ONLY
    }

    fn field(&self, index: usize) -> Option<String> {
        (index == 0).then(|| self.name.clone())
    }

    fn set_field(&mut self, index: usize, value: String) {
        if index == 0 {
            self.name = value;
        }
    }
}

impl Draft for ProjectDraft {
    fn name(&self) -> &str {
        &self.name
    }
}
