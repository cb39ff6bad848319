use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{lenient_text, Draft, Entity, EntityKind, Fields};
use super::NAME_ONLY;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Fields for Team {
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

impl Entity for Team {
    type Draft = TeamDraft;

    const KIND: EntityKind = EntityKind::Team;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TeamDraft {
    pub name: String,
}

impl Fields for TeamDraft {
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

impl Draft for TeamDraft {
    fn name(&self) -> &str {
        &self.name
    }
}
