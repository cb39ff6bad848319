use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{lenient_text, optional_text, Draft, Entity, EntityKind, Fields};

const USER_FIELDS: &[&str] = &["Name", "Email", "Role"];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Server fields the console does not interpret, sent back untouched on update.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Fields for User {
    fn field_names() -> &'static [&'static str] {
        USER_FIELDS
    }

    fn field(&self, index: usize) -> Option<String> {
        match index {
            0 => Some(self.name.clone()),
            1 => Some(self.email.clone().unwrap_or_default()),
            2 => Some(self.role.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: String) {
        match index {
            0 => self.name = value,
            1 => self.email = optional_text(value),
            2 => self.role = optional_text(value),
            _ => {}
        }
    }
}

impl Entity for User {
    type Draft = UserDraft;

    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn extra_columns() -> &'static [&'static str] {
        &["Email", "Role"]
    }

    fn extra_cells(&self) -> Vec<String> {
        vec![
            self.email.clone().unwrap_or_default(),
            self.role.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Fields for UserDraft {
    fn field_names() -> &'static [&'static str] {
        USER_FIELDS
    }

    fn field(&self, index: usize) -> Option<String> {
        match index {
            0 => Some(self.name.clone()),
            1 => Some(self.email.clone().unwrap_or_default()),
            2 => Some(self.role.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: String) {
        match index {
            0 => self.name = value,
            1 => self.email = optional_text(value),
            2 => self.role = optional_text(value),
            _ => {}
        }
    }
}

impl Draft for UserDraft {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive_a_round_trip() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "name": "Ana",
            "email": "ana@example.com",
            "createdAt": "2024-05-01"
        }))
        .unwrap();

        assert_eq!(user.role, None);
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["createdAt"], "2024-05-01");
        assert!(back.get("role").is_none());
    }

    #[test]
    fn test_blank_optional_fields_clear() {
        let mut draft = UserDraft::default();
        draft.set_field(1, "  ".to_string());
        draft.set_field(2, "Admin".to_string());
        assert_eq!(draft.email, None);
        assert_eq!(draft.role.as_deref(), Some("Admin"));
    }
}
