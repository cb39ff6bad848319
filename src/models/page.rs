use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::entity::Entity;

/// One page of records as reported by a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub records: Vec<E>,
    /// Total number of records on the server, when reported.
    pub total: Option<u64>,
}

impl<E: Entity> Page<E> {
    /// Read a list response leniently: a record list that is missing or not
    /// an array yields an empty page, and items that are not records are
    /// skipped while the rest keep their order.
    pub fn from_body(body: &Value) -> Self {
        let key = E::KIND.collection_key();

        let records = match body.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match E::deserialize(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(collection = key, index, error = %e, "skipping malformed record");
                        None
                    }
                })
                .collect(),
            other => {
                warn!(collection = key, found = ?other, "record list missing or not a list");
                Vec::new()
            }
        };

        Self {
            records,
            total: parse_total(body.get("total")),
        }
    }
}

fn parse_total(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.ceil() as u64))
            .filter(|total| *total > 0),
        Value::String(s) => s.trim().parse::<u64>().ok().filter(|total| *total > 0),
        _ => None,
    }
}

/// Logical error carried by a 2xx body: `{ "error": ... }` with a truthy value.
pub fn body_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;
    use serde_json::json;

    #[test]
    fn test_well_formed_page() {
        let page = Page::<Project>::from_body(&json!({
            "projects": [{"id": 1, "name": "Apollo"}, {"id": 2, "name": "Gemini"}],
            "total": 25
        }));
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total, Some(25));
    }

    #[test]
    fn test_null_names_and_bad_items_keep_the_rest() {
        let page = Page::<Project>::from_body(&json!({
            "projects": [
                {"id": 1, "name": "Apollo"},
                {"id": 2, "name": null},
                {"id": 3},
                {"name": "no id"},
                "junk",
                {"id": 4, "name": "Gemini"}
            ],
            "total": 6
        }));
        let loaded: Vec<(i64, &str)> = page.records.iter().map(|p| (p.id, p.name.as_str())).collect();
        assert_eq!(loaded, vec![(1, "Apollo"), (2, ""), (3, ""), (4, "Gemini")]);
    }

    #[test]
    fn test_non_list_collections_become_empty() {
        for shape in [json!(null), json!({"id": 1}), json!("projects"), json!(3)] {
            let page = Page::<Project>::from_body(&json!({ "projects": shape, "total": 4 }));
            assert!(page.records.is_empty());
            assert_eq!(page.total, Some(4));
        }
    }

    #[test]
    fn test_missing_collection_and_total() {
        let page = Page::<Project>::from_body(&json!({}));
        assert!(page.records.is_empty());
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_zero_total_is_unreported() {
        let page = Page::<Project>::from_body(&json!({ "projects": [], "total": 0 }));
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_body_error_truthiness() {
        assert_eq!(body_error(&json!({"error": "duplicate name"})), Some("duplicate name".to_string()));
        assert_eq!(body_error(&json!({"error": ""})), None);
        assert_eq!(body_error(&json!({"error": null})), None);
        assert_eq!(body_error(&json!({"error": false})), None);
        assert_eq!(body_error(&json!({"id": 1})), None);
        assert_eq!(body_error(&json!({"error": true})), Some("true".to_string()));
    }
}
