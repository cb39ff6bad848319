use crate::models::Entity;

/// Whether the record's id or name contains `term`, ignoring case.
pub fn matches<E: Entity>(record: &E, term: &str) -> bool {
    let term = term.to_lowercase();
    record.id().to_string().contains(&term) || record.name().to_lowercase().contains(&term)
}

/// Records of the loaded page matching `term`, in their original order.
/// An empty term keeps everything.
pub fn filter_records<'a, E: Entity>(records: &'a [E], term: &str) -> Vec<&'a E> {
    if term.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|record| matches(*record, term)).collect()
}
