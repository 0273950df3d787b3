//! # Filter Engine
//!
//! Plain case-insensitive substring search over the schema's search fields.
//! Operators type a fragment of a name, ID or IP they recognize; there is no
//! fuzzy matching and no ranking, so matches keep their original order.

use crate::ui::schema::Schema;

/// Indices of the items matching `query`, in item order.
///
/// An empty query matches everything.
pub fn filter<S: Schema>(items: &[S::Item], query: &str, schema: &S) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let query = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(schema, item, &query))
        .map(|(i, _)| i)
        .collect()
}

/// `folded_query` must already be lowercase.
fn matches<S: Schema>(schema: &S, item: &S::Item, folded_query: &str) -> bool {
    schema
        .search_fields(item)
        .iter()
        .any(|field| field.to_lowercase().contains(folded_query))
}
