use serde::{Deserialize, Serialize};

/// Id/name pair the board only uses for badge labels and filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

pub type Project = NamedRef;
pub type Sprint = NamedRef;
pub type User = NamedRef;

/// Resolves `id` against `items`, falling back to `fallback` when the id is
/// absent or unknown.
pub fn label_for<'a>(items: &'a [NamedRef], id: Option<&str>, fallback: &'a str) -> &'a str {
    id.and_then(|id| items.iter().find(|item| item.id == id))
        .map(|item| item.name.as_str())
        .unwrap_or(fallback)
}
