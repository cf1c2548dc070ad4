use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identifier of a board column.
///
/// Tasks reference their column through `statusId`, which the backend fills
/// with the status *name* (`"TODO"`, `"DONE"`), not the status row id. The
/// whole client keys columns by that name: grouping, drag intents and the
/// `PUT /tasks/:id` body all carry a `StatusKey` built from `Status::name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusKey(String);

impl StatusKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StatusKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StatusKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Status {
    pub id: String,
    pub name: String,
}

impl Status {
    pub fn key(&self) -> StatusKey {
        StatusKey::from(self.name.as_str())
    }

    /// Terminal columns suppress the overdue flag on cards.
    pub fn is_done(key: &StatusKey) -> bool {
        matches!(
            key.as_str().to_uppercase().as_str(),
            "DONE" | "CONCLUIDO" | "CONCLUÍDO" | "CLOSED"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_the_status_name_not_the_row_id() {
        let status = Status { id: "s1".into(), name: "TODO".into() };
        assert_eq!(status.key(), StatusKey::from("TODO"));
        assert_ne!(status.key().as_str(), status.id);
    }

    #[test]
    fn done_detection_ignores_case() {
        assert!(Status::is_done(&StatusKey::from("done")));
        assert!(Status::is_done(&StatusKey::from("Concluído")));
        assert!(!Status::is_done(&StatusKey::from("IN_PROGRESS")));
    }
}
