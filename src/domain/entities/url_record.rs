//! URL record entity.

/// A persisted mapping from a short alias to a target URL.
///
/// `id` is assigned by storage and never reused. `alias` and `target` are
/// immutable after creation; replacing a mapping means delete then create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub target: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            target: target.into(),
        }
    }
}
