//! URL record entity representing a shortened URL mapping.

/// A stored mapping between an alias and a target URL.
///
/// Records are immutable once created; they can only be deleted by alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlRecord {
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for storing a new URL record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub alias: String,
    pub url: String,
}

impl NewUrlRecord {
    pub fn new(alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            url: url.into(),
        }
    }

    /// Builds the stored record once the store has assigned an id.
    pub fn into_record(self, id: i64) -> UrlRecord {
        UrlRecord::new(id, self.alias, self.url)
    }
}
