use serde::Serialize;

/// A standalone study resource, kept separately from any priority
/// item's per-item link list.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceLink {
    pub id: i64,
    pub title: String, // ⇔ resource_links.title (TEXT NOT NULL)
    pub url: String,   // ⇔ resource_links.url (TEXT NOT NULL)
    pub category: Option<String>,
}

impl ResourceLink {
    /// Constructor for links created from the CLI; `id = 0` means
    /// "not yet inserted" (the DB assigns the real id).
    pub fn new(title: String, url: String, category: Option<String>) -> Self {
        Self {
            id: 0,
            title,
            url,
            category,
        }
    }
}
