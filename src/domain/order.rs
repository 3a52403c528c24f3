// Order queue domain model
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OrderTask {
    pub id: String,
    pub product: String,
    pub status: String,
}

impl OrderTask {
    /// Order ids are displayed with a leading `#` marker in some views.
    /// The workflow endpoint wants the bare id.
    pub fn clean_id(id: &str) -> &str {
        id.strip_prefix('#').unwrap_or(id)
    }
}
