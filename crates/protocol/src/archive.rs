use serde::{Deserialize, Serialize};

/// One collected lore note.
///
/// Served in collection order; presentation reverses the list so the newest
/// find leads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub title: String,
    pub content: String,
}
