//! Collected lore notes, newest first.
use crate::view_state::ViewState;

#[derive(Clone, Debug, PartialEq)]
pub struct ArchiveModel {
    /// Reverse of collection order, so the latest find leads.
    pub notes: Vec<ArchiveNote>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArchiveNote {
    pub title: String,
    pub content: String,
}

pub fn build(view: &ViewState) -> ArchiveModel {
    let notes = view
        .snapshot()
        .archive_entries
        .iter()
        .rev()
        .map(|entry| ArchiveNote {
            title: entry.title.clone(),
            content: entry.content.clone(),
        })
        .collect();

    ArchiveModel { notes }
}
