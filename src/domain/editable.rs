//! Client-side draft list held by an admin editor.
//!
//! Every mutator returns a new list and leaves the receiver untouched, so an
//! editor can swap its state in one step and tests can compare snapshots.

use super::entities::tag::{toggle_by_id, Tag};
use super::value_objects::record_id::{is_uuid, RecordId};

/// A record kind an admin editor can hold as either a persisted record or a
/// draft.
pub trait EditableRecord: Clone + Send + Sync + 'static {
    /// Typed field update applied by [`EditableList::update_field`].
    type Field: Send;

    /// Human label used in notifications ("Experience deleted.").
    const LABEL: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn sort_order(&self) -> i64;
    /// Empty record carrying `id` and `sort_order`.
    fn blank(id: String, sort_order: i64) -> Self;
    fn tags(&self) -> &[Tag];
    fn set_tags(&mut self, tags: Vec<Tag>);
    fn apply(&mut self, field: Self::Field);
    /// Required-field checks run before anything is sent.
    fn validate(&self) -> Result<(), String>;

    fn is_draft(&self) -> bool {
        !is_uuid(self.id())
    }
}

/// Stable sort by `sortOrder` ascending.
pub fn sorted_by_sort_order<T: EditableRecord>(records: &[T]) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.sort_order());
    sorted
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditableList<T> {
    entries: Vec<T>,
    seeded: bool,
}

impl<T> Default for EditableList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            seeded: false,
        }
    }
}

impl<T: EditableRecord> EditableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    pub fn drafts(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter(|entry| entry.is_draft())
    }

    /// Seeds from a fetch result. Only the first non-empty fetch that arrives
    /// while the list is empty is taken; later fetches are ignored so that
    /// revalidation never clobbers local edits.
    #[must_use]
    pub fn seed(&self, fetched: &[T]) -> Self {
        if self.seeded || !self.entries.is_empty() || fetched.is_empty() {
            return self.clone();
        }
        Self {
            entries: sorted_by_sort_order(fetched),
            seeded: true,
        }
    }

    /// Appends a blank draft with a fresh placeholder id.
    #[must_use]
    pub fn add(&self) -> Self {
        let id = RecordId::new_draft().to_string();
        let sort_order = self.entries.len() as i64 + 1;
        let mut entries = self.entries.clone();
        entries.push(T::blank(id, sort_order));
        Self {
            entries,
            seeded: self.seeded,
        }
    }

    /// Puts a whole record into the list and returns its id. The entry with
    /// the same id is replaced in place; otherwise the record is appended,
    /// under a fresh placeholder id unless it already carries a server id.
    #[must_use]
    pub fn put(&self, mut record: T) -> (Self, String) {
        let mut next = self.clone();
        if let Some(entry) = next.entries.iter_mut().find(|entry| entry.id() == record.id()) {
            let id = record.id().to_string();
            *entry = record;
            return (next, id);
        }
        if record.is_draft() {
            record.set_id(RecordId::new_draft().to_string());
        }
        let id = record.id().to_string();
        next.entries.push(record);
        (next, id)
    }

    #[must_use]
    pub fn remove(&self, id: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.id() != id)
                .cloned()
                .collect(),
            seeded: self.seeded,
        }
    }

    #[must_use]
    pub fn update_field(&self, id: &str, field: T::Field) -> Self {
        let mut next = self.clone();
        if let Some(entry) = next.entries.iter_mut().find(|entry| entry.id() == id) {
            entry.apply(field);
        }
        next
    }

    #[must_use]
    pub fn toggle_tag(&self, id: &str, tag: &Tag) -> Self {
        let mut next = self.clone();
        if let Some(entry) = next.entries.iter_mut().find(|entry| entry.id() == id) {
            let tags = toggle_by_id(entry.tags(), tag);
            entry.set_tags(tags);
        }
        next
    }

    /// Swaps a draft's placeholder for the server id; fields stay as edited.
    /// A copy of the record that arrived through a refetch in the meantime is
    /// dropped so ids stay unique.
    #[must_use]
    pub fn replace_id(&self, old_id: &str, new_id: &str) -> Self {
        if self.position(old_id).is_none() {
            return self.clone();
        }
        let mut entries: Vec<T> = self
            .entries
            .iter()
            .filter(|entry| entry.id() != new_id)
            .cloned()
            .collect();
        if let Some(entry) = entries.iter_mut().find(|entry| entry.id() == old_id) {
            entry.set_id(new_id.to_string());
        }
        Self {
            entries,
            seeded: self.seeded,
        }
    }

    /// Rebuilds the list from a fresh server collection. Records the server
    /// still has keep their local value; local drafts are appended in order.
    #[must_use]
    pub fn reconcile(&self, fresh: &[T]) -> Self {
        let mut entries: Vec<T> = sorted_by_sort_order(fresh)
            .into_iter()
            .map(|server| self.get(server.id()).cloned().unwrap_or(server))
            .collect();
        entries.extend(self.drafts().cloned());
        Self {
            entries,
            seeded: true,
        }
    }
}
