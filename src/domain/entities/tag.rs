use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: String,
}

impl Tag {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tag_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tag_type: tag_type.into(),
        }
    }
}

/// Groups tags by `type`, keeping the first-seen order of types and of tags
/// within each type.
pub fn group_by_type(tags: &[Tag]) -> IndexMap<String, Vec<Tag>> {
    let mut groups: IndexMap<String, Vec<Tag>> = IndexMap::new();
    for tag in tags {
        groups
            .entry(tag.tag_type.clone())
            .or_default()
            .push(tag.clone());
    }
    groups
}

/// Adds `tag` when no tag with the same id is present, removes it otherwise.
pub fn toggle_by_id(tags: &[Tag], tag: &Tag) -> Vec<Tag> {
    if tags.iter().any(|existing| existing.id == tag.id) {
        tags.iter()
            .filter(|existing| existing.id != tag.id)
            .cloned()
            .collect()
    } else {
        let mut next = tags.to_vec();
        next.push(tag.clone());
        next
    }
}
