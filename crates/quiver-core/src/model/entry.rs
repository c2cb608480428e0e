use super::score::Score;
use super::tag::Tag;
use crate::error::ValidationError;
use std::collections::HashMap;

/// One tagged record: a tag, an optional score side-channel, and the
/// verbatim body lines of the embedded structure text.
///
/// The body is opaque payload; no chemistry-specific validation is
/// applied to it. Entries are immutable once constructed, except that
/// [`Entry::with_tag`] produces a retagged copy for positional renames.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    tag: Tag,
    score: Option<Score>,
    body: Vec<String>,
}

impl Entry {
    pub fn new(tag: Tag, score: Option<Score>, body: Vec<String>) -> Self {
        Entry { tag, score, body }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn into_tag(self) -> Tag {
        self.tag
    }

    /// Consumes the entry and reissues it under a new tag, body and
    /// score untouched.
    pub fn with_tag(self, tag: Tag) -> Self {
        Entry { tag, ..self }
    }
}

/// An ordered sequence of entries with distinct tags.
///
/// Iteration order is the on-stream order and the semantic order for
/// every derived operation. A tag index (tag → position) is maintained
/// incrementally on every push, giving O(1) amortized lookup without a
/// second pass over the entries.
#[derive(Debug, Default)]
pub struct Container {
    entries: Vec<Entry>,
    index: HashMap<Tag, usize>,
}

impl Container {
    pub fn new() -> Self {
        Container::default()
    }

    /// Appends an entry, rejecting a tag that is already present.
    pub fn push(&mut self, entry: Entry) -> Result<(), ValidationError> {
        if self.index.contains_key(entry.tag().as_str()) {
            return Err(ValidationError::DuplicateTag {
                tag: entry.tag().to_string(),
            });
        }
        self.index.insert(entry.tag().clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    /// Position of a tag in on-stream order.
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.index.get(tag).copied()
    }

    pub fn get(&self, tag: &str) -> Option<&Entry> {
        self.position(tag).map(|i| &self.entries[i])
    }

    /// Tags in container order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.entries.iter().map(Entry::tag)
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from the entries.
        self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Container {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
