//! Append-only chat transcript.

use crate::protocol::ResponsePayload;

/// One rendered unit in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A message the user submitted.
    User { text: String },
    /// An analysis card for a successful reply.
    Bot { payload: ResponsePayload },
    /// A generic notice for a failed request.
    Error,
}

impl Entry {
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User { .. })
    }

    pub fn is_bot(&self) -> bool {
        matches!(self, Self::Bot { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Ordered list of entries. Entries can be appended and read, never edited
/// or removed.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return a reference to it.
    pub fn push(&mut self, entry: Entry) -> &Entry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Most recently appended entry.
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
