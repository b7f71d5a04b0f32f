//! Posting list storage.

use std::collections::hash_map::Entry;

use ahash::{AHashMap, AHashSet};

use crate::data::{DataValue, DocId};
use crate::error::{CallunaError, Result};

/// Per-posting metadata, keyed by caller-chosen names (e.g. "frequency").
///
/// The engine never reads payloads during query evaluation; they are a slot
/// for callers that want to attach ranking inputs to a posting.
pub type Payload = AHashMap<String, DataValue>;

/// All postings for one term: a mapping from document ID to payload.
///
/// A document ID appears here if and only if the document's tokenized
/// content contained the term at least once. Duplicate occurrences within
/// one document collapse to a single posting.
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    postings: AHashMap<DocId, Payload>,
}

impl PostingList {
    /// Create an empty posting list.
    pub fn new() -> Self {
        Self {
            postings: AHashMap::new(),
        }
    }

    /// Insert or update the posting for `doc_id`.
    ///
    /// A new document is inserted with `payload` as-is. An existing posting
    /// keeps its payload and merges `payload` into it, overwriting keys
    /// present in both (shallow merge, last write wins).
    pub fn update(&mut self, doc_id: DocId, payload: Payload) {
        match self.postings.entry(doc_id) {
            Entry::Occupied(mut entry) => entry.get_mut().extend(payload),
            Entry::Vacant(entry) => {
                entry.insert(payload);
            }
        }
    }

    /// Current set of document IDs with a posting, in no guaranteed order.
    pub fn document_ids(&self) -> AHashSet<DocId> {
        self.postings.keys().copied().collect()
    }

    /// Payload recorded for `doc_id`.
    ///
    /// # Errors
    ///
    /// Returns `CallunaError::NotFound` if the document has no posting in
    /// this list.
    pub fn payload(&self, doc_id: DocId) -> Result<&Payload> {
        self.postings
            .get(&doc_id)
            .ok_or_else(|| CallunaError::not_found(format!("no posting for document {doc_id}")))
    }

    /// Full view of the postings, for introspection and debugging.
    pub fn dump(&self) -> &AHashMap<DocId, Payload> {
        &self.postings
    }

    /// Whether `doc_id` has a posting in this list.
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.postings.contains_key(&doc_id)
    }

    /// Number of postings.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether the list has no postings.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
