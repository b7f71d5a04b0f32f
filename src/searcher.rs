//! Read path orchestration.

use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;

use crate::data::{DocId, Document};
use crate::error::Result;
use crate::index::Operator;
use crate::index::inverted::InvertedIndex;
use crate::store::document::DocumentStore;

/// Evaluates queries against the shared index and joins hits back to their
/// stored documents.
pub struct Searcher {
    index: Arc<RwLock<InvertedIndex>>,
    store: Arc<RwLock<DocumentStore>>,
}

impl Searcher {
    /// Create a searcher over shared index and store handles.
    pub fn new(index: Arc<RwLock<InvertedIndex>>, store: Arc<RwLock<DocumentStore>>) -> Self {
        Self { index, store }
    }

    /// Run a boolean query and return the matching document IDs.
    ///
    /// Query terms are case-folded before evaluation. That is the only
    /// normalization applied on the read side; terms indexed through a
    /// tokenizer that rewrites tokens more aggressively must be queried in
    /// their indexed form.
    ///
    /// # Errors
    ///
    /// Returns `CallunaError::UnsupportedOperator` for operators other than
    /// [`Operator::And`].
    pub fn search<S: AsRef<str>>(&self, terms: &[S], operator: Operator) -> Result<Vec<DocId>> {
        let normalized: Vec<String> = terms
            .iter()
            .map(|term| term.as_ref().to_lowercase())
            .collect();
        trace!("query {normalized:?} with operator {operator}");
        self.index.read().query(&normalized, operator)
    }

    /// Fetch the documents behind `doc_ids`, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `CallunaError::NotFound` on the first ID that was never
    /// assigned. IDs produced by [`search`](Self::search) are always
    /// retrievable, since IDs are never invalidated once assigned.
    pub fn retrieve(&self, doc_ids: &[DocId]) -> Result<Vec<Document>> {
        let store = self.store.read();
        doc_ids
            .iter()
            .map(|&doc_id| store.get(doc_id).cloned())
            .collect()
    }
}
