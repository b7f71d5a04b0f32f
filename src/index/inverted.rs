//! The inverted index and its conjunctive query evaluator.

use ahash::{AHashMap, AHashSet};

use super::Operator;
use super::posting::{Payload, PostingList};
use crate::data::DocId;
use crate::error::{CallunaError, Result};

/// Mapping from term to posting list.
///
/// Entries are append-only: a term key exists once at least one document
/// contained it, and neither terms nor postings are ever removed.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: AHashMap<String, PostingList>,
}

/// Point-in-time counters for an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of distinct terms.
    pub term_count: usize,
    /// Total postings across all terms.
    pub posting_count: usize,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            terms: AHashMap::new(),
        }
    }

    /// Record that document `doc_id` contains `terms`.
    ///
    /// Duplicate terms within one call collapse to a single posting update,
    /// and each posting starts with an empty payload. Indexing the same
    /// `(doc_id, terms)` pair again changes nothing, so replaying a write is
    /// harmless.
    pub fn index_document<I>(&mut self, doc_id: DocId, terms: I)
    where
        I: IntoIterator<Item = String>,
    {
        let distinct: AHashSet<String> = terms.into_iter().collect();
        for term in distinct {
            self.terms
                .entry(term)
                .or_default()
                .update(doc_id, Payload::new());
        }
    }

    /// Posting list for `term`, or `None` if the term was never indexed.
    pub fn posting_list(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// Mutable posting list for `term`.
    ///
    /// This is the payload enrichment path: callers that compute their own
    /// per-posting metadata (frequencies, ranks) merge it in through
    /// [`PostingList::update`].
    pub fn posting_list_mut(&mut self, term: &str) -> Option<&mut PostingList> {
        self.terms.get_mut(term)
    }

    /// Document IDs containing `term`; empty if the term was never indexed.
    pub fn document_ids_for(&self, term: &str) -> AHashSet<DocId> {
        self.terms
            .get(term)
            .map(PostingList::document_ids)
            .unwrap_or_default()
    }

    /// Evaluate a boolean query over `terms`.
    ///
    /// Only [`Operator::And`] is supported, and the operator is validated
    /// before any term is looked at. An empty `terms` slice matches nothing.
    /// The order of the returned IDs is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `CallunaError::UnsupportedOperator` for operators other than
    /// AND. A rejected query has no side effect on the index.
    pub fn query<S: AsRef<str>>(&self, terms: &[S], operator: Operator) -> Result<Vec<DocId>> {
        match operator {
            Operator::And => {}
            other => {
                return Err(CallunaError::unsupported_operator(format!(
                    "operator {other} is not supported, only AND queries are available"
                )));
            }
        }
        Ok(self.search_and(terms))
    }

    /// Conjunction over the document-ID sets of `terms`.
    ///
    /// Any term with no postings makes the whole intersection empty, so
    /// evaluation stops at the first such term. Otherwise the smallest set
    /// is probed against the rest.
    fn search_and<S: AsRef<str>>(&self, terms: &[S]) -> Vec<DocId> {
        let mut id_sets = Vec::with_capacity(terms.len());
        for term in terms {
            let ids = self.document_ids_for(term.as_ref());
            if ids.is_empty() {
                return Vec::new();
            }
            id_sets.push(ids);
        }

        id_sets.sort_unstable_by_key(|ids| ids.len());
        let Some((smallest, rest)) = id_sets.split_first() else {
            return Vec::new();
        };

        smallest
            .iter()
            .filter(|doc_id| rest.iter().all(|ids| ids.contains(*doc_id)))
            .copied()
            .collect()
    }

    /// Iterate over the indexed terms, in no guaranteed order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Whether the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Current index counters.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            term_count: self.terms.len(),
            posting_count: self.terms.values().map(PostingList::len).sum(),
        }
    }
}
