//! Storage for documents.

pub mod document;
