//! Index building for event search
//!
//! The index is a normalized shadow of the record collection. It is rebuilt
//! whole whenever the collection changes; [`Indexer`] tracks collection
//! identity so repeated queries against the same collection reuse one build.

pub mod builder;

use std::sync::Arc;

pub use builder::build_index;

use crate::models::{IndexedRecord, Record, SearchField};

/// Memoizes [`build_index`] against the identity of the source collection
#[derive(Debug)]
pub struct Indexer {
    fields: Vec<SearchField>,
    source: Option<Arc<Vec<Record>>>,
    index: Arc<Vec<IndexedRecord>>,
    builds: usize,
}

impl Indexer {
    pub fn new(fields: Vec<SearchField>) -> Self {
        Self { fields, source: None, index: Arc::new(Vec::new()), builds: 0 }
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// Index for `records`, rebuilding only when a different collection is passed.
    ///
    /// Identity is pointer identity of the `Arc`, so a collection with equal
    /// contents but a fresh allocation still triggers a rebuild.
    pub fn index_for(&mut self, records: &Arc<Vec<Record>>) -> Arc<Vec<IndexedRecord>> {
        let unchanged = self.source.as_ref().is_some_and(|source| Arc::ptr_eq(source, records));
        if !unchanged {
            self.index = Arc::new(build_index(records, &self.fields));
            self.source = Some(Arc::clone(records));
            self.builds += 1;
        }
        Arc::clone(&self.index)
    }

    /// Number of index builds performed so far
    pub fn builds(&self) -> usize {
        self.builds
    }
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new(SearchField::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_reused_for_same_collection() {
        let records = Arc::new(vec![Record::new(1, "Jazz"), Record::new(2, "Rock")]);
        let mut indexer = Indexer::default();

        let first = indexer.index_for(&records);
        let second = indexer.index_for(&records);

        assert_eq!(indexer.builds(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_index_rebuilt_for_new_collection() {
        let mut indexer = Indexer::default();
        let first = Arc::new(vec![Record::new(1, "Jazz")]);
        let second = Arc::new(vec![Record::new(1, "Jazz")]);

        indexer.index_for(&first);
        let index = indexer.index_for(&second);

        assert_eq!(indexer.builds(), 2);
        assert_eq!(index.len(), 1);
    }
}
