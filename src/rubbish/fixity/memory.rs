use super::document::Document;
use super::error::{FixityError, FixityResult};
use super::index::{Index, IndexEntry};
use super::query::Query;
use super::{Commit, Fixity, Hash, Version};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory fixity store for tests.
///
/// Uses `RefCell` since rubbish is single-threaded and the `Fixity` trait
/// takes `&self` everywhere.
#[derive(Default)]
pub struct MemFixity {
    versions: RefCell<HashMap<Hash, Version>>,
    index: RefCell<Index>,
    searches: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_search_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemFixity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn set_simulate_search_error(&self, simulate: bool) {
        self.simulate_search_error.set(simulate);
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Number of `search` calls made so far.
    pub fn searches(&self) -> usize {
        self.searches.get()
    }

    /// Number of versions held, including ones superseded in the index.
    pub fn version_count(&self) -> usize {
        self.versions.borrow().len()
    }

    /// The newest version written under `id`, if any.
    pub fn latest(&self, id: &str) -> Option<Version> {
        self.versions
            .borrow()
            .values()
            .filter(|v| v.id == id)
            .max_by_key(|v| v.created_at)
            .cloned()
    }
}

impl Fixity for MemFixity {
    fn write(&self, commit: &Commit, document: Document) -> FixityResult<Hash> {
        if self.simulate_write_error.get() {
            return Err(FixityError::Backend("Simulated write error".to_string()));
        }

        let version = Version::create(commit, document)?;
        let hash = version.hash.clone();
        self.index
            .borrow_mut()
            .insert(IndexEntry::from_document(&version.id, &hash, &version.document));
        self.versions.borrow_mut().insert(hash.clone(), version);
        Ok(hash)
    }

    fn search(&self, query: &Query) -> FixityResult<Vec<Hash>> {
        self.searches.set(self.searches.get() + 1);
        if self.simulate_search_error.get() {
            return Err(FixityError::Backend("Simulated search error".to_string()));
        }
        Ok(self.index.borrow().search(query))
    }

    fn read_hash(&self, hash: &Hash) -> FixityResult<Version> {
        if self.simulate_read_error.get() {
            return Err(FixityError::Backend("Simulated read error".to_string()));
        }
        self.versions
            .borrow()
            .get(hash)
            .cloned()
            .ok_or_else(|| FixityError::NotFound(hash.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixity::field::{Field, Fields};
    use crate::fixity::query::Constraint;
    use serde_json::json;

    fn doc(name: &str) -> Document {
        let mut fields = Fields::new();
        fields.append(Field::full_text("name"));
        let mut doc = Document::new();
        doc.marshal_with_fields("item", &json!({ "name": name }), fields)
            .unwrap();
        doc
    }

    #[test]
    fn write_search_read() {
        let fixity = MemFixity::new();
        let hash = fixity.write(&Commit::with_id("lamp_1"), doc("lamp")).unwrap();

        let found = fixity
            .search(&Query::new().constrain(Constraint::eq("name", "lamp")))
            .unwrap();
        assert_eq!(found, vec![hash.clone()]);

        let version = fixity.read_hash(&hash).unwrap();
        assert_eq!(version.id, "lamp_1");
        assert_eq!(fixity.searches(), 1);
    }

    #[test]
    fn unknown_hash_is_not_found() {
        let fixity = MemFixity::new();
        let err = fixity.read_hash(&Hash::from("nope".to_string())).unwrap_err();
        assert!(matches!(err, FixityError::NotFound(_)));
    }

    #[test]
    fn simulated_errors_surface() {
        let fixity = MemFixity::new();
        fixity.set_simulate_write_error(true);
        assert!(fixity.write(&Commit::default(), doc("x")).is_err());
        assert_eq!(fixity.version_count(), 0);

        fixity.set_simulate_search_error(true);
        assert!(fixity.search(&Query::new()).is_err());
    }
}
