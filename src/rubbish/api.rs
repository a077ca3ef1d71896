//! # API Facade
//!
//! Thin facade over the command layer, and the single entry point the
//! front ends use. It dispatches to `commands/*.rs` and returns their
//! structured results; it does no I/O and holds no business logic.
//!
//! `RubbishApi<S: Store>` is generic over the backend:
//! - Production: `RubbishApi<Box<dyn Store>>` built by [`crate::config::open_store`]
//! - Testing: `RubbishApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::Store;

pub struct RubbishApi<S: Store> {
    store: S,
}

impl<S: Store> RubbishApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_item(&mut self, request: AddRequest) -> Result<CmdResult> {
        commands::add::run(&mut self.store, request)
    }

    pub fn search_items(
        &self,
        terms: &[String],
        tags: &[String],
        field: SearchField,
    ) -> Result<CmdResult> {
        commands::search::run(&self.store, terms, tags, field)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::add::AddRequest;
pub use commands::search::SearchField;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_then_search_through_the_facade() {
        let mut api = RubbishApi::new(InMemoryStore::new());
        let mut req = AddRequest::new("globe");
        req.allow_no_container = true;
        let added = api.add_item(req).unwrap();
        assert_eq!(added.added_id.as_deref(), Some("globe_1"));

        let found = api
            .search_items(&["globe".to_string()], &[], SearchField::All)
            .unwrap();
        assert_eq!(found.items.len(), 1);
        assert_eq!(found.items[0].id, "globe_1");
        assert_eq!(api.store().items().len(), 1);
    }

    #[test]
    fn boxed_stores_work_behind_the_facade() {
        let store: Box<dyn Store> = Box::new(InMemoryStore::new());
        let mut api = RubbishApi::new(store);
        let mut req = AddRequest::new("map");
        req.allow_no_container = true;
        assert!(api.add_item(req).is_ok());
    }
}
