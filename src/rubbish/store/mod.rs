//! # Storage Layer
//!
//! The [`Store`] trait is everything the front ends need from a backend:
//! add an item and get its id back, and search by text and tags.
//!
//! ## Implementations
//!
//! - [`whala::Whala`]: production store over a [`crate::fixity::Fixity`]
//!   object store. Derives ids, declares indexed fields, and rebuilds items
//!   from search results.
//! - [`memory::InMemoryStore`]: plain `Vec` of items for testing the command
//!   layer without a fixity store.
//!
//! ## Search Semantics
//!
//! Both searches are a conjunction: the text clause (when the text is not
//! empty) AND one membership clause per tag. With no text and no tags there
//! is nothing to constrain, and the call fails with a validation error
//! instead of listing everything. At most [`SEARCH_LIMIT`] items come back;
//! order is whatever the backend returns.

use crate::error::Result;
use crate::model::Item;

pub mod memory;
pub mod whala;

/// Maximum number of items a single search returns.
pub const SEARCH_LIMIT: usize = 25;

/// Basic storing and indexing of inventory items.
pub trait Store {
    /// Persist an item, returning the id it was stored under.
    ///
    /// An empty `item.id` asks the store to derive one.
    fn add(&mut self, item: Item) -> Result<String>;

    /// Full-text search over all searchable fields, filtered by tags.
    fn search(&self, text: &str, tags: &[String]) -> Result<Vec<Item>>;

    /// Like [`Store::search`], but the text only matches descriptions.
    fn search_description(&self, text: &str, tags: &[String]) -> Result<Vec<Item>>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn add(&mut self, item: Item) -> Result<String> {
        (**self).add(item)
    }

    fn search(&self, text: &str, tags: &[String]) -> Result<Vec<Item>> {
        (**self).search(text, tags)
    }

    fn search_description(&self, text: &str, tags: &[String]) -> Result<Vec<Item>> {
        (**self).search_description(text, tags)
    }
}
