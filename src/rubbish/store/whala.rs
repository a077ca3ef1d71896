//! # Whala
//!
//! A [`Store`] over a [`Fixity`] object store. The name is a shortened
//! whereis/fixity combination.
//!
//! ## Ids
//!
//! An item's id is carried by the fixity [`Commit`], never by the stored
//! body. `add` clears it before serializing and the search path copies the
//! version's id back onto each item it deserializes.
//!
//! When the caller gives no id, one is derived from the name as
//! `<name>_<n>`, where `n - 1` is the number of items already indexed under
//! that exact name. The count pages through the index [`PROBE_PAGE_SIZE`]
//! hits at a time and gives up once [`PROBE_CEILING`] matches are seen.
//!
//! The count and the write are separate calls with nothing held in between.
//! Two concurrent adds of the same name can both see the same count and
//! produce the same id, and the later write wins. Callers that need to rule
//! this out must supply their own ids.
//!
//! An explicit id is used as given, with no collision check.

use super::{Store, SEARCH_LIMIT};
use crate::error::{BackendOp, Result, RubbishError};
use crate::fixity::query::ALL_FIELDS;
use crate::fixity::{Commit, Constraint, Constraints, Document, Field, Fields, Fixity, Query};
use crate::model::Item;
use tracing::{debug, info, warn};

/// Key the item body is stored under inside the fixity document.
pub const DOCUMENT_KEY: &str = "item";

pub const PROBE_PAGE_SIZE: usize = 10;
pub const PROBE_CEILING: usize = 100;

pub struct Whala<F: Fixity> {
    fixity: F,
}

impl<F: Fixity> Whala<F> {
    pub fn new(fixity: F) -> Self {
        Self { fixity }
    }

    pub fn fixity(&self) -> &F {
        &self.fixity
    }

    /// Derive `<name>_<n>` by counting existing items with this exact name.
    fn increment_id(&self, name: &str) -> Result<String> {
        let mut count = 0;
        let mut page = 0;

        while count < PROBE_CEILING {
            let query = Query::new()
                .limit(PROBE_PAGE_SIZE)
                .skip(page * PROBE_PAGE_SIZE)
                .constrain(Constraint::eq("name", name));
            let hashes = self
                .fixity
                .search(&query)
                .map_err(RubbishError::backend(BackendOp::Query))?;

            count += hashes.len();
            debug!(name, page, found = hashes.len(), count, "probed name page");

            if hashes.len() < PROBE_PAGE_SIZE {
                break;
            }
            page += 1;
        }

        if count >= PROBE_CEILING {
            warn!(name, count, "refusing to derive id for ambiguous name");
            return Err(RubbishError::AmbiguousName {
                name: name.to_string(),
                count,
            });
        }

        Ok(format!("{}_{}", name, count + 1))
    }

    fn search_with(&self, fts_field: &str, text: &str, tags: &[String]) -> Result<Vec<Item>> {
        let mut constraints = Constraints::new();
        if !text.is_empty() {
            constraints.fts(fts_field, text);
        }
        for tag in tags {
            constraints.in_field("tags", tag.as_str());
        }

        if constraints.is_empty() {
            return Err(RubbishError::Validation(
                "no queries specified: provide search text or at least one tag".to_string(),
            ));
        }

        debug!(field = fts_field, text, ?tags, "searching items");
        let query = Query::new().and(constraints).limit(SEARCH_LIMIT);
        let hashes = self
            .fixity
            .search(&query)
            .map_err(RubbishError::backend(BackendOp::Query))?;

        let mut items = Vec::with_capacity(hashes.len());
        for hash in &hashes {
            let version = self
                .fixity
                .read_hash(hash)
                .map_err(RubbishError::backend(BackendOp::Read))?;

            let mut item: Item = version.document.unmarshal(DOCUMENT_KEY)?;
            item.id = version.id;
            items.push(item);
        }

        Ok(items)
    }
}

/// The fields an item exposes to the index. Empty optional fields are not
/// declared at all.
pub fn item_fields(item: &Item) -> Fields {
    let mut fields = Fields::new();
    fields.append(Field::full_text("name"));
    if !item.container_id.is_empty() {
        fields.append(Field::new("containerId"));
    }
    if !item.description.is_empty() {
        fields.append(Field::full_text("description"));
    }
    if !item.tags.is_empty() {
        fields.append(Field::new("tags"));
    }
    fields
}

impl<F: Fixity> Store for Whala<F> {
    fn add(&mut self, mut item: Item) -> Result<String> {
        item.validate()?;

        let id = if item.id.is_empty() {
            self.increment_id(&item.name)?
        } else {
            std::mem::take(&mut item.id)
        };

        let mut document = Document::new();
        document.marshal_with_fields(DOCUMENT_KEY, &item, item_fields(&item))?;

        let hash = self
            .fixity
            .write(&Commit::with_id(id.as_str()), document)
            .map_err(RubbishError::backend(BackendOp::Write))?;

        info!(id = %id, hash = %hash, "added item");
        Ok(id)
    }

    fn search(&self, text: &str, tags: &[String]) -> Result<Vec<Item>> {
        self.search_with(ALL_FIELDS, text, tags)
    }

    fn search_description(&self, text: &str, tags: &[String]) -> Result<Vec<Item>> {
        self.search_with("description", text, tags)
    }
}
