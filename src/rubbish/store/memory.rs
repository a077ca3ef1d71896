use super::{Store, SEARCH_LIMIT};
use crate::error::{Result, RubbishError};
use crate::fixity::index::tokenize;
use crate::model::Item;

/// `Vec`-backed store for testing the command layer.
///
/// Follows the same contract as [`super::whala::Whala`] (derived
/// `<name>_<n>` ids, conjunctive text+tag search, result cap) without any
/// index: every search is a linear scan.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn scan<P>(&self, text: &str, tags: &[String], text_matches: P) -> Result<Vec<Item>>
    where
        P: Fn(&Item, &[String]) -> bool,
    {
        if text.is_empty() && tags.is_empty() {
            return Err(RubbishError::Validation(
                "no queries specified: provide search text or at least one tag".to_string(),
            ));
        }

        let wanted = tokenize(text);
        Ok(self
            .items
            .iter()
            .filter(|item| text.is_empty() || text_matches(*item, wanted.as_slice()))
            .filter(|item| tags.iter().all(|t| item.tags.contains(t)))
            .take(SEARCH_LIMIT)
            .cloned()
            .collect())
    }
}

fn contains_all(haystack: &str, wanted: &[String]) -> bool {
    let tokens = tokenize(haystack);
    !wanted.is_empty() && wanted.iter().all(|w| tokens.contains(w))
}

impl Store for InMemoryStore {
    fn add(&mut self, mut item: Item) -> Result<String> {
        item.validate()?;

        if item.id.is_empty() {
            let existing = self.items.iter().filter(|i| i.name == item.name).count();
            item.id = format!("{}_{}", item.name, existing + 1);
        } else {
            self.items.retain(|i| i.id != item.id);
        }

        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    fn search(&self, text: &str, tags: &[String]) -> Result<Vec<Item>> {
        self.scan(text, tags, |item, wanted| {
            let all = format!("{} {}", item.name, item.description);
            contains_all(&all, wanted)
        })
    }

    fn search_description(&self, text: &str, tags: &[String]) -> Result<Vec<Item>> {
        self.scan(text, tags, |item, wanted| {
            contains_all(&item.description, wanted)
        })
    }
}
