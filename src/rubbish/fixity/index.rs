//! The query side of fixity.
//!
//! Only fields a document declares are indexed. Each declared field keeps its
//! raw value(s) for `Eq`/`In` matching; full-text fields also keep a sorted,
//! de-duplicated token list for `Fts` matching. Entries are kept in write
//! order (oldest first) and a new write for an id replaces that id's entry.

use super::document::Document;
use super::query::{Constraint, Query, ALL_FIELDS};
use super::Hash;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedValue {
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<String>,
}

impl IndexedValue {
    fn is_full_text(&self) -> bool {
        !self.tokens.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    pub hash: Hash,
    pub fields: BTreeMap<String, IndexedValue>,
}

impl IndexEntry {
    pub fn from_document(id: &str, hash: &Hash, document: &Document) -> Self {
        let mut fields: BTreeMap<String, IndexedValue> = BTreeMap::new();

        for (_, part) in document.parts() {
            for field in &part.fields {
                let raw = match part.json.get(&field.field) {
                    Some(value) => scalar_values(value),
                    None => continue,
                };
                if raw.is_empty() {
                    continue;
                }

                let entry = fields.entry(field.field.clone()).or_default();
                if field.options.full_text_search {
                    for value in &raw {
                        entry.tokens.extend(tokenize(value));
                    }
                    entry.tokens.sort();
                    entry.tokens.dedup();
                }
                entry.values.extend(raw);
            }
        }

        Self {
            id: id.to_string(),
            hash: hash.clone(),
            fields,
        }
    }

    pub fn matches(&self, constraint: &Constraint) -> bool {
        match constraint {
            Constraint::Eq { field, value } | Constraint::In { field, value } => self
                .fields
                .get(field)
                .is_some_and(|v| v.values.iter().any(|candidate| candidate == value)),
            Constraint::Fts { field, text } => {
                let wanted = tokenize(text);
                if wanted.is_empty() {
                    return false;
                }
                let haystack: Vec<&String> = if field == ALL_FIELDS {
                    self.fields
                        .values()
                        .filter(|v| v.is_full_text())
                        .flat_map(|v| v.tokens.iter())
                        .collect()
                } else {
                    match self.fields.get(field) {
                        Some(v) if v.is_full_text() => v.tokens.iter().collect(),
                        _ => return false,
                    }
                };
                wanted.iter().all(|t| haystack.contains(&t))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, dropping any earlier entry for the same id.
    pub fn insert(&mut self, entry: IndexEntry) {
        self.entries.retain(|e| e.id != entry.id);
        self.entries.push(entry);
    }

    pub fn search(&self, query: &Query) -> Vec<Hash> {
        let matching = self
            .entries
            .iter()
            .filter(|e| query.constraints.iter().all(|c| e.matches(c)))
            .skip(query.skip);

        match query.limit {
            Some(limit) => matching.take(limit).map(|e| e.hash.clone()).collect(),
            None => matching.map(|e| e.hash.clone()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn scalar_values(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().flat_map(scalar_values).collect(),
        Value::Object(_) => Vec::new(),
        other => vec![other.to_string()],
    }
}

/// Lowercase alphanumeric runs.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}
