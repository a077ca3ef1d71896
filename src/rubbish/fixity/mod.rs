//! # Fixity
//!
//! A small content-addressed document store with a field index. It is the
//! generic layer the inventory store is built on: it knows nothing about
//! items, only about keyed JSON documents, the fields they declare, and
//! versions named by the BLAKE3 hash of their contents.
//!
//! ## Model
//!
//! - A [`Commit`] names the id a write belongs to. Several versions may share
//!   an id; the index only tracks the newest one.
//! - A [`Version`] is immutable once written and is addressed by its [`Hash`].
//! - Queries ([`query::Query`]) run against the index and return hashes,
//!   which are then read back with [`Fixity::read_hash`].
//!
//! ## Implementations
//!
//! - [`memory::MemFixity`]: in-memory, for tests. Can simulate failures.
//! - [`disk::DiskFixity`]: versions as JSON files plus a JSON index file.
//!
//! There is no compare-and-swap on ids. Two writers that pick the same id
//! both succeed and the later one wins in the index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod disk;
pub mod document;
pub mod error;
pub mod field;
pub mod index;
pub mod memory;
pub mod query;

pub use document::{Document, DocumentPart};
pub use error::{FixityError, FixityResult};
pub use field::{Field, FieldOptions, Fields};
pub use query::{Constraint, Constraints, Query};

/// Hex BLAKE3 digest naming a stored version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash(String);

impl Hash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Hash {
    fn from(s: String) -> Self {
        Hash(s)
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a write goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    /// Id to store the version under. `None` stores it under its own hash.
    pub id: Option<String>,
}

impl Commit {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    pub hash: Hash,
    pub document: Document,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct HashedContent<'a> {
    id: Option<&'a str>,
    document: &'a Document,
    created_at: &'a DateTime<Utc>,
}

impl Version {
    /// Build the version a commit would produce, computing its hash.
    pub fn create(commit: &Commit, document: Document) -> FixityResult<Self> {
        let created_at = Utc::now();
        let hash = compute_hash(commit.id.as_deref(), &document, &created_at)?;
        let id = commit.id.clone().unwrap_or_else(|| hash.to_string());
        Ok(Self {
            id,
            hash,
            document,
            created_at,
        })
    }

    /// Check that the stored content still hashes to `self.hash`.
    pub fn verify(&self) -> FixityResult<()> {
        let id = if self.id == self.hash.as_str() {
            None
        } else {
            Some(self.id.as_str())
        };
        let computed = compute_hash(id, &self.document, &self.created_at)?;
        if computed != self.hash {
            return Err(FixityError::Corrupt {
                hash: self.hash.clone(),
                reason: format!("content hashes to {}", computed),
            });
        }
        Ok(())
    }
}

fn compute_hash(
    id: Option<&str>,
    document: &Document,
    created_at: &DateTime<Utc>,
) -> FixityResult<Hash> {
    let bytes = serde_json::to_vec(&HashedContent {
        id,
        document,
        created_at,
    })?;
    Ok(Hash(blake3::hash(&bytes).to_hex().to_string()))
}

/// The storage and search primitives the inventory store is written against.
///
/// Methods take `&self`; implementations manage their own interior state.
pub trait Fixity {
    /// Persist `document` under the commit's id and index its declared fields.
    fn write(&self, commit: &Commit, document: Document) -> FixityResult<Hash>;

    /// Run a query against the index, returning matching version hashes.
    fn search(&self, query: &Query) -> FixityResult<Vec<Hash>>;

    /// Read a version back by hash.
    fn read_hash(&self, hash: &Hash) -> FixityResult<Version>;
}

impl<F: Fixity + ?Sized> Fixity for &F {
    fn write(&self, commit: &Commit, document: Document) -> FixityResult<Hash> {
        (**self).write(commit, document)
    }

    fn search(&self, query: &Query) -> FixityResult<Vec<Hash>> {
        (**self).search(query)
    }

    fn read_hash(&self, hash: &Hash) -> FixityResult<Version> {
        (**self).read_hash(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_without_id_is_named_by_its_hash() {
        let v = Version::create(&Commit::default(), Document::new()).unwrap();
        assert_eq!(v.id, v.hash.to_string());
        assert_eq!(v.hash.as_str().len(), 64);
        v.verify().unwrap();
    }

    #[test]
    fn tampered_version_fails_verification() {
        let mut v = Version::create(&Commit::with_id("box_1"), Document::new()).unwrap();
        v.verify().unwrap();

        v.id = "box_2".to_string();
        assert!(matches!(v.verify(), Err(FixityError::Corrupt { .. })));
    }
}
