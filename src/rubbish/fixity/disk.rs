use super::document::Document;
use super::error::{FixityError, FixityResult};
use super::index::{Index, IndexEntry};
use super::query::Query;
use super::{Commit, Fixity, Hash, Version};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const STORE_DIR: &str = "store";
const INDEX_DIR: &str = "index";
const INDEX_FILE: &str = "index.json";

/// Fixity store on the local filesystem.
///
/// ```text
/// <root>/
/// ├── store/{hash}.json    # One file per version
/// └── index/index.json     # Field index over the newest version of each id
/// ```
///
/// Every file is written to a temp name and renamed into place.
pub struct DiskFixity {
    root: PathBuf,
}

impl DiskFixity {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn store_dir(&self) -> PathBuf {
        self.root.join(STORE_DIR)
    }

    fn index_dir(&self) -> PathBuf {
        self.root.join(INDEX_DIR)
    }

    fn version_path(&self, hash: &Hash) -> PathBuf {
        self.store_dir().join(format!("{}.json", hash))
    }

    fn ensure_dir(&self, path: &Path) -> FixityResult<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn write_atomic(&self, dir: &Path, target: &Path, bytes: &[u8]) -> FixityResult<()> {
        self.ensure_dir(dir)?;
        let tmp = dir.join(format!(".write-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, target)?;
        Ok(())
    }

    fn load_index(&self) -> FixityResult<Index> {
        let path = self.index_dir().join(INDEX_FILE);
        if !path.exists() {
            return Ok(Index::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_index(&self, index: &Index) -> FixityResult<()> {
        let dir = self.index_dir();
        let bytes = serde_json::to_vec_pretty(index)?;
        self.write_atomic(&dir, &dir.join(INDEX_FILE), &bytes)
    }
}

impl Fixity for DiskFixity {
    fn write(&self, commit: &Commit, document: Document) -> FixityResult<Hash> {
        let version = Version::create(commit, document)?;

        let dir = self.store_dir();
        let bytes = serde_json::to_vec_pretty(&version)?;
        self.write_atomic(&dir, &self.version_path(&version.hash), &bytes)?;

        let mut index = self.load_index()?;
        index.insert(IndexEntry::from_document(
            &version.id,
            &version.hash,
            &version.document,
        ));
        self.save_index(&index)?;

        debug!(id = %version.id, hash = %version.hash, "wrote version");
        Ok(version.hash)
    }

    fn search(&self, query: &Query) -> FixityResult<Vec<Hash>> {
        let index = self.load_index()?;
        Ok(index.search(query))
    }

    fn read_hash(&self, hash: &Hash) -> FixityResult<Version> {
        let content = match fs::read_to_string(self.version_path(hash)) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FixityError::NotFound(hash.clone()))
            }
            Err(e) => return Err(FixityError::Io(e)),
        };

        let version: Version = serde_json::from_str(&content)?;
        if &version.hash != hash {
            return Err(FixityError::Corrupt {
                hash: hash.clone(),
                reason: format!("file records hash {}", version.hash),
            });
        }
        version.verify()?;
        Ok(version)
    }
}
