//! Directory-backed JSON document store.
//!
//! Each collection is one file, `<name>.json`, holding a JSON array. A
//! missing file is an empty collection. Writes land in a temporary file in
//! the same directory which is then renamed over the old one.
//!
//! The [`Database`] handle is opened once per process and handed to
//! handlers; after [`Database::close`] every operation fails with
//! [`StoreError::Closed`].

use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::StoreError;

/// A stored document addressable by id.
pub trait Document: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> &str;
}

/// Handle to the document directory.
#[derive(Debug)]
pub struct Database {
    // `None` once closed
    root: RwLock<Option<PathBuf>>,
}

impl Database {
    /// Opens (creating if needed) the store at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        info!(dir = %dir.display(), "opened document store");
        Ok(Database {
            root: RwLock::new(Some(dir.to_path_buf())),
        })
    }

    /// Ends the handle's life. Closing twice is harmless.
    pub fn close(&self) -> Result<(), StoreError> {
        let mut root = self.root.write().map_err(|_| StoreError::Poisoned)?;
        if let Some(dir) = root.take() {
            info!(dir = %dir.display(), "closed document store");
        }
        Ok(())
    }

    /// A typed handle to the collection stored in `<name>.json`.
    pub fn collection<T>(&self, name: &'static str) -> Collection<'_, T> {
        Collection {
            db: self,
            name,
            _marker: PhantomData,
        }
    }
}

/// Typed view of one collection.
#[derive(Debug)]
pub struct Collection<'db, T> {
    db: &'db Database,
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<'_, T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Every document, in stored order.
    pub fn all(&self) -> Result<Vec<T>, StoreError> {
        let root = self.db.root.read().map_err(|_| StoreError::Poisoned)?;
        let dir = root.as_ref().ok_or(StoreError::Closed)?;
        read_file(&self.path_in(dir))
    }

    /// The first stored document, if any.
    pub fn first(&self) -> Result<Option<T>, StoreError> {
        Ok(self.all()?.into_iter().next())
    }

    /// Appends `doc`.
    pub fn insert(&self, doc: T) -> Result<T, StoreError> {
        self.modify(|docs| {
            docs.push(doc.clone());
            Some(())
        })?;
        Ok(doc)
    }

    /// Replaces the first document, or inserts `doc` when the collection is
    /// empty.
    pub fn upsert_first(&self, doc: T) -> Result<T, StoreError> {
        self.modify(|docs| {
            match docs.first_mut() {
                Some(first) => *first = doc.clone(),
                None => docs.push(doc.clone()),
            }
            Some(())
        })?;
        Ok(doc)
    }

    fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.name))
    }

    /// Reads, edits and writes back the collection under the write lock.
    ///
    /// `edit` returns `None` to skip the write.
    fn modify<R>(
        &self,
        edit: impl FnOnce(&mut Vec<T>) -> Option<R>,
    ) -> Result<Option<R>, StoreError> {
        let root = self.db.root.write().map_err(|_| StoreError::Poisoned)?;
        let dir = root.as_ref().ok_or(StoreError::Closed)?;
        let path = self.path_in(dir);

        let mut docs: Vec<T> = read_file(&path)?;
        let Some(result) = edit(&mut docs) else {
            return Ok(None);
        };
        write_file(dir, &path, &docs)?;
        debug!(collection = self.name, documents = docs.len(), "wrote collection");
        Ok(Some(result))
    }
}

impl<T: Document> Collection<'_, T> {
    /// The document with `id`.
    pub fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.all()?.into_iter().find(|doc| doc.id() == id))
    }

    /// Applies `change` to the document with `id` and stores it.
    ///
    /// Returns the updated document, or `None` if no document has `id`.
    pub fn update(&self, id: &str, change: impl FnOnce(&mut T)) -> Result<Option<T>, StoreError> {
        self.modify(|docs| {
            let doc = docs.iter_mut().find(|doc| doc.id() == id)?;
            change(doc);
            Some(doc.clone())
        })
    }

    /// Removes the document with `id`. Returns whether one was removed.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        self.modify(|docs| {
            let index = docs.iter().position(|doc| doc.id() == id)?;
            docs.remove(index);
            Some(())
        })
        .map(|removed| removed.is_some())
    }
}

fn read_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file<T: Serialize>(dir: &Path, path: &Path, docs: &[T]) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(docs).map_err(StoreError::Encode)?;
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(&body).map_err(io_err)?;
    tmp.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}
