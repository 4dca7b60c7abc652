pub mod item;

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub use item::{build_document, Item, ItemId};

/// An in-memory list of items with unique ids
///
/// The recommender only needs a slice of items; this type exists for callers
/// that read the catalog from JSON (the CLI, tests, benches).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(Error::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of items
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Like [`Catalog::get`] but an unknown id is an error
    pub fn require(&self, id: ItemId) -> Result<&Item> {
        self.get(id).ok_or(Error::NotFound(id))
    }

    /// Every item except `id`, in catalog order
    pub fn without(&self, id: ItemId) -> Vec<&Item> {
        self.items.iter().filter(|item| item.id != id).collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<Item>> for Catalog {
    type Error = Error;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        Self::new(items)
    }
}

impl From<Catalog> for Vec<Item> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}
