use serde::{Deserialize, Serialize};

/// Identifier of a catalog item, unique within one call
pub type ItemId = u64;

/// A catalog item as the engine sees it
///
/// Only the descriptive text is kept. Fields the surrounding application
/// stores (director, runtime, availability...) are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// long-form editorial critique
    #[serde(default)]
    pub critique: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub genres: Vec<String>,
    /// short description
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// New item with empty text fields
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            critique: String::new(),
            synopsis: String::new(),
            genres: Vec::new(),
            description: String::new(),
        }
    }

    pub fn with_critique(mut self, critique: impl Into<String>) -> Self {
        self.critique = critique.into();
        self
    }

    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Searchable document of this item, see [`build_document`]
    #[inline]
    pub fn document(&self) -> String {
        build_document(self)
    }
}

/// Concatenate an item's text fields into one searchable document
///
/// Field order is fixed: critique, synopsis, genres (space separated),
/// description, joined by single spaces. Longer fields contribute more raw
/// tokens; there is no explicit per-field weight.
pub fn build_document(item: &Item) -> String {
    let genres = item.genres.join(" ");
    [
        item.critique.as_str(),
        item.synopsis.as_str(),
        genres.as_str(),
        item.description.as_str(),
    ]
    .join(" ")
}
