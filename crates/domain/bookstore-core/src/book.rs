use serde::{Deserialize, Serialize};

pub type BookId = String;

/// A catalog entry. `id` is `None` until the book has been persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
    pub title: String,
    pub author_name: String,
    pub genre: String,
    pub price: f64,
    pub published: String,
    pub isbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

impl Book {
    /// Persist a new book under `id`.
    pub fn from_new(id: impl Into<BookId>, new: NewBook) -> Self {
        Self {
            id: Some(id.into()),
            title: new.title,
            author_name: new.author_name,
            genre: new.genre,
            price: new.price,
            published: new.published,
            isbn: new.isbn,
            description: new.description,
            page_count: new.page_count,
            cover_image_url: new.cover_image_url,
        }
    }

    /// Id as a string slice, if the book has a non-empty one.
    pub fn persisted_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Overwrite every field set in `patch`; the id never changes.
    pub fn apply_patch(&mut self, patch: BookPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.author_name {
            self.author_name = v;
        }
        if let Some(v) = patch.genre {
            self.genre = v;
        }
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.published {
            self.published = v;
        }
        if let Some(v) = patch.isbn {
            self.isbn = v;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.page_count.is_some() {
            self.page_count = patch.page_count;
        }
        if patch.cover_image_url.is_some() {
            self.cover_image_url = patch.cover_image_url;
        }
    }
}

/// Book data submitted for creation; the service assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author_name: String,
    pub genre: String,
    pub price: f64,
    pub published: String,
    pub isbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

/// Partial update. Unset fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
    pub published: Option<String>,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub cover_image_url: Option<String>,
}

impl From<&Book> for BookPatch {
    fn from(b: &Book) -> Self {
        Self {
            title: Some(b.title.clone()),
            author_name: Some(b.author_name.clone()),
            genre: Some(b.genre.clone()),
            price: Some(b.price),
            published: Some(b.published.clone()),
            isbn: Some(b.isbn.clone()),
            description: b.description.clone(),
            page_count: b.page_count,
            cover_image_url: b.cover_image_url.clone(),
        }
    }
}
