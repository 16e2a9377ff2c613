//! The post record.

use std::borrow::Cow;

use pillar_core::ContentItem;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One post from the posts file.
///
/// Wraps the record's JSON object as read, so fields this crate never touches keep their
/// values and position through a rewrite. String accessors read missing, `null` and non-string
/// fields as `""`; passes check [`Post::holds_non_text`] before writing over a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post {
    /// The record's fields in file order.
    fields: Map<String, Value>,
}

impl Post {
    /// Field holding the post's identifier.
    pub const ID: &'static str = "id";
    /// Field holding the title.
    pub const TITLE: &'static str = "title";
    /// Field holding the slug.
    pub const SLUG: &'static str = "slug";
    /// Field holding the markdown body.
    pub const CONTENT: &'static str = "content";
    /// Field holding the category label.
    pub const CATEGORY: &'static str = "category";

    /// Creates a post from the given title, slug and body.
    pub fn new(title: &str, slug: &str, content: &str) -> Self {
        let mut post = Self::default();
        post.set(Self::TITLE, title);
        post.set(Self::SLUG, slug);
        post.set(Self::CONTENT, content);
        post
    }

    /// Returns the identifier; numeric ids read as their decimal text.
    pub fn id(&self) -> Cow<'_, str> {
        match self.fields.get(Self::ID) {
            Some(Value::Number(n)) => Cow::Owned(n.to_string()),
            _ => Cow::Borrowed(self.text(Self::ID)),
        }
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        self.text(Self::TITLE)
    }

    /// Returns the slug.
    pub fn slug(&self) -> &str {
        self.text(Self::SLUG)
    }

    /// Returns the markdown body.
    pub fn content(&self) -> &str {
        self.text(Self::CONTENT)
    }

    /// Returns the category label.
    pub fn category(&self) -> &str {
        self.text(Self::CATEGORY)
    }

    /// Replaces the slug.
    pub fn set_slug(&mut self, slug: &str) {
        self.set(Self::SLUG, slug);
    }

    /// Replaces the markdown body.
    pub fn set_content(&mut self, content: String) {
        self.fields
            .insert(Self::CONTENT.to_string(), Value::String(content));
    }

    /// Replaces the category label.
    pub fn set_category(&mut self, category: &str) {
        self.set(Self::CATEGORY, category);
    }

    /// True when `field` is present with a value that is neither a string nor `null`.
    ///
    /// Such a field reads as `""` but is not empty, and must not be overwritten.
    pub fn holds_non_text(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|v| !v.is_string() && !v.is_null())
    }

    /// Returns a raw field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Reads a string field, `""` when absent or not a string.
    fn text(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Sets a string field. An existing key keeps its position.
    fn set(&mut self, field: &str, value: &str) {
        self.fields
            .insert(field.to_string(), Value::String(value.to_string()));
    }
}

impl ContentItem for Post {
    fn title(&self) -> &str {
        Self::title(self)
    }

    fn slug(&self) -> &str {
        Self::slug(self)
    }

    fn body(&self) -> &str {
        self.content()
    }
}
