use crate::container::AssociativeStore;
use crate::error::{NavigationError, Result};
use crate::page::{Page, PageKind};
use log::warn;

/// A named group of tiles, mapping image keys to text.
///
/// For an ordinary category the text is what gets spoken. The home
/// page is also a `Category`, but its values are captions of other
/// categories.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    kind: PageKind,
    items: AssociativeStore<String, String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            name: name.into(),
            kind: PageKind::Category,
            items: AssociativeStore::new(),
        }
    }

    pub fn home() -> Self {
        Category {
            name: String::new(),
            kind: PageKind::Home,
            items: AssociativeStore::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binds `text` to `image_key`, replacing any previous text.
    ///
    /// An empty key is logged and dropped.
    pub fn add_item(&mut self, image_key: impl Into<String>, text: impl Into<String>) {
        if let Err(err) = self.items.set(image_key.into(), text.into()) {
            warn!("category `{}`: {err}; item dropped", self.name);
        }
    }

    pub fn image_keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn get_text(&self, image_key: &str) -> Option<&str> {
        self.items.get(image_key).ok().map(String::as_str)
    }

    pub fn has_image(&self, image_key: &str) -> bool {
        self.items.has_key(image_key)
    }

    pub fn select(&self, image_key: &str) -> Result<&str> {
        self.get_text(image_key)
            .ok_or_else(|| NavigationError::element_not_found(image_key))
    }

    pub fn items(&self) -> &AssociativeStore<String, String> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.size()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Page for Category {
    fn kind(&self) -> PageKind {
        self.kind
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn image_keys(&self) -> Vec<String> {
        Category::image_keys(self).map(str::to_string).collect()
    }

    fn select(&self, image_key: &str) -> Result<&str> {
        Category::select(self, image_key)
    }
}
