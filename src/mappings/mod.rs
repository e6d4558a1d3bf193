//! Two-level navigation over a board of tiles.
//!
//! The board starts on the home page, whose tiles are categories.
//! Selecting a category tile moves into that category; selecting a
//! tile inside a category yields the text to speak and stays put.
//! [`NavigationMappings::reset`] goes back home from anywhere.

pub mod source;

use crate::category::Category;
use crate::container::AssociativeStore;
use crate::error::{NavigationError, Result};
use crate::page::Page;
use log::trace;
use source::SourceLine;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Current {
    Home,
    /// Key of a registered category.
    Category(String),
}

/// What selecting a tile did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A home tile was selected and the board moved into its category.
    /// Nothing should be spoken.
    EnteredCategory { caption: String },
    /// A leaf tile was selected; `text` is meant to be spoken.
    Speak { text: String },
}

impl Activation {
    pub fn text(&self) -> &str {
        match self {
            Activation::EnteredCategory { caption } => caption,
            Activation::Speak { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Activation::EnteredCategory { caption } => caption,
            Activation::Speak { text } => text,
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, Activation::EnteredCategory { .. })
    }
}

/// The home page, the categories it leads to, and where the user
/// currently is.
///
/// Every key on the home page is also a key of the registry, and the
/// current page is either home or one of the registered categories.
#[derive(Debug, Clone)]
pub struct NavigationMappings {
    categories: AssociativeStore<String, Category>,
    home: Category,
    current: Current,
}

impl Default for NavigationMappings {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationMappings {
    /// An empty board: a home page with no categories.
    pub fn new() -> Self {
        NavigationMappings {
            categories: AssociativeStore::new(),
            home: Category::home(),
            current: Current::Home,
        }
    }

    /// Loads a board from `path`.
    ///
    /// A missing file is reported and yields an empty board. Any other
    /// I/O failure or a malformed line fails the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let mappings = Self::from_reader(BufReader::new(file))?;
                debug!(
                    path = %path.display(),
                    categories = mappings.categories.size(),
                    "loaded mappings"
                );
                Ok(mappings)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "mappings file not found, starting empty");
                Ok(Self::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_source(source: &str) -> Result<Self> {
        Self::from_reader(source.as_bytes())
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut mappings = Self::new();
        let mut populating: Option<String> = None;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let parsed = source::parse_line(line_no, &line)?;
            trace!("line {line_no}: {parsed:?}");
            match parsed {
                SourceLine::Blank => {}
                SourceLine::Category { key, caption } => {
                    mappings.declare_category(key, caption, Category::new(key))?;
                    populating = Some(key.to_string());
                }
                SourceLine::Item { key, text } => {
                    let Some(category_key) = populating.as_deref() else {
                        return Err(NavigationError::malformed(
                            line_no,
                            "item line before any category line",
                        ));
                    };
                    mappings
                        .categories
                        .get_mut(category_key)
                        .map_err(|_| NavigationError::category_not_found(category_key))?
                        .add_item(key, text);
                }
            }
        }
        Ok(mappings)
    }

    /// Registers `category` under `key` and lists it on the home page
    /// with `caption`. An existing category with that key is replaced.
    fn declare_category(&mut self, key: &str, caption: &str, category: Category) -> Result<()> {
        self.categories
            .set(key.to_string(), category)
            .map_err(|_| NavigationError::InvalidKey)?;
        self.home.add_item(key, caption);
        Ok(())
    }

    pub fn is_on_home(&self) -> bool {
        self.current == Current::Home
    }

    /// Key of the category currently shown, `None` on the home page.
    pub fn current_key(&self) -> Option<&str> {
        match &self.current {
            Current::Home => None,
            Current::Category(key) => Some(key.as_str()),
        }
    }

    fn current_category(&self) -> Result<&Category> {
        match &self.current {
            Current::Home => Ok(&self.home),
            Current::Category(key) => self
                .categories
                .get(key.as_str())
                .map_err(|_| NavigationError::category_not_found(key.as_str())),
        }
    }

    pub fn current_page(&self) -> Result<&dyn Page> {
        let page: &dyn Page = self.current_category()?;
        Ok(page)
    }

    /// Name of the current category; empty on the home page.
    pub fn current_category_label(&self) -> Result<&str> {
        Ok(self.current_category()?.name())
    }

    /// Keys of the tiles on the current page, in store order.
    pub fn visible_keys(&self) -> Result<Vec<String>> {
        Ok(self.current_page()?.image_keys())
    }

    /// Selects the tile `key` on the current page.
    ///
    /// On the home page this moves into the chosen category. Inside a
    /// category the page does not change.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn activate(&mut self, key: &str) -> Result<Activation> {
        if self.is_on_home() {
            let caption = self.home.select(key)?.to_string();
            if !self.categories.has_key(key) {
                return Err(NavigationError::category_not_found(key));
            }
            self.current = Current::Category(key.to_string());
            return Ok(Activation::EnteredCategory { caption });
        }
        let text = self.current_category()?.select(key)?.to_string();
        Ok(Activation::Speak { text })
    }

    /// Like [`activate`](Self::activate), returning only the text.
    pub fn select(&mut self, key: &str) -> Result<String> {
        self.activate(key).map(Activation::into_text)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.current = Current::Home;
    }

    /// On the home page, creates a category named `text` under `key`
    /// and moves into it. Inside a category, adds the item to it.
    ///
    /// Keys must be non-empty and free of whitespace, so the board can
    /// be written out and loaded back.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, key: &str, text: &str) -> Result<()> {
        if !source::is_valid_key(key) {
            return Err(NavigationError::InvalidKey);
        }
        if self.is_on_home() {
            self.declare_category(key, text, Category::new(text))?;
            self.current = Current::Category(key.to_string());
            return Ok(());
        }
        self.current_category_mut()?.add_item(key, text);
        Ok(())
    }

    fn current_category_mut(&mut self) -> Result<&mut Category> {
        match &self.current {
            Current::Home => Ok(&mut self.home),
            Current::Category(key) => self
                .categories
                .get_mut(key.as_str())
                .map_err(|_| NavigationError::category_not_found(key.as_str())),
        }
    }

    pub fn home(&self) -> &Category {
        &self.home
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.get(key).ok()
    }

    /// Registered categories with their keys, in store order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories
            .iter()
            .map(|entry| (entry.key().as_str(), entry.value()))
    }

    /// Writes every category line followed by its item lines.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for (key, category) in self.categories() {
            let caption = self.home.get_text(key).unwrap_or_default();
            source::write_category(writer, key, caption)?;
            for item in category.items() {
                source::write_item(writer, item.key(), item.value())?;
            }
        }
        Ok(())
    }

    /// Replaces the contents of `path` with this board.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        debug!(path = %path.display(), "wrote mappings");
        Ok(())
    }

    pub fn to_source(&self) -> String {
        let mut buf = Vec::new();
        // writes into a Vec cannot fail
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
