use crate::error::Result;

/// Which role a page plays in the two-level board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// The entry page. Its values are category captions.
    Home,
    /// A page of leaf items. Its values are spoken text.
    Category,
}

/// The capabilities every page of the board exposes, so navigation
/// code can treat the home page and category pages alike.
pub trait Page {
    fn kind(&self) -> PageKind;

    /// The label shown for this page; empty for the home page.
    fn label(&self) -> &str;

    /// Keys of the tiles on this page, in store order.
    fn image_keys(&self) -> Vec<String>;

    /// The text bound to `image_key`, or `ElementNotFound`.
    fn select(&self, image_key: &str) -> Result<&str>;
}
