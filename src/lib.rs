pub mod category;
pub mod container;
pub mod error;
pub mod mappings;
pub mod page;

pub use category::Category;
pub use container::AssociativeStore;
pub use error::{NavigationError, StoreError};
pub use mappings::{Activation, NavigationMappings};
pub use page::{Page, PageKind};

#[cfg(test)]
mod test;
#[cfg(test)]
mod testing;
