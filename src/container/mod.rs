//! Module for the key-ordered [`AssociativeStore`].
//!
//! An element inside a store is called a [`KeyValueEntry`], and is
//! identified by its key. Keys are compared by value, and a store
//! never holds two entries with equal keys.
//!
//! Entries live in a contiguous array of slots that doubles when it
//! fills up. Removal moves the last entry into the freed slot, so
//! iteration follows *store order*, which only matches insertion
//! order until the first removal.
//!
mod entry;
mod key;
mod store;

pub use entry::KeyValueEntry;
pub use key::StoreKey;
pub use store::AssociativeStore;
pub use store::Iter;
