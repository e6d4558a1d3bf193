use crate::container::{KeyValueEntry, StoreKey};
use crate::error::StoreError;
use std::borrow::Borrow;
use std::fmt;

/// An insertion-ordered map from unique keys to values, backed by a
/// growable array of slots and searched linearly.
///
/// The first `count` slots are populated; the rest are spare capacity.
/// When every slot is taken the array doubles before the next insert.
#[derive(Debug)]
pub struct AssociativeStore<K, V> {
    slots: Vec<Option<KeyValueEntry<K, V>>>,
    count: usize,
}

impl<K: StoreKey, V> Default for AssociativeStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StoreKey, V> AssociativeStore<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), || None);
        AssociativeStore { slots, count: 0 }
    }

    /// Associates `value` with `key`, returning the value it replaced.
    ///
    /// An existing entry keeps its position in store order.
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>, StoreError> {
        if key.is_null() {
            return Err(StoreError::InvalidKey);
        }
        if let Ok(index) = self.find::<K>(&key) {
            if let Some(entry) = self.slots[index].as_mut() {
                return Ok(Some(entry.replace_value(value)));
            }
        }
        if self.count == self.slots.len() {
            self.expand();
        }
        self.slots[self.count] = Some(KeyValueEntry::new(key, value));
        self.count += 1;
        Ok(None)
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V, StoreError>
    where
        K: Borrow<Q>,
        Q: StoreKey + ?Sized,
    {
        let index = self.find(key)?;
        self.slots[index]
            .as_ref()
            .map(KeyValueEntry::value)
            .ok_or(StoreError::KeyNotFound)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, StoreError>
    where
        K: Borrow<Q>,
        Q: StoreKey + ?Sized,
    {
        let index = self.find(key)?;
        self.slots[index]
            .as_mut()
            .map(KeyValueEntry::value_mut)
            .ok_or(StoreError::KeyNotFound)
    }

    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: StoreKey + ?Sized,
    {
        self.find(key).is_ok()
    }

    /// Removes `key` and returns its value. The last entry moves into
    /// the freed slot, so store order changes for that one entry.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: StoreKey + ?Sized,
    {
        let index = self.find(key).ok()?;
        let last = self.count - 1;
        self.slots.swap(index, last);
        self.count = last;
        self.slots[last].take().map(|entry| entry.into_pair().1)
    }

    /// Position of `key` in store order.
    ///
    /// An empty slot inside the populated prefix ends the search with
    /// `KeyNotFound`.
    pub fn find<Q>(&self, key: &Q) -> Result<usize, StoreError>
    where
        K: Borrow<Q>,
        Q: StoreKey + ?Sized,
    {
        if key.is_null() {
            return Err(StoreError::KeyNotFound);
        }
        for (index, slot) in self.slots[..self.count].iter().enumerate() {
            match slot {
                None => return Err(StoreError::KeyNotFound),
                Some(entry) if Borrow::<Q>::borrow(entry.key()) == key => return Ok(index),
                Some(_) => {}
            }
        }
        Err(StoreError::KeyNotFound)
    }
}

impl<K, V> AssociativeStore<K, V> {
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots[..self.count].iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(KeyValueEntry::key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(KeyValueEntry::value)
    }

    fn expand(&mut self) {
        let capacity = self.slots.len() * 2;
        self.slots.resize_with(capacity, || None);
    }
}

impl<K: Clone, V: Clone> Clone for AssociativeStore<K, V> {
    /// Copies every entry into a store sized from the default capacity.
    fn clone(&self) -> Self {
        let mut slots = Vec::new();
        let mut capacity = Self::DEFAULT_CAPACITY;
        while capacity < self.count {
            capacity *= 2;
        }
        slots.resize_with(capacity, || None);
        let mut count = 0;
        for (slot, entry) in slots.iter_mut().zip(self.iter()) {
            *slot = Some(entry.clone());
            count += 1;
        }
        AssociativeStore { slots, count }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssociativeStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", entry.key(), entry.value())?;
        }
        write!(f, " }}")
    }
}

/// Iterator over the live entries of an [`AssociativeStore`] in store order.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Option<KeyValueEntry<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a KeyValueEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len()))
    }
}

impl<'a, K, V> IntoIterator for &'a AssociativeStore<K, V> {
    type Item = &'a KeyValueEntry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
