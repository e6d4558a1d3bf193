use std::fmt;

/// A single key/value pair held by a store slot.
///
/// The key is fixed once the entry exists; only the value can be
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValueEntry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        KeyValueEntry { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value, handing back the old one.
    pub fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for KeyValueEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} : {} }}", self.key, self.value)
    }
}
