pub type Result<T, E = NavigationError> = core::result::Result<T, E>;

/// Failures raised by [`AssociativeStore`](crate::container::AssociativeStore).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid key: keys must not be null or empty")]
    InvalidKey,
    #[error("key not found")]
    KeyNotFound,
}

/// Failures surfaced by [`NavigationMappings`](crate::mappings::NavigationMappings).
#[derive(thiserror::Error, Debug)]
pub enum NavigationError {
    /// The key is not on the page currently shown.
    #[error("no element `{key}` on the current page")]
    ElementNotFound { key: String },
    /// The home page lists the key but the registry does not hold it.
    #[error("category `{key}` is listed on the home page but is not registered")]
    CategoryNotFound { key: String },
    #[error("invalid key: keys must not be null or empty")]
    InvalidKey,
    #[error("malformed source at line {line}: {reason}")]
    MalformedSource { line: usize, reason: String },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl NavigationError {
    pub fn element_not_found(key: impl Into<String>) -> Self {
        Self::ElementNotFound { key: key.into() }
    }
    pub fn category_not_found(key: impl Into<String>) -> Self {
        Self::CategoryNotFound { key: key.into() }
    }
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            line,
            reason: reason.into(),
        }
    }
}
