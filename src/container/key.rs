/// A type usable as the key of an [`AssociativeStore`](super::AssociativeStore).
///
/// Some key types have a value that stands for "no key at all" (the
/// empty string, `None`). Such keys are rejected by `set` and never
/// found by `get`.
pub trait StoreKey: PartialEq {
    fn is_null(&self) -> bool {
        false
    }
}

impl StoreKey for String {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl StoreKey for str {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl StoreKey for &str {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq> StoreKey for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

mod simple_key_impls {
    use super::StoreKey;

    impl StoreKey for i32 {}
    impl StoreKey for i64 {}
    impl StoreKey for u32 {}
    impl StoreKey for u64 {}
    impl StoreKey for usize {}
    impl StoreKey for char {}
    impl StoreKey for bool {}
}
