use std::collections::BTreeSet;
use std::fmt;

use crate::handle::{BlobHandle, BlobHandles};

/// A set of blob handles.
///
/// Backed by an ordered set, so iteration and [`BlobSet::list`] follow the
/// handle order without an extra sort.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlobSet(BTreeSet<BlobHandle>);

impl BlobSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a handle. Returns `false` if it was already present.
    pub fn insert(&mut self, handle: BlobHandle) -> bool {
        self.0.insert(handle)
    }

    /// Returns `true` if the set contains `handle`.
    pub fn has(&self, handle: &BlobHandle) -> bool {
        self.0.contains(handle)
    }

    /// Remove a handle. Returns `false` if it was not present.
    pub fn delete(&mut self, handle: &BlobHandle) -> bool {
        self.0.remove(handle)
    }

    /// Number of handles in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no handles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add every handle from `other` to this set.
    pub fn merge(&mut self, other: &BlobSet) {
        self.0.extend(other.0.iter().copied());
    }

    /// Handles in both sets.
    pub fn intersect(&self, other: &BlobSet) -> BlobSet {
        Self(self.0.intersection(&other.0).copied().collect())
    }

    /// Handles in this set but not in `other`.
    pub fn sub(&self, other: &BlobSet) -> BlobSet {
        Self(self.0.difference(&other.0).copied().collect())
    }

    /// All handles, sorted.
    pub fn list(&self) -> BlobHandles {
        self.0.iter().copied().collect()
    }

    /// Iterate over the handles in handle order.
    pub fn iter(&self) -> impl Iterator<Item = &BlobHandle> {
        self.0.iter()
    }
}

impl FromIterator<BlobHandle> for BlobSet {
    fn from_iter<I: IntoIterator<Item = BlobHandle>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<BlobHandle> for BlobSet {
    fn extend<I: IntoIterator<Item = BlobHandle>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl fmt::Display for BlobSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, handle) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{handle}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::BlobKind;
    use tessera_types::Id;

    fn data(name: &[u8]) -> BlobHandle {
        BlobHandle::new(Id::hash(name), BlobKind::Data)
    }

    fn tree(name: &[u8]) -> BlobHandle {
        BlobHandle::new(Id::hash(name), BlobKind::Tree)
    }

    #[test]
    fn insert_has_delete() {
        let mut set = BlobSet::new();
        assert!(set.is_empty());
        assert!(set.insert(data(b"a")));
        assert!(!set.insert(data(b"a")));
        assert!(set.has(&data(b"a")));
        assert!(!set.has(&tree(b"a")));
        assert_eq!(set.len(), 1);

        assert!(set.delete(&data(b"a")));
        assert!(!set.delete(&data(b"a")));
        assert!(set.is_empty());
    }

    #[test]
    fn same_id_different_kind_are_distinct() {
        let set: BlobSet = [data(b"x"), tree(b"x")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn merge_sub_intersect() {
        let mut left: BlobSet = [data(b"a"), data(b"b")].into_iter().collect();
        let right: BlobSet = [data(b"b"), tree(b"c")].into_iter().collect();

        assert_eq!(left.intersect(&right).list().into_inner(), vec![data(b"b")]);
        assert_eq!(left.sub(&right).list().into_inner(), vec![data(b"a")]);

        left.merge(&right);
        assert_eq!(left.len(), 3);
        assert!(left.has(&tree(b"c")));
    }

    #[test]
    fn list_is_sorted() {
        let handles = [tree(b"q"), data(b"r"), data(b"s"), tree(b"t"), data(b"q")];
        let set: BlobSet = handles.into_iter().collect();

        let mut expected: BlobHandles = handles.into_iter().collect();
        expected.sort();
        assert_eq!(set.list(), expected);
    }

    #[test]
    fn display_uses_sorted_order() {
        let set: BlobSet = [tree(b"b"), data(b"a")].into_iter().collect();
        let list = set.list();
        let expected = format!("{{{}, {}}}", list[0], list[1]);
        assert_eq!(set.to_string(), expected);
        assert_eq!(BlobSet::new().to_string(), "{}");
    }
}
