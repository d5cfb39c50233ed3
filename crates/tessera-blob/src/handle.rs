use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tessera_types::Id;

use crate::kind::BlobKind;

/// Identifies a blob of a given kind, independent of where it is stored.
///
/// A data blob and a tree blob with the same id are different blobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlobHandle {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: BlobKind,
}

impl BlobHandle {
    /// Create a handle for the blob `id` of the given kind.
    pub fn new(id: Id, kind: BlobKind) -> Self {
        Self { id, kind }
    }
}

/// Unsigned byte-wise comparison of the ids, then the kind ordinal.
///
/// Pack manifests and diffs depend on this order being reproducible across
/// runs and implementations.
impl Ord for BlobHandle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .as_bytes()
            .cmp(other.id.as_bytes())
            .then_with(|| self.kind.ordinal().cmp(&other.kind.ordinal()))
    }
}

impl PartialOrd for BlobHandle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BlobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}/{}>", self.kind, self.id.short_hex())
    }
}

/// An ordered list of handles.
///
/// Order is whatever the caller built until [`BlobHandles::sort`] is called.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobHandles(Vec<BlobHandle>);

impl BlobHandles {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a handle without re-sorting.
    pub fn push(&mut self, handle: BlobHandle) {
        self.0.push(handle);
    }

    /// Sort in place by the handle order.
    pub fn sort(&mut self) {
        // Equal handles are identical, so stability buys nothing.
        self.0.sort_unstable();
    }

    /// Consume the list, returning the handles in their current order.
    pub fn into_inner(self) -> Vec<BlobHandle> {
        self.0
    }
}

impl Deref for BlobHandles {
    type Target = [BlobHandle];

    fn deref(&self) -> &[BlobHandle] {
        &self.0
    }
}

impl From<Vec<BlobHandle>> for BlobHandles {
    fn from(handles: Vec<BlobHandle>) -> Self {
        Self(handles)
    }
}

impl FromIterator<BlobHandle> for BlobHandles {
    fn from_iter<I: IntoIterator<Item = BlobHandle>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for BlobHandles {
    type Item = BlobHandle;
    type IntoIter = std::vec::IntoIter<BlobHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BlobHandles {
    type Item = &'a BlobHandle;
    type IntoIter = std::slice::Iter<'a, BlobHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for BlobHandles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, handle) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{handle}")?;
        }
        f.write_str("]")
    }
}
