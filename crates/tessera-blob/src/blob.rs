use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tessera_types::Id;

use crate::handle::BlobHandle;
use crate::kind::BlobKind;

/// One blob occurrence: part of a file, or a tree.
///
/// Field names follow the index record shape (`id`, `type`, `offset`,
/// `length`). `offset` is interpreted by whatever container holds the blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: BlobKind,
    pub offset: u64,
    /// Plaintext length in bytes.
    pub length: u64,
}

impl Blob {
    /// Describe a blob of `length` plaintext bytes stored at `offset`.
    ///
    /// Arguments follow the record's logical order: kind, length, id, offset.
    pub fn new(kind: BlobKind, length: u64, id: Id, offset: u64) -> Self {
        Self {
            id,
            kind,
            offset,
            length,
        }
    }

    /// Storage-independent identity of this blob.
    pub fn handle(&self) -> BlobHandle {
        BlobHandle::new(self.id, self.kind)
    }
}

/// A blob stored within a pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackedBlob {
    pub blob: Blob,
    /// The pack holding the blob. Opaque to this crate.
    pub pack_id: Id,
}

impl PackedBlob {
    pub fn new(blob: Blob, pack_id: Id) -> Self {
        Self { blob, pack_id }
    }

    pub fn handle(&self) -> BlobHandle {
        self.blob.handle()
    }
}

impl Deref for PackedBlob {
    type Target = Blob;

    fn deref(&self) -> &Blob {
        &self.blob
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_carries_id_and_kind() {
        let id = Id::hash(b"chunk");
        let blob = Blob::new(BlobKind::Data, 4096, id, 128);
        assert_eq!(blob.handle(), BlobHandle::new(id, BlobKind::Data));
    }

    #[test]
    fn new_places_length_before_id_and_offset_after() {
        let id = Id::hash(b"sized");
        let blob = Blob::new(BlobKind::Data, 4096, id, 128);
        assert_eq!(blob.length, 4096);
        assert_eq!(blob.offset, 128);
        assert_eq!(blob.id, id);
        assert_eq!(
            blob,
            Blob {
                id,
                kind: BlobKind::Data,
                offset: 128,
                length: 4096,
            }
        );
    }

    #[test]
    fn packed_blob_reads_through_to_blob() {
        let id = Id::hash(b"tree");
        let pack_id = Id::hash(b"pack");
        let packed = PackedBlob::new(Blob::new(BlobKind::Tree, 34, id, 12), pack_id);

        assert_eq!(packed.id, id);
        assert_eq!(packed.kind, BlobKind::Tree);
        assert_eq!(packed.offset, 12);
        assert_eq!(packed.length, 34);
        assert_eq!(packed.pack_id, pack_id);
        assert_eq!(packed.handle(), BlobHandle::new(id, BlobKind::Tree));
    }

    #[test]
    fn same_blob_in_different_packs_shares_a_handle() {
        let blob = Blob::new(BlobKind::Data, 10, Id::hash(b"dup"), 0);
        let a = PackedBlob::new(blob, Id::hash(b"pack-a"));
        let b = PackedBlob::new(blob, Id::hash(b"pack-b"));
        assert_ne!(a, b);
        assert_eq!(a.handle(), b.handle());
    }

    #[test]
    fn serde_uses_index_field_names() {
        let blob = Blob::new(BlobKind::Data, 6, Id::null(), 5);
        let value = serde_json::to_value(blob).unwrap();
        assert_eq!(value["type"], "data");
        assert_eq!(value["offset"], 5);
        assert_eq!(value["length"], 6);
        assert_eq!(value["id"], Id::null().to_hex());

        let json = serde_json::to_string(&blob).unwrap();
        let parsed: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, blob);
    }

    #[test]
    fn serde_rejects_invalid_kind() {
        let blob = Blob::new(BlobKind::Invalid, 0, Id::null(), 0);
        assert!(serde_json::to_string(&blob).is_err());

        let json = format!(
            r#"{{"id":"{}","type":"bogus","offset":0,"length":0}}"#,
            Id::null()
        );
        assert!(serde_json::from_str::<Blob>(&json).is_err());
    }
}
