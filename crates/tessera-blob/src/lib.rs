//! Blob identity model for tessera.
//!
//! A blob is one unit of stored content: a chunk of file data or the encoding
//! of a directory tree. This crate decides how blobs are typed, named and
//! ordered. It does not store, compress or encrypt anything; pack writers and
//! index readers build on these types.
//!
//! # Key Types
//!
//! - [`BlobKind`] -- what a blob contains (`data` or `tree`)
//! - [`Blob`] -- one blob occurrence: kind, length, id and offset
//! - [`PackedBlob`] -- a [`Blob`] plus the id of the pack holding it
//! - [`BlobHandle`] -- storage-independent identity: id plus kind
//! - [`BlobHandles`] -- a sequence of handles with a deterministic sort
//! - [`BlobSet`] -- a set of handles with sorted iteration
//!
//! # Rules
//!
//! 1. `BlobKind::Invalid` only marks uninitialized values and never persists.
//! 2. Display is total; serialization is strict and rejects `Invalid`.
//! 3. Handles order by id bytes first, then by kind ordinal.

pub mod blob;
pub mod error;
pub mod handle;
pub mod kind;
pub mod set;

pub use blob::{Blob, PackedBlob};
pub use error::{BlobError, BlobResult};
pub use handle::{BlobHandle, BlobHandles};
pub use kind::{kind_label, BlobKind};
pub use set::BlobSet;
