//! Foundation types for tessera.
//!
//! Every other tessera crate depends on `tessera-types`. It owns the
//! content identifier and nothing else; how identifiers are grouped, typed
//! and ordered is left to the crates built on top.
//!
//! # Key Types
//!
//! - [`Id`] -- fixed-length content identifier (BLAKE3 hash)
//! - [`TypeError`] -- failures parsing identifiers from text

pub mod error;
pub mod id;

pub use error::{TypeError, TypeResult};
pub use id::{Id, ID_LEN, SHORT_ID_LEN};
