use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TypeError, TypeResult};

/// Length of an [`Id`] in bytes.
pub const ID_LEN: usize = 32;

/// Number of leading bytes shown by [`Id::short_hex`].
pub const SHORT_ID_LEN: usize = 4;

/// Content-addressed identifier for a stored blob or container.
///
/// An `Id` is the BLAKE3 hash of some content. Identifiers are totally ordered
/// by unsigned byte-wise comparison, most significant byte first, which is the
/// order the derived `Ord` on the inner array already gives.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Id([u8; ID_LEN]);

impl Id {
    /// Hash `data` into a new identifier.
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Wrap a pre-computed hash.
    pub const fn from_hash(hash: [u8; ID_LEN]) -> Self {
        Self(hash)
    }

    /// The null identifier (all zeros).
    pub const fn null() -> Self {
        Self([0u8; ID_LEN])
    }

    /// Returns `true` if this is the null identifier.
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; ID_LEN]
    }

    /// The raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Full lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short form for diagnostics: hex of the first [`SHORT_ID_LEN`] bytes.
    ///
    /// Never use this for equality or persistence, prefixes collide.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..SHORT_ID_LEN])
    }

    /// Parse a full-length hex string.
    pub fn from_hex(s: &str) -> TypeResult<Self> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let arr: [u8; ID_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| TypeError::InvalidLength {
                expected: ID_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.short_hex())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Id {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Id> for [u8; ID_LEN] {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Index documents carry ids as hex strings, not byte arrays.
impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
