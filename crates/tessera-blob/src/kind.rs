use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BlobError, BlobResult};

const DATA_TOKEN: &[u8] = br#""data""#;
const TREE_TOKEN: &[u8] = br#""tree""#;

/// What a blob stored in a pack contains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BlobKind {
    /// Zero value. Marks uninitialized state; valid construction never
    /// produces it.
    #[default]
    Invalid = 0,
    /// File contents.
    Data = 1,
    /// Encoded directory tree.
    Tree = 2,
}

impl BlobKind {
    /// The underlying ordinal, used as the tie-break in handle ordering.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Map a raw ordinal back to a kind, if it names one.
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Invalid),
            1 => Some(Self::Data),
            2 => Some(Self::Tree),
            _ => None,
        }
    }

    /// Whether this kind may be persisted.
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Data | Self::Tree)
    }

    /// Encode as the quoted JSON token `"data"` or `"tree"`.
    ///
    /// Stricter than `Display`: `Invalid` is rejected rather than rendered.
    pub fn to_token(self) -> BlobResult<&'static [u8]> {
        match self {
            Self::Data => Ok(DATA_TOKEN),
            Self::Tree => Ok(TREE_TOKEN),
            Self::Invalid => {
                tracing::debug!(kind = %self, "refusing to encode blob kind");
                Err(BlobError::UnknownBlobKind(self.to_string()))
            }
        }
    }

    /// Decode from the exact quoted token `"data"` or `"tree"`.
    ///
    /// Matching is byte-exact: no case folding, no surrounding whitespace.
    pub fn from_token(buf: &[u8]) -> BlobResult<Self> {
        match buf {
            DATA_TOKEN => Ok(Self::Data),
            TREE_TOKEN => Ok(Self::Tree),
            other => {
                let input = String::from_utf8_lossy(other).into_owned();
                tracing::debug!(%input, "unrecognized blob kind token");
                Err(BlobError::UnknownBlobKind(input))
            }
        }
    }

    fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Data => Some("data"),
            Self::Tree => Some("tree"),
            Self::Invalid => None,
        }
    }

    fn from_name(name: &str) -> BlobResult<Self> {
        match name {
            "data" => Ok(Self::Data),
            "tree" => Ok(Self::Tree),
            other => {
                tracing::debug!(input = other, "unrecognized blob kind name");
                Err(BlobError::UnknownBlobKind(other.to_string()))
            }
        }
    }
}

/// Display label for a raw kind ordinal.
///
/// Never fails. Ordinals that name no persistable kind, including ones read
/// from corrupt data, render as `<BlobType N>`.
pub fn kind_label(ordinal: u8) -> String {
    match BlobKind::from_ordinal(ordinal).and_then(BlobKind::as_str) {
        Some(name) => name.to_string(),
        None => format!("<BlobType {ordinal}>"),
    }
}

impl fmt::Display for BlobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            None => write!(f, "<BlobType {}>", self.ordinal()),
        }
    }
}

impl Serialize for BlobKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(name) => serializer.serialize_str(name),
            None => {
                tracing::debug!(kind = %self, "refusing to serialize blob kind");
                Err(serde::ser::Error::custom(BlobError::UnknownBlobKind(
                    self.to_string(),
                )))
            }
        }
    }
}

struct BlobKindVisitor;

impl<'de> Visitor<'de> for BlobKindVisitor {
    type Value = BlobKind;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unescaped \"data\" or \"tree\" token")
    }

    // Only strings borrowed straight from the input reach here. Escaped or
    // buffered strings fall through to `invalid_type`, so a document decodes
    // a kind exactly when `BlobKind::from_token` would accept its bytes.
    fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<BlobKind, E> {
        BlobKind::from_name(v).map_err(E::custom)
    }
}

/// Strict like [`BlobKind::from_token`]: the input must borrow the token
/// verbatim, so readers that unescape or buffer strings (`from_value`,
/// `from_reader`) are rejected.
impl<'de> Deserialize<'de> for BlobKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(BlobKindVisitor)
    }
}
