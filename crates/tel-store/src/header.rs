//! The 10-byte `TELG` file header.
//!
//! Layout: 4-byte magic `"TELG"`, 1-byte format version, 1-byte
//! object-type tag, 4-byte little-endian object count. The header prefixes
//! every persisted container and is bit-normative: any implementation
//! sharing state must produce these exact bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// File magic identifying a TEL object container.
pub const MAGIC: [u8; 4] = *b"TELG";

/// Current on-disk format version.
pub const FORMAT_VERSION: u8 = 1;

/// Total header length in bytes.
pub const HEADER_LEN: usize = 10;

/// The kind of object a container holds.
///
/// Tag byte values are part of the file format. `Graph` marks a
/// heterogeneous batch whose entries carry their own per-entry tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Resource,
    Effect,
    Capability,
    Handler,
    Graph,
}

impl ObjectType {
    /// Serialize to the header/entry tag byte.
    pub fn tag_byte(self) -> u8 {
        match self {
            Self::Resource => 1,
            Self::Effect => 2,
            Self::Capability => 3,
            Self::Handler => 4,
            Self::Graph => 5,
        }
    }

    /// Parse from a tag byte.
    pub fn from_tag_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::Resource),
            2 => Some(Self::Effect),
            3 => Some(Self::Capability),
            4 => Some(Self::Handler),
            5 => Some(Self::Graph),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource => write!(f, "resource"),
            Self::Effect => write!(f, "effect"),
            Self::Capability => write!(f, "capability"),
            Self::Handler => write!(f, "handler"),
            Self::Graph => write!(f, "graph"),
        }
    }
}

/// Parsed form of the 10-byte container header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// What the payload holds.
    pub object_type: ObjectType,
    /// Number of objects in the payload.
    pub object_count: u32,
}

impl FileHeader {
    /// Header for a container of `object_count` objects of `object_type`.
    pub fn new(object_type: ObjectType, object_count: u32) -> Self {
        Self {
            object_type,
            object_count,
        }
    }

    /// Serialize to the exact 10-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[0..4].copy_from_slice(&MAGIC);
        bytes[4] = FORMAT_VERSION;
        bytes[5] = self.object_type.tag_byte();
        bytes[6..10].copy_from_slice(&self.object_count.to_le_bytes());
        bytes
    }

    /// Parse and check a header from the start of a file buffer.
    ///
    /// Returns the header and the offset of the first payload byte.
    pub fn parse(bytes: &[u8]) -> StoreResult<(Self, usize)> {
        if bytes.len() < HEADER_LEN {
            return Err(StoreError::Corrupt {
                offset: 0,
                reason: format!(
                    "file holds {} bytes, header requires {HEADER_LEN}",
                    bytes.len()
                ),
            });
        }
        let mut actual = [0u8; 4];
        actual.copy_from_slice(&bytes[0..4]);
        if actual != MAGIC {
            return Err(StoreError::InvalidMagic {
                expected: MAGIC,
                actual,
            });
        }
        if bytes[4] != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(bytes[4]));
        }
        let object_type = ObjectType::from_tag_byte(bytes[5])
            .ok_or(StoreError::UnknownObjectType(bytes[5]))?;
        let object_count = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]);
        Ok((
            Self {
                object_type,
                object_count,
            },
            HEADER_LEN,
        ))
    }
}
