//! Reading and writing `TELG` object containers on disk.
//!
//! A container is the 10-byte header (see [`crate::header`]) followed by
//! one of three payload shapes:
//!
//! - single object: the object's canonical encoding, nothing else
//! - homogeneous batch: per entry, a little-endian `u32` byte length then
//!   the entry's encoding
//! - graph batch (`ObjectType::Graph` header): per entry, a 1-byte object
//!   type tag, a little-endian `u32` byte length, then the encoding
//!
//! Writes stage the full container in a sibling temp file and rename it
//! into place, so a crash mid-write never leaves a torn container at the
//! target path. Reads check the header, the declared count, and that the
//! payload is consumed exactly; every decoded object passes through a
//! caller-supplied [`Validator`] before it is returned.

use std::io::Write;
use std::path::{Path, PathBuf};

use tel_codec::Codec;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::header::{FileHeader, ObjectType};

/// Semantic check applied to every object decoded from a container.
///
/// Framing and decode errors are detected structurally; validators carry
/// the domain rules the wire format cannot express (value ranges,
/// cross-field constraints). A rejected object fails the whole read with
/// [`StoreError::Validation`].
pub trait Validator<T> {
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Validator that accepts every object.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl<T> Validator<T> for AcceptAll {
    fn validate(&self, _value: &T) -> Result<(), String> {
        Ok(())
    }
}

impl<T, F> Validator<T> for F
where
    F: Fn(&T) -> Result<(), String>,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        self(value)
    }
}

/// One entry of a heterogeneous graph batch: a type tag plus the entry's
/// canonical encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEntry {
    pub object_type: ObjectType,
    pub bytes: Vec<u8>,
}

impl GraphEntry {
    /// Build an entry from an encodable value.
    ///
    /// Returns [`StoreError::ReservedGraphTag`] if `object_type` is
    /// [`ObjectType::Graph`]; batches do not nest.
    pub fn from_value<T: Codec>(object_type: ObjectType, value: &T) -> StoreResult<Self> {
        if object_type == ObjectType::Graph {
            return Err(StoreError::ReservedGraphTag);
        }
        Ok(Self {
            object_type,
            bytes: value.encode(),
        })
    }
}

/// Maps a graph entry's tag and bytes to a decoded domain value.
///
/// Callers own the mapping from [`ObjectType`] to concrete types, usually
/// decoding into one enum with a variant per tag.
pub trait GraphDecoder {
    type Output;

    fn decode_entry(&self, object_type: ObjectType, bytes: &[u8]) -> StoreResult<Self::Output>;
}

/// A `TELG` container at a filesystem path.
///
/// Holds only the path; every operation opens, reads or replaces the file
/// whole. Containers are small by design (single objects and modest
/// batches), so whole-file I/O keeps the atomicity story simple.
#[derive(Clone, Debug)]
pub struct ObjectFile {
    path: PathBuf,
}

impl ObjectFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a single object container.
    pub fn write_one<T: Codec>(&self, object_type: ObjectType, value: &T) -> StoreResult<()> {
        check_homogeneous_type(object_type)?;
        let mut data = Vec::from(FileHeader::new(object_type, 1).to_bytes());
        value.encode_into(&mut data);
        self.write_atomic(&data)?;
        debug!(
            path = %self.path.display(),
            object_type = %object_type,
            bytes = data.len(),
            "wrote single-object container"
        );
        Ok(())
    }

    /// Read a single object container, checking the type and validating
    /// the decoded object.
    ///
    /// The payload must decode as exactly one object with no trailing
    /// bytes.
    pub fn read_one<T, V>(&self, object_type: ObjectType, validator: &V) -> StoreResult<T>
    where
        T: Codec,
        V: Validator<T>,
    {
        check_homogeneous_type(object_type)?;
        let data = std::fs::read(&self.path)?;
        let (header, payload_start) = FileHeader::parse(&data)?;
        check_header_type(&header, object_type)?;
        if header.object_count != 1 {
            return Err(StoreError::CountMismatch {
                declared: header.object_count,
                actual: 1,
            });
        }
        let value = T::decode(&data[payload_start..])?;
        validator.validate(&value).map_err(StoreError::Validation)?;
        debug!(
            path = %self.path.display(),
            object_type = %object_type,
            "read single-object container"
        );
        Ok(value)
    }

    /// Write a homogeneous batch container. The empty batch is valid.
    pub fn write_batch<T: Codec>(&self, object_type: ObjectType, values: &[T]) -> StoreResult<()> {
        check_homogeneous_type(object_type)?;
        let count = entry_count(values.len())?;
        let mut data = Vec::from(FileHeader::new(object_type, count).to_bytes());
        for value in values {
            let encoded = value.encode();
            push_length_prefix(&mut data, &encoded)?;
            data.extend_from_slice(&encoded);
        }
        self.write_atomic(&data)?;
        debug!(
            path = %self.path.display(),
            object_type = %object_type,
            count = values.len(),
            bytes = data.len(),
            "wrote batch container"
        );
        Ok(())
    }

    /// Read a homogeneous batch container, preserving write order.
    ///
    /// Fails on truncated entries, entries extending past the file, or
    /// payload bytes left over after the declared count.
    pub fn read_batch<T, V>(&self, object_type: ObjectType, validator: &V) -> StoreResult<Vec<T>>
    where
        T: Codec,
        V: Validator<T>,
    {
        check_homogeneous_type(object_type)?;
        let data = std::fs::read(&self.path)?;
        let (header, mut offset) = FileHeader::parse(&data)?;
        check_header_type(&header, object_type)?;

        let mut values = Vec::new();
        for _ in 0..header.object_count {
            let (entry, next) = take_length_prefixed(&data, offset)?;
            let value = T::decode(entry)?;
            validator.validate(&value).map_err(StoreError::Validation)?;
            values.push(value);
            offset = next;
        }
        check_fully_consumed(&data, offset)?;
        debug!(
            path = %self.path.display(),
            object_type = %object_type,
            count = values.len(),
            "read batch container"
        );
        Ok(values)
    }

    /// Write a heterogeneous graph batch container.
    ///
    /// Rejects entries tagged [`ObjectType::Graph`]; batches do not nest.
    pub fn write_graph(&self, entries: &[GraphEntry]) -> StoreResult<()> {
        let count = entry_count(entries.len())?;
        let mut data = Vec::from(FileHeader::new(ObjectType::Graph, count).to_bytes());
        for entry in entries {
            if entry.object_type == ObjectType::Graph {
                return Err(StoreError::ReservedGraphTag);
            }
            data.push(entry.object_type.tag_byte());
            push_length_prefix(&mut data, &entry.bytes)?;
            data.extend_from_slice(&entry.bytes);
        }
        self.write_atomic(&data)?;
        debug!(
            path = %self.path.display(),
            count = entries.len(),
            bytes = data.len(),
            "wrote graph container"
        );
        Ok(())
    }

    /// Read a heterogeneous graph batch container, decoding each entry
    /// through `decoder` in write order.
    pub fn read_graph<D: GraphDecoder>(&self, decoder: &D) -> StoreResult<Vec<D::Output>> {
        let data = std::fs::read(&self.path)?;
        let (header, mut offset) = FileHeader::parse(&data)?;
        if header.object_type != ObjectType::Graph {
            return Err(StoreError::ObjectTypeMismatch {
                expected: ObjectType::Graph,
                actual: header.object_type,
            });
        }

        let mut values = Vec::new();
        for _ in 0..header.object_count {
            let Some(&tag) = data.get(offset) else {
                return Err(StoreError::Corrupt {
                    offset,
                    reason: "truncated graph entry tag".to_string(),
                });
            };
            let object_type =
                ObjectType::from_tag_byte(tag).ok_or(StoreError::UnknownObjectType(tag))?;
            if object_type == ObjectType::Graph {
                return Err(StoreError::ReservedGraphTag);
            }
            let (entry, next) = take_length_prefixed(&data, offset + 1)?;
            values.push(decoder.decode_entry(object_type, entry)?);
            offset = next;
        }
        check_fully_consumed(&data, offset)?;
        debug!(
            path = %self.path.display(),
            count = values.len(),
            "read graph container"
        );
        Ok(values)
    }

    /// Stage the container in a sibling temp file, then rename it over
    /// the target path.
    fn write_atomic(&self, data: &[u8]) -> StoreResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(data)?;
        staged.as_file().sync_all()?;
        staged
            .persist(&self.path)
            .map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

fn check_homogeneous_type(object_type: ObjectType) -> StoreResult<()> {
    if object_type == ObjectType::Graph {
        return Err(StoreError::ReservedGraphTag);
    }
    Ok(())
}

fn check_header_type(header: &FileHeader, expected: ObjectType) -> StoreResult<()> {
    if header.object_type != expected {
        return Err(StoreError::ObjectTypeMismatch {
            expected,
            actual: header.object_type,
        });
    }
    Ok(())
}

fn entry_count(len: usize) -> StoreResult<u32> {
    u32::try_from(len).map_err(|_| StoreError::Corrupt {
        offset: 0,
        reason: format!("{len} entries exceed the u32 count field"),
    })
}

fn push_length_prefix(data: &mut Vec<u8>, encoded: &[u8]) -> StoreResult<()> {
    let len = u32::try_from(encoded.len()).map_err(|_| StoreError::Corrupt {
        offset: data.len(),
        reason: format!("entry of {} bytes exceeds the u32 length field", encoded.len()),
    })?;
    data.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

/// Read a `u32`-length-prefixed entry at `offset`, returning the entry's
/// bytes and the offset just past it.
fn take_length_prefixed(data: &[u8], offset: usize) -> StoreResult<(&[u8], usize)> {
    let Some(prefix) = data.get(offset..offset + 4) else {
        return Err(StoreError::Corrupt {
            offset,
            reason: "truncated entry length prefix".to_string(),
        });
    };
    let len = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
    let start = offset + 4;
    let Some(entry) = data.get(start..start + len) else {
        return Err(StoreError::Corrupt {
            offset: start,
            reason: format!("entry of {len} bytes extends past the end of the file"),
        });
    };
    Ok((entry, start + len))
}

fn check_fully_consumed(data: &[u8], offset: usize) -> StoreResult<()> {
    if offset != data.len() {
        return Err(StoreError::Corrupt {
            offset,
            reason: format!("{} payload bytes past the declared count", data.len() - offset),
        });
    }
    Ok(())
}
