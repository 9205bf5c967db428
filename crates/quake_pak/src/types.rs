//! Base types for structure of PAK file.

use binrw::{BinRead, BinWrite};

/// Size of a single directory record in bytes
pub const RECORD_SIZE: u32 = 64;

/// Size of the name field of a directory record in bytes
pub const NAME_SIZE: usize = 56;

/// PAK file header
///
/// Defines the header of the PAK file which always starts with "PACK".
/// All data is stored in little endian format
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(magic = b"PACK", little)]
pub struct PakHeader {
    /// The offset from the beginning of the file where the directory starts
    pub directory_offset: u32,

    /// The size of the directory in bytes
    pub directory_size: u32,
}

impl PakHeader {
    /// Number of whole records in the directory
    pub fn records(&self) -> usize {
        (self.directory_size / RECORD_SIZE) as usize
    }
}

/// PAK directory record
///
/// Defines an entry in the PAK file
#[derive(BinRead, BinWrite, Debug, Copy, Clone, PartialEq)]
#[brw(little)]
pub struct PakRecord {
    /// The entry path, padded with NUL bytes
    pub name: [u8; NAME_SIZE],

    /// The offset to the data for this record from the start of the file
    pub data_offset: u32,

    /// The size of the data for this record
    pub data_size: u32,
}

impl Default for PakRecord {
    fn default() -> Self {
        Self {
            name: [0; NAME_SIZE],
            data_offset: Default::default(),
            data_size: Default::default(),
        }
    }
}

impl PakRecord {
    /// Create a record, truncating `name` to the 56 bytes of the name field
    pub fn new(name: &str, data_offset: u32, data_size: u32) -> Self {
        let mut record = PakRecord {
            data_offset,
            data_size,
            ..Default::default()
        };
        let len = name.len().min(NAME_SIZE);
        record.name[..len].copy_from_slice(&name.as_bytes()[..len]);
        record
    }

    /// The name up to its first NUL byte, or all 56 bytes if there is none
    pub fn name_bytes(&self) -> &[u8] {
        let end = self
            .name
            .iter()
            .position(|b| *b == b'\0')
            .unwrap_or(NAME_SIZE);
        &self.name[..end]
    }
}

/// The resolved location of one entry inside the archive
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PakEntry {
    /// Absolute offset of the first byte of the entry
    pub offset: u32,

    /// Number of bytes in the entry
    pub size: u32,
}

impl From<&PakRecord> for PakEntry {
    fn from(record: &PakRecord) -> Self {
        PakEntry {
            offset: record.data_offset,
            size: record.data_size,
        }
    }
}
