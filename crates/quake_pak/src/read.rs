//! Types for reading PAK archives
//!

use binrw::BinRead;
use std::{
    fmt::{self, Debug},
    io::{self, Read, Seek, SeekFrom},
};
use tracing::{debug, instrument, warn};

use crate::{
    error::{Error, FileNotFoundError, Result},
    types::{PakEntry, PakHeader, PakRecord, RECORD_SIZE},
};

/// A struct for reading an entry from a PAK file
///
/// Reads and seeks are confined to the entry: position `0` is the first byte
/// of the entry and [`SeekFrom::End`] is relative to its last byte.
pub struct PakFile<'a, R: Read + Seek> {
    record: &'a PakRecord,
    reader: &'a mut R,
    position: u64,
}

impl<'a, R: Read + Seek> Debug for PakFile<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PakFile({:#?})", self.record)
    }
}

/// Methods for retrieving information on PAK file entries
impl<'a, R: Read + Seek> PakFile<'a, R> {
    fn new(record: &'a PakRecord, reader: &'a mut R) -> Result<Self> {
        reader.seek(SeekFrom::Start(record.data_offset as u64))?;
        Ok(PakFile {
            record,
            reader,
            position: 0,
        })
    }

    /// Get the name of the file
    pub fn name(&self) -> String {
        String::from_utf8_lossy(self.record.name_bytes()).into_owned()
    }

    /// Get the name of the file, in the raw byte representation.
    pub fn name_raw(&self) -> &[u8] {
        self.record.name_bytes()
    }

    /// Get the size of the file, in bytes
    pub fn size(&self) -> u64 {
        self.record.data_size as u64
    }

    /// Get the starting offset of the file inside the archive
    pub fn data_start(&self) -> u64 {
        self.record.data_offset as u64
    }

    /// Get the location of this file inside the archive
    pub fn entry(&self) -> PakEntry {
        PakEntry::from(self.record)
    }
}

impl<R: Read + Seek> Read for PakFile<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.size().saturating_sub(self.position);
        if remaining == 0 || buf.is_empty() {
            return Ok(0);
        }

        let max = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
        let read = self.reader.read(&mut buf[..max])?;
        self.position += read as u64;
        Ok(read)
    }
}

impl<R: Read + Seek> Seek for PakFile<'_, R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => self.size().checked_add_signed(delta),
            SeekFrom::Current(delta) => self.position.checked_add_signed(delta),
        }
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            )
        })?;

        self.reader
            .seek(SeekFrom::Start(self.data_start() + target))?;
        self.position = target;
        Ok(target)
    }
}

/// PAK archive reader
///
/// The directory is read once when the archive is opened; lookups scan that
/// snapshot in directory order.
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn dump_entry(reader: impl Read + Seek, name: &str) -> quake_pak::error::Result<()> {
///     let mut pak = quake_pak::PakArchive::new(reader)?;
///
///     let mut file = pak.by_name(name)?;
///     println!("{} is {} bytes", file.name(), file.size());
///     std::io::copy(&mut file, &mut std::io::stdout())?;
///
///     Ok(())
/// }
/// ```
pub struct PakArchive<R> {
    reader: R,
    header: PakHeader,
    records: Vec<PakRecord>,
}

impl<R: Read + Seek> PakArchive<R> {
    /// Read a PAK archive collecting the entries it contains.
    ///
    /// Fails with [`Error::InvalidArchive`] without reading any further when the
    /// signature does not match.
    #[instrument(skip(reader), err)]
    pub fn new(mut reader: R) -> Result<PakArchive<R>> {
        let Ok(header) = PakHeader::read(&mut reader) else {
            return Err(Error::InvalidArchive);
        };

        let records = Self::get_records(&mut reader, &header)?;
        debug!(
            directory_offset = header.directory_offset,
            entries = records.len(),
            "read pak directory"
        );

        Ok(PakArchive {
            reader,
            header,
            records,
        })
    }

    /// Number of entries contained in this PAK.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether this PAK archive contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the header the archive was opened with
    pub fn header(&self) -> &PakHeader {
        &self.header
    }

    /// Returns an iterator over all the entry names in this archive, in directory order.
    pub fn file_names(&self) -> impl Iterator<Item = String> + '_ {
        self.records
            .iter()
            .map(|r| String::from_utf8_lossy(r.name_bytes()).into_owned())
    }

    /// Get the index of the first entry whose name matches exactly, if it's present.
    pub fn index_for_name(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.name_bytes() == name.as_bytes())
    }

    /// Get the name of an entry, if it's present.
    pub fn name_for_index(&self, index: usize) -> Option<String> {
        self.records
            .get(index)
            .map(|r| String::from_utf8_lossy(r.name_bytes()).into_owned())
    }

    /// Resolve the location of the first entry named `name`
    pub fn find_entry(&self, name: &str) -> Result<PakEntry> {
        self.index_for_name(name)
            .map(|index| PakEntry::from(&self.records[index]))
            .ok_or_else(|| Error::FileNotFound(FileNotFoundError::Name(name.to_owned())))
    }

    /// Search for an entry by name
    pub fn by_name(&mut self, name: &str) -> Result<PakFile<'_, R>> {
        let Some(index) = self.index_for_name(name) else {
            return Err(Error::FileNotFound(FileNotFoundError::Name(
                name.to_owned(),
            )));
        };
        self.by_index(index)
    }

    /// Get a contained entry by index
    pub fn by_index(&mut self, file_number: usize) -> Result<PakFile<'_, R>> {
        let record = self
            .records
            .get(file_number)
            .ok_or(Error::FileNotFound(FileNotFoundError::Index(file_number)))?;

        PakFile::new(record, &mut self.reader)
    }

    /// Unwrap and return the inner reader object
    ///
    /// The position of the reader is undefined.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn get_records(reader: &mut R, header: &PakHeader) -> Result<Vec<PakRecord>> {
        if header.directory_size % RECORD_SIZE != 0 {
            warn!(
                directory_size = header.directory_size,
                "directory size is not a multiple of {RECORD_SIZE}, ignoring the trailing bytes"
            );
        }

        reader.seek(SeekFrom::Start(header.directory_offset as u64))?;

        let expected = header.records();
        let mut records = Vec::new();
        for _ in 0..expected {
            match PakRecord::read(reader) {
                Ok(record) => records.push(record),
                Err(e) if e.is_eof() => {
                    return Err(Error::TruncatedData {
                        expected,
                        read: records.len(),
                    })
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(records)
    }
}
