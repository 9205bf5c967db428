//! This library handles reading entries out of **PAK** archives used by *Quake*.
//!
//! # PAK Archive Format Documentation
//!
//! A PAK file is a flat container: a small header, the raw bytes of every entry, and a
//! directory describing where each entry lives. Nothing is compressed. PAK files are
//! typically identified with the `.pak` extension (`PAK0.PAK`, `PAK1.PAK`, ...).
//!
//! ## File Structure
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: 0x4B434150 ("PACK")                               |
//! | 0x0004         | Directory Offset       | 4 bytes: Offset to the directory from the start of file    |
//! | 0x0008         | Directory Size         | 4 bytes: Size of the directory in bytes                    |
//!
//! ### Directory
//!
//! The directory holds `Directory Size / 64` records stored back to back:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Name                   | 56 bytes: Path of the entry, padded with NUL bytes      |
//! | 0x0038         | Data Offset            | 4 bytes: Offset to the entry data from start of file    |
//! | 0x003C         | Data Size              | 4 bytes: Size of the entry data                         |
//!
//! - **Name**: The entry path as stored, e.g. `maps/start.bsp` or `progs/demon.mdl`. Lookups
//!   compare it byte for byte, without case folding or path normalization.
//! - **Data Offset**: Absolute offset to the first byte of the entry.
//! - **Data Size**: Number of bytes belonging to the entry.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.pak`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;
pub mod types;

pub use read::{PakArchive, PakFile};
pub use types::PakEntry;
