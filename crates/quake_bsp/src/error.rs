//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// the {lump} lump does not fit in the level
    #[error("the {lump} lump ({offset}+{size} bytes) does not fit in the level ({available} bytes)")]
    TruncatedData {
        /// Name of the lump being read
        lump: &'static str,
        /// Offset of the lump from the start of the level
        offset: u64,
        /// Size of the lump in bytes
        size: u64,
        /// Size of the level in bytes
        available: u64,
    },

    /// face {face} has invalid geometry
    #[error("face {face} has invalid geometry")]
    MalformedGeometry {
        /// Index of the face in the face lump
        face: usize,
        /// What was out of range
        #[source]
        #[diagnostic_source]
        reason: MalformedGeometryError,
    },
}

/// Error type to provide further information when a face references data that does not exist
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum MalformedGeometryError {
    /// ledge {index} is past the end of the edge list ({len} entries)
    #[error("ledge {index} is past the end of the edge list ({len} entries)")]
    Ledge {
        /// Position in the edge list
        index: usize,
        /// Length of the edge list
        len: usize,
    },

    /// edge {index} does not exist ({len} edges)
    #[error("edge {index} does not exist ({len} edges)")]
    Edge {
        /// Magnitude of the ledge value
        index: usize,
        /// Number of edges
        len: usize,
    },

    /// vertex {index} does not exist ({len} vertices)
    #[error("vertex {index} does not exist ({len} vertices)")]
    Vertex {
        /// Endpoint of the edge
        index: usize,
        /// Number of vertices
        len: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
