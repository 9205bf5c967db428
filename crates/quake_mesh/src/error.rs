//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// triangle {triangle} references vertex {index} but the mesh only has {vertices}
    #[error("triangle {triangle} references vertex {index} but the mesh only has {vertices}")]
    DanglingIndex {
        /// Position of the triangle in the mesh
        triangle: usize,
        /// The offending 0-based vertex index
        index: u32,
        /// Number of vertices in the mesh
        vertices: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
