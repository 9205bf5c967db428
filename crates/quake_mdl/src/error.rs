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

    /// file is an invalid mdl model
    #[error("file is an invalid mdl model")]
    #[diagnostic(help("the model must start with the signature \"IDPO\""))]
    InvalidModel,

    /// the model ends inside its {section}
    #[error("the model ends inside its {section}")]
    TruncatedData {
        /// Section that could not be read completely
        section: &'static str,
    },

    /// triangle {triangle} references vertex {index} but the model only has {vertices}
    #[error("triangle {triangle} references vertex {index} but the model only has {vertices}")]
    MalformedGeometry {
        /// Position of the triangle
        triangle: usize,
        /// The offending vertex index
        index: u32,
        /// Number of vertices per frame
        vertices: usize,
    },
}

impl Error {
    /// Map end of file errors while reading `section` to [`Error::TruncatedData`]
    pub(crate) fn truncated(section: &'static str) -> impl Fn(binrw::Error) -> Error {
        move |e| {
            if e.is_eof() {
                Error::TruncatedData { section }
            } else {
                Error::BinRWError(e)
            }
        }
    }

    /// Map end of file errors while reading `section` to [`Error::TruncatedData`]
    pub(crate) fn truncated_io(section: &'static str) -> impl Fn(std::io::Error) -> Error {
        move |e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                Error::TruncatedData { section }
            } else {
                Error::IOError(e)
            }
        }
    }
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
