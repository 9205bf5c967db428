//! Triangle mesh types shared by the Quake asset decoders, plus a writer for the
//! plain-text **OBJ** format they are exported to.
//!
//! Decoders for the individual asset formats (`quake_bsp`, `quake_mdl`) implement
//! [`MeshDecoder`] and produce a [`Mesh`]; the caller decides which decoder to run
//! and hands the result to [`obj::write_obj`].
//!
//! ## OBJ Output
//!
//! Only the subset needed for raw geometry is written:
//!
//! | Line           | Description                                                  |
//! |----------------|--------------------------------------------------------------|
//! | `o <name>`     | Optional object name, see [`obj::ObjWriterOptions`]          |
//! | `v <x> <y> <z>`| One line per vertex, in mesh order                           |
//! | `f <a> <b> <c>`| One line per triangle, indices are **1-based**               |
//!
//! No normals, texture coordinates, groups or materials are emitted.
//!

use std::io::{Read, Seek};

pub mod error;
pub mod obj;
pub mod types;

pub use obj::{write_obj, ObjWriterOptions};
pub use types::{Mesh, Triangle, Vec3};

/// Something that can turn the bytes of a single archive entry into a [`Mesh`]
///
/// The reader covers exactly one entry: position `0` is the first byte of the
/// entry and every offset stored inside the asset is relative to it.
pub trait MeshDecoder {
    /// Error returned when the entry cannot be decoded
    type Error;

    /// Decode the entry into a triangle mesh
    fn decode<R: Read + Seek>(&self, reader: R) -> Result<Mesh, Self::Error>;
}
