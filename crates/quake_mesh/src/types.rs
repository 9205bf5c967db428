//! Base types for a reconstructed triangle mesh.

use binrw::{BinRead, BinWrite};
use derive_more::derive::{Constructor, Display};

use crate::error::{Error, Result};

/// A point in model or world space
///
/// Stored on disk as three little endian `f32`, which is also how level vertices
/// are laid out, so it can be read straight out of a vertex lump.
#[derive(BinRead, BinWrite, Constructor, Display, Debug, Default, Copy, Clone, PartialEq)]
#[brw(little)]
#[display("{x} {y} {z}")]
pub struct Vec3 {
    /// X axis
    pub x: f32,

    /// Y axis
    pub y: f32,

    /// Z axis
    pub z: f32,
}

/// A triangle made of three 0-based indices into [`Mesh::vertices`]
#[derive(Constructor, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Triangle {
    /// First corner
    pub a: u32,

    /// Second corner
    pub b: u32,

    /// Third corner
    pub c: u32,
}

impl Triangle {
    /// The corners in winding order
    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// A triangle mesh
///
/// The order of both lists is significant: it is the order the vertices and
/// faces are written out in.
#[derive(Constructor, Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Vertex positions, in insertion order
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangles, in insertion order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Whether this mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Check that every triangle only references existing vertices
    pub fn validate(&self) -> Result<()> {
        let vertices = self.vertices.len();
        for (triangle, t) in self.triangles.iter().enumerate() {
            if let Some(index) = t.indices().into_iter().find(|i| *i as usize >= vertices) {
                return Err(Error::DanglingIndex {
                    triangle,
                    index,
                    vertices,
                });
            }
        }
        Ok(())
    }
}
