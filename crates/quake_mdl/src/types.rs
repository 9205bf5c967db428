//! Base types for structure of MDL file.

use binrw::{BinRead, BinWrite};
use quake_mesh::{Triangle, Vec3};

/// The version Quake models are stored with
pub const MDL_VERSION: u32 = 6;

/// Size in bytes of a texture coordinate record
pub const TEXCOORD_SIZE: u64 = 12;

/// MDL file header
///
/// Defines the header of the MDL file which always starts with "IDPO".
/// All data is stored in little endian format
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(magic = b"IDPO", little)]
pub struct MdlHeader {
    /// Format version, 6 for Quake
    pub version: u32,

    /// Scale applied to the quantized vertices
    pub scale: Vec3,

    /// Offset applied after scaling
    pub translate: Vec3,

    /// Radius of the bounding sphere
    pub bounding_radius: f32,

    /// Position of the eyes
    pub eye_position: Vec3,

    /// Number of skins
    pub num_skins: u32,

    /// Width of a skin in pixels
    pub skin_width: u32,

    /// Height of a skin in pixels
    pub skin_height: u32,

    /// Number of vertices per frame
    pub num_verts: u32,

    /// Number of triangles
    pub num_tris: u32,

    /// Number of frames
    pub num_frames: u32,

    /// Whether frames are synchronized
    pub sync_type: u32,

    /// Rendering flags
    pub flags: u32,

    /// Average size of the triangles
    pub size: f32,
}

impl MdlHeader {
    /// Number of bytes of a single skin image
    pub fn skin_bytes(&self) -> u64 {
        self.skin_width as u64 * self.skin_height as u64
    }
}

/// A triangle record
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct MdlTriangle {
    /// Whether the triangle faces the front of the skin
    pub front_facing: u32,

    /// Indices into the frame vertices
    pub indices: [u32; 3],
}

impl From<MdlTriangle> for Triangle {
    fn from(triangle: MdlTriangle) -> Self {
        let [a, b, c] = triangle.indices;
        Triangle::new(a, b, c)
    }
}

/// A vertex position stored as one byte per axis
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct QuantizedVertex {
    /// Position before scaling
    pub packed: [u8; 3],

    /// Index into the normal table, unused
    pub normal_index: u8,
}

impl QuantizedVertex {
    /// The position once `scale` and `translate` are applied
    pub fn dequantize(&self, scale: Vec3, translate: Vec3) -> Vec3 {
        let [x, y, z] = self.packed.map(f32::from);
        Vec3::new(
            scale.x * x + translate.x,
            scale.y * y + translate.y,
            scale.z * z + translate.z,
        )
    }
}
