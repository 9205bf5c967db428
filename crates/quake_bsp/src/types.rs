//! Base types for structure of BSP file.

use binrw::{BinRead, BinWrite};

/// The version Quake levels are stored with
pub const BSP_VERSION: u32 = 29;

/// Size in bytes of a vertex record
pub const VERTEX_SIZE: u32 = 12;

/// Size in bytes of an edge record
pub const EDGE_SIZE: u32 = 4;

/// Size in bytes of an edge list entry
pub const LEDGE_SIZE: u32 = 4;

/// Size in bytes of a face record
pub const FACE_SIZE: u32 = 20;

/// Location of a lump relative to the start of the level
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct Lump {
    /// Offset from the start of the level
    pub offset: u32,

    /// Size of the lump in bytes
    pub size: u32,
}

impl Lump {
    /// Number of whole records of `record_size` bytes in this lump
    pub fn count(&self, record_size: u32) -> usize {
        (self.size / record_size) as usize
    }
}

/// BSP file header
///
/// The version followed by the fifteen lumps, in the order they are stored
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct BspHeader {
    /// Format version, 29 for Quake
    pub version: u32,

    /// Entity descriptions as text
    pub entities: Lump,
    /// Splitting planes
    pub planes: Lump,
    /// Wall textures
    pub textures: Lump,
    /// Vertex positions
    pub vertices: Lump,
    /// Leaf visibility lists
    pub visibility: Lump,
    /// BSP nodes
    pub nodes: Lump,
    /// Texture mapping info
    pub texinfo: Lump,
    /// Faces
    pub faces: Lump,
    /// Lightmaps
    pub lightmaps: Lump,
    /// Clip nodes
    pub clipnodes: Lump,
    /// BSP leaves
    pub leaves: Lump,
    /// Face lists of the leaves
    pub face_list: Lump,
    /// Edges
    pub edges: Lump,
    /// Signed edge list (ledges)
    pub edge_list: Lump,
    /// Sub models
    pub models: Lump,
}

/// An edge between two vertices
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct Edge {
    /// Start vertex
    pub v0: u16,

    /// End vertex
    pub v1: u16,
}

impl Edge {
    /// The endpoints in the order a ledge walks them
    ///
    /// A positive ledge walks `v0 → v1`, anything else walks `v1 → v0`.
    pub fn directed(&self, ledge: i32) -> (u16, u16) {
        if ledge > 0 {
            (self.v0, self.v1)
        } else {
            (self.v1, self.v0)
        }
    }
}

/// A polygonal face
///
/// Only `first_ledge` and `ledge_count` are used for geometry.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct Face {
    /// Plane the face lies in
    pub plane_id: u16,

    /// Which side of the plane the face is on
    pub side: u16,

    /// First entry of the edge list describing the boundary
    pub first_ledge: u32,

    /// Number of edge list entries in the boundary
    pub ledge_count: u16,

    /// Texture mapping
    pub texinfo_id: u16,

    /// Type of lighting
    pub light_type: u8,

    /// Base light level
    pub base_light: u8,

    /// Additional light models
    pub light: [u8; 2],

    /// Offset into the lightmap lump
    pub lightmap_offset: u32,
}
