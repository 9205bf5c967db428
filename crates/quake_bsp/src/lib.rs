//! This library reconstructs triangle meshes from **BSP** level files used by *Quake*.
//!
//! # BSP Level Format Documentation
//!
//! A BSP level (version 29) starts with a directory of fifteen lumps. Every lump offset is
//! relative to the first byte of the level, not to the archive it is stored in.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Version                | 4 bytes: 29 for Quake                                      |
//! | 0x0004         | Lumps                  | 15 × 8 bytes: `(offset, size)` pairs                       |
//!
//! The lumps are stored in this order: entities, planes, textures, vertices, visibility,
//! nodes, texture info, faces, lightmaps, clip nodes, leaves, face list, edges, edge list
//! and models. Only four of them carry the geometry read by this crate:
//!
//! | Lump       | Record size | Record                                                        |
//! |------------|-------------|---------------------------------------------------------------|
//! | Vertices   | 12 bytes    | `x, y, z: f32`                                                |
//! | Edges      | 4 bytes     | `v0, v1: u16` indices into the vertices                       |
//! | Edge list  | 4 bytes     | `i32` ledge, see below                                        |
//! | Faces      | 20 bytes    | see [`types::Face`]                                           |
//!
//! ### Faces and Ledges
//!
//! A face does not list its vertices. It points at a run of `ledge_count` entries of the edge
//! list starting at `first_ledge`. Each entry is a signed edge index: the magnitude selects the
//! edge, a positive value walks it from `v0` to `v1` and a negative value from `v1` to `v0`.
//! Edge `0` is never referenced since its sign could not be told apart.
//!
//! The boundary walk is turned into a triangle fan anchored on the first vertex of the first
//! edge, see [`decode::fan`].
//!
//! ## Additional Information
//!
//! - **File Extension**: `.bsp`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Units**: vertices are divided by [`decode::LEVEL_SCALE_DIVISOR`] when decoded
//!

pub mod decode;
pub mod error;
pub mod types;

pub use decode::BspDecoder;
