//! This library reconstructs triangle meshes from **MDL** model files used by *Quake*.
//!
//! # MDL Model Format Documentation
//!
//! An MDL model (`IDPO`, version 6) stores its geometry once per animation frame as
//! quantized vertices, together with a single list of triangles shared by all frames.
//! Only the first frame is decoded by this crate.
//!
//! ## File Structure
//!
//! | Section             | Size                                  | Description                                  |
//! |---------------------|---------------------------------------|----------------------------------------------|
//! | Header              | 84 bytes                              | see [`types::MdlHeader`]                     |
//! | Skin                | 4 + `skin_width * skin_height` bytes  | group flag then 8-bit palette indices        |
//! | Texture coordinates | `num_verts * 12` bytes                | `on_seam, s, t: u32`, unused for geometry    |
//! | Triangles           | `num_tris * 16` bytes                 | `front_facing: u32, indices: [u32; 3]`       |
//! | Frames              | `num_frames * (24 + num_verts * 4)`   | type, bounding box, name, vertices           |
//!
//! ### Frames
//!
//! A simple frame starts with a 4-byte type (`0`), two 4-byte bounding box vertices and a
//! 16-byte name, followed by `num_verts` quantized vertices:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Position               | 3 bytes: `x, y, z` as unsigned integers                 |
//! | 0x0003         | Normal Index           | 1 byte: index into the precomputed normal table         |
//!
//! The position of a vertex is `scale * packed + translate` on each axis, with `scale` and
//! `translate` taken from the header.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.mdl`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Not supported**: multiple skins, skin groups, frame groups, animation
//!

pub mod decode;
pub mod error;
pub mod types;

pub use decode::MdlDecoder;
