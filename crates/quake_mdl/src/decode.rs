//! Triangle mesh reconstruction for MDL models
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use quake_mesh::{Mesh, MeshDecoder, Triangle, Vec3};
use std::io::{Read, Seek, SeekFrom};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{Error, Result},
    types::{MdlHeader, MdlTriangle, QuantizedVertex, MDL_VERSION, TEXCOORD_SIZE},
};

/// Decoder for MDL models
///
/// Only the first skin is skipped and only the first frame is decoded.
#[derive(Debug, Default, Copy, Clone)]
pub struct MdlDecoder;

impl MeshDecoder for MdlDecoder {
    type Error = Error;

    #[instrument(skip_all, err)]
    fn decode<R: Read + Seek>(&self, mut reader: R) -> Result<Mesh> {
        let available = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let header = read_header(&mut reader)?;
        if header.version != MDL_VERSION {
            warn!(
                version = header.version,
                "unexpected mdl version, expected {MDL_VERSION}"
            );
        }
        if header.num_skins > 1 {
            warn!(
                skins = header.num_skins,
                "only the first skin is supported"
            );
        }

        let skin_group = reader
            .read_u32::<LittleEndian>()
            .map_err(Error::truncated_io("skin"))?;
        if skin_group != 0 {
            warn!(skin_group, "skin groups are not supported");
        }
        skip(&mut reader, header.skin_bytes(), available, "skin")?;
        skip(
            &mut reader,
            header.num_verts as u64 * TEXCOORD_SIZE,
            available,
            "texture coordinates",
        )?;

        let triangles = (0..header.num_tris)
            .map(|_| {
                MdlTriangle::read(&mut reader)
                    .map(Triangle::from)
                    .map_err(Error::truncated("triangles"))
            })
            .collect::<Result<Vec<_>>>()?;

        let frame_type = reader
            .read_u32::<LittleEndian>()
            .map_err(Error::truncated_io("frame"))?;
        if frame_type != 0 {
            warn!(frame_type, "frame groups are not supported");
        }
        // bounding box min and max
        skip(&mut reader, 8, available, "frame")?;
        let mut name = [0u8; 16];
        reader
            .read_exact(&mut name)
            .map_err(Error::truncated_io("frame"))?;
        debug!(
            frame = %String::from_utf8_lossy(name.split(|b| *b == 0).next().unwrap_or_default()),
            frames = header.num_frames,
            "decoding first frame"
        );

        let vertices = (0..header.num_verts)
            .map(|_| {
                QuantizedVertex::read(&mut reader)
                    .map(|v| v.dequantize(header.scale, header.translate))
                    .map_err(Error::truncated("frame vertices"))
            })
            .collect::<Result<Vec<Vec3>>>()?;

        for (triangle, t) in triangles.iter().enumerate() {
            if let Some(index) = t
                .indices()
                .into_iter()
                .find(|i| *i as usize >= vertices.len())
            {
                return Err(Error::MalformedGeometry {
                    triangle,
                    index,
                    vertices: vertices.len(),
                });
            }
        }

        info!(
            vertices = vertices.len(),
            triangles = triangles.len(),
            "reconstructed model"
        );

        Ok(Mesh::new(vertices, triangles))
    }
}

fn read_header<R: Read + Seek>(reader: &mut R) -> Result<MdlHeader> {
    MdlHeader::read(reader).map_err(|e| {
        if is_bad_magic(&e) {
            Error::InvalidModel
        } else {
            Error::truncated("header")(e)
        }
    })
}

fn is_bad_magic(e: &binrw::Error) -> bool {
    match e {
        binrw::Error::BadMagic { .. } => true,
        binrw::Error::Backtrace(backtrace) => is_bad_magic(&backtrace.error),
        _ => false,
    }
}

fn skip<R: Seek>(reader: &mut R, bytes: u64, available: u64, section: &'static str) -> Result<()> {
    let position = reader.stream_position()?;
    match position.checked_add(bytes) {
        Some(end) if end <= available => {
            reader.seek(SeekFrom::Start(end))?;
            Ok(())
        }
        _ => Err(Error::TruncatedData { section }),
    }
}
