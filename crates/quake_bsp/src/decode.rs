//! Triangle mesh reconstruction for BSP levels
//!

use binrw::{BinRead, Endian};
use byteorder::{LittleEndian, ReadBytesExt};
use quake_mesh::{Mesh, MeshDecoder, Triangle, Vec3};
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{Error, MalformedGeometryError, Result},
    types::{
        BspHeader, Edge, Face, Lump, BSP_VERSION, EDGE_SIZE, FACE_SIZE, LEDGE_SIZE, VERTEX_SIZE,
    },
};

/// Every vertex axis is divided by this when a level is decoded
///
/// This is an output convention of the extractor, the level itself stores
/// plain map units.
pub const LEVEL_SCALE_DIVISOR: f32 = 100.0;

const HEADER_SIZE: u64 = 4 + 15 * 8;

/// Decoder for BSP levels
///
/// ```no_run
/// use miette::IntoDiagnostic;
/// use quake_mesh::MeshDecoder;
///
/// fn level_mesh(pak: &str) -> miette::Result<quake_mesh::Mesh> {
///     let mut archive = quake_pak::PakArchive::new(std::fs::File::open(pak).into_diagnostic()?)?;
///     let entry = archive.by_name("maps/start.bsp")?;
///     Ok(quake_bsp::BspDecoder.decode(entry)?)
/// }
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct BspDecoder;

impl MeshDecoder for BspDecoder {
    type Error = Error;

    #[instrument(skip_all, err)]
    fn decode<R: Read + Seek>(&self, mut reader: R) -> Result<Mesh> {
        let available = reader.seek(SeekFrom::End(0))?;
        let header_lump = Lump {
            offset: 0,
            size: HEADER_SIZE as u32,
        };
        check_bounds("header", header_lump, available)?;

        reader.seek(SeekFrom::Start(0))?;
        let header = BspHeader::read(&mut reader).map_err(|e| {
            if e.is_eof() {
                truncated("header", header_lump, available)
            } else {
                Error::from(e)
            }
        })?;
        if header.version != BSP_VERSION {
            warn!(
                version = header.version,
                "unexpected bsp version, expected {BSP_VERSION}"
            );
        }

        let vertices: Vec<Vec3> = read_lump(
            &mut reader,
            "vertices",
            header.vertices,
            VERTEX_SIZE,
            available,
        )?
        .into_iter()
        .map(|v: Vec3| {
            Vec3::new(
                v.x / LEVEL_SCALE_DIVISOR,
                v.y / LEVEL_SCALE_DIVISOR,
                v.z / LEVEL_SCALE_DIVISOR,
            )
        })
        .collect();
        let edges: Vec<Edge> =
            read_lump(&mut reader, "edges", header.edges, EDGE_SIZE, available)?;
        let ledges = read_ledges(&mut reader, header.edge_list, available)?;
        let faces: Vec<Face> =
            read_lump(&mut reader, "faces", header.faces, FACE_SIZE, available)?;

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            ledges = ledges.len(),
            faces = faces.len(),
            "read level lumps"
        );

        let mut triangles = Vec::new();
        let mut skipped = 0;
        for (index, face) in faces.iter().enumerate() {
            if face.ledge_count < 3 {
                warn!(
                    face = index,
                    ledges = face.ledge_count,
                    "skipping face with fewer than 3 edges"
                );
                skipped += 1;
                continue;
            }

            triangles.extend(
                fan(face, &edges, &ledges, vertices.len())
                    .map_err(|reason| Error::MalformedGeometry {
                        face: index,
                        reason,
                    })?,
            );
        }

        info!(
            vertices = vertices.len(),
            triangles = triangles.len(),
            skipped,
            "reconstructed level"
        );

        Ok(Mesh::new(vertices, triangles))
    }
}

/// Split a face into a triangle fan
///
/// The first ledge of the face supplies the origin vertex. Every following
/// ledge except the last adds the triangle `(origin, from, to)`; the last one
/// only closes the loop back to the origin. A face with `n >= 3` ledges gives
/// `n - 2` triangles, a face with fewer gives none.
///
/// The boundary is trusted to already be consistently wound.
pub fn fan(
    face: &Face,
    edges: &[Edge],
    ledges: &[i32],
    vertices: usize,
) -> core::result::Result<Vec<Triangle>, MalformedGeometryError> {
    let count = face.ledge_count as usize;
    if count < 3 {
        return Ok(Vec::new());
    }

    let first = face.first_ledge as usize;
    let walk = |k: usize| -> core::result::Result<(u16, u16), MalformedGeometryError> {
        let index = first + k;
        let ledge = *ledges.get(index).ok_or(MalformedGeometryError::Ledge {
            index,
            len: ledges.len(),
        })?;

        // ledges index the edge list directly, edge 0 is never referenced
        let magnitude = ledge.unsigned_abs() as usize;
        let edge = edges.get(magnitude).ok_or(MalformedGeometryError::Edge {
            index: magnitude,
            len: edges.len(),
        })?;

        Ok(edge.directed(ledge))
    };
    let vertex = |v: u16| -> core::result::Result<u32, MalformedGeometryError> {
        if v as usize >= vertices {
            return Err(MalformedGeometryError::Vertex {
                index: v as usize,
                len: vertices,
            });
        }
        Ok(v.into())
    };

    // only the start of the first ledge is used
    let origin = vertex(walk(0)?.0)?;
    (1..count - 1)
        .map(|k| {
            let (b, c) = walk(k)?;
            Ok(Triangle::new(origin, vertex(b)?, vertex(c)?))
        })
        .collect()
}

fn check_bounds(lump_name: &'static str, lump: Lump, available: u64) -> Result<()> {
    let offset = lump.offset as u64;
    let size = lump.size as u64;
    if offset + size > available {
        return Err(Error::TruncatedData {
            lump: lump_name,
            offset,
            size,
            available,
        });
    }
    Ok(())
}

fn read_lump<T, R>(
    reader: &mut R,
    lump_name: &'static str,
    lump: Lump,
    record_size: u32,
    available: u64,
) -> Result<Vec<T>>
where
    T: for<'a> BinRead<Args<'a> = ()>,
    R: Read + Seek,
{
    check_bounds(lump_name, lump, available)?;
    if lump.size % record_size != 0 {
        warn!(
            size = lump.size,
            "{lump_name} lump is not a multiple of {record_size} bytes, ignoring the trailing bytes"
        );
    }

    reader.seek(SeekFrom::Start(lump.offset as u64))?;
    (0..lump.count(record_size))
        .map(|_| {
            T::read_options(reader, Endian::Little, ()).map_err(|e| {
                if e.is_eof() {
                    truncated(lump_name, lump, available)
                } else {
                    Error::from(e)
                }
            })
        })
        .collect()
}

fn read_ledges<R: Read + Seek>(reader: &mut R, lump: Lump, available: u64) -> Result<Vec<i32>> {
    check_bounds("edge list", lump, available)?;
    if lump.size % LEDGE_SIZE != 0 {
        warn!(
            size = lump.size,
            "edge list lump is not a multiple of {LEDGE_SIZE} bytes, ignoring the trailing bytes"
        );
    }

    reader.seek(SeekFrom::Start(lump.offset as u64))?;
    (0..lump.count(LEDGE_SIZE))
        .map(|_| {
            reader.read_i32::<LittleEndian>().map_err(|e| {
                if e.kind() == ErrorKind::UnexpectedEof {
                    truncated("edge list", lump, available)
                } else {
                    Error::from(e)
                }
            })
        })
        .collect()
}

/// The lump could not be read in full even though it is within the entry
fn truncated(lump_name: &'static str, lump: Lump, available: u64) -> Error {
    Error::TruncatedData {
        lump: lump_name,
        offset: lump.offset as u64,
        size: lump.size as u64,
        available,
    }
}
