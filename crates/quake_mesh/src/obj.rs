//! Plain-text OBJ output

use bon::Builder;
use std::io::Write;
use tracing::instrument;

use crate::error::Result;
use crate::types::Mesh;

/// Options for how the OBJ file should be written
#[derive(Debug, Clone, Default, Builder)]
pub struct ObjWriterOptions {
    /// Name written on an `o` line before any geometry
    #[builder(into)]
    pub object_name: Option<String>,
}

/// Write `mesh` as OBJ text
///
/// The mesh is validated before anything is written, so a mesh with dangling
/// indices never produces partial output.
///
/// ```
/// # fn doit() -> quake_mesh::error::Result<()>
/// # {
/// use quake_mesh::{write_obj, Mesh, ObjWriterOptions, Triangle, Vec3};
///
/// let mesh = Mesh::new(
///     vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)],
///     vec![Triangle::new(0, 1, 2)],
/// );
///
/// let mut out = Vec::new();
/// write_obj(&mesh, &mut out, &ObjWriterOptions::default())?;
/// assert_eq!(String::from_utf8_lossy(&out), "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
#[instrument(skip(mesh, writer), err)]
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W, options: &ObjWriterOptions) -> Result<()> {
    mesh.validate()?;

    if let Some(name) = &options.object_name {
        writeln!(writer, "o {name}")?;
    }

    for vertex in mesh.vertices() {
        writeln!(writer, "v {vertex}")?;
    }

    // OBJ indices start at 1
    for triangle in mesh.triangles() {
        let [a, b, c] = triangle.indices().map(|i| u64::from(i) + 1);
        writeln!(writer, "f {a} {b} {c}")?;
    }

    writer.flush()?;
    Ok(())
}
