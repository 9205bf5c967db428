use clap::{Args, ValueEnum};
use miette::{miette, Context, IntoDiagnostic, Result};
use quake_bsp::BspDecoder;
use quake_mdl::MdlDecoder;
use quake_mesh::{write_obj, Mesh, MeshDecoder, ObjWriterOptions};
use quake_pak::{error::Error as PakError, PakArchive};
use std::{
    fs::File,
    io::{BufReader, Read, Seek, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

/// Which decoder an entry is handed to
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AssetKind {
    /// A BSP level
    Level,
    /// An MDL model
    Model,
}

impl AssetKind {
    /// Guess the kind from the extension of the entry name
    pub fn from_entry(name: &str) -> Option<AssetKind> {
        let extension = Path::new(name).extension()?;
        if extension.eq_ignore_ascii_case("bsp") {
            Some(AssetKind::Level)
        } else if extension.eq_ignore_ascii_case("mdl") {
            Some(AssetKind::Model)
        } else {
            None
        }
    }

    /// Name of the object in the written OBJ file
    pub fn object_name(&self) -> &'static str {
        match self {
            AssetKind::Level => "bsp",
            AssetKind::Model => "mdl",
        }
    }

    /// Decode an entry with the matching decoder
    pub fn decode<R: Read + Seek>(&self, reader: R) -> Result<Mesh> {
        Ok(match self {
            AssetKind::Level => BspDecoder.decode(reader)?,
            AssetKind::Model => MdlDecoder.decode(reader)?,
        })
    }
}

/// The OBJ file name for an entry: `<entry>.obj` with path separators replaced
pub fn output_file_name(entry: &str) -> String {
    format!("{entry}.obj").replace(['/', '\\'], "_")
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path of the entry exactly as stored in the archive, e.g. maps/start.bsp
    #[arg(value_name = "ENTRY")]
    entry: String,

    /// An input PAK file
    #[arg(short, long, value_name = "FILE", default_value = "PAK0.PAK")]
    archive: PathBuf,

    /// Directory the OBJ file is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Decode the entry as this kind instead of guessing from its extension
    #[arg(short, long, value_enum)]
    kind: Option<AssetKind>,
}

impl ExportArgs {
    pub fn handle(&self) -> Result<()> {
        self.export()?;
        info!("done");
        Ok(())
    }

    /// Export the entry, returning the written file or `None` when the
    /// archive has no such entry
    pub fn export(&self) -> Result<Option<PathBuf>> {
        let f = File::open(&self.archive)
            .into_diagnostic()
            .context(format!("path: {}", &self.archive.display()))?;
        let mut pak = PakArchive::new(BufReader::new(f))
            .context(format!("reading {}", &self.archive.display()))?;
        info!(
            "{} entries in {} (directory at {})",
            pak.len(),
            self.archive.display(),
            pak.header().directory_offset
        );

        let entry = match pak.by_name(&self.entry) {
            Ok(entry) => entry,
            Err(PakError::FileNotFound(_)) => {
                warn!(
                    "there is no entry named {} in {}",
                    self.entry,
                    self.archive.display()
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let kind = self
            .kind
            .or_else(|| AssetKind::from_entry(&self.entry))
            .ok_or_else(|| {
                miette!(
                    "unable to tell whether {} is a level or a model, pass --kind",
                    self.entry
                )
            })?;
        info!(
            "decoding {} as {:?} ({} bytes at {})",
            entry.name(),
            kind,
            entry.size(),
            entry.data_start()
        );

        let mesh = kind
            .decode(entry)
            .context(format!("decoding {}", &self.entry))?;
        if mesh.is_empty() {
            warn!("{} has no triangles, only vertices are written", self.entry);
        }

        // serialize first so a failure never leaves a partial file behind
        let mut buffer = Vec::new();
        write_obj(
            &mesh,
            &mut buffer,
            &ObjWriterOptions::builder()
                .object_name(kind.object_name())
                .build(),
        )?;

        let p = self.output_dir.join(output_file_name(&self.entry));
        info!("writing {}", p.display());
        let mut out = File::create(&p)
            .into_diagnostic()
            .context(format!("creating {}", &p.display()))?;
        out.write_all(&buffer)
            .into_diagnostic()
            .context(format!("writing {}", &p.display()))?;

        Ok(Some(p))
    }
}
