use binrw::BinWrite;
use clap::Parser;
use pretty_assertions::assert_eq;
use quake::commands::export::ExportArgs;
use quake_bsp::types::{BspHeader, Edge, Face, Lump};
use quake_mdl::types::{MdlHeader, MdlTriangle, QuantizedVertex};
use quake_mesh::Vec3;
use quake_pak::types::{PakHeader, PakRecord};
use std::{fs, io::Cursor, path::Path};
use tempfile::TempDir;
use tracing_test::traced_test;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    export: ExportArgs,
}

/// Lay out an archive holding `entries` back to back after the header
fn pak(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let data_len: usize = entries.iter().map(|(_, data)| data.len()).sum();

    let mut out = Cursor::new(Vec::new());
    PakHeader {
        directory_offset: 12 + data_len as u32,
        directory_size: 64 * entries.len() as u32,
    }
    .write(&mut out)
    .unwrap();

    let mut offset = 12u32;
    let mut records = Vec::new();
    for (name, data) in entries {
        out.get_mut().extend_from_slice(data);
        records.push(PakRecord::new(name, offset, data.len() as u32));
        offset += data.len() as u32;
    }
    out.set_position(out.get_ref().len() as u64);
    for record in records {
        record.write(&mut out).unwrap();
    }
    out.into_inner()
}

/// A single triangle face over three edges
fn triangle_level() -> Vec<u8> {
    let mut body = Cursor::new(Vec::new());
    for v in [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::new(0.0, 200.0, 0.0),
    ] {
        v.write(&mut body).unwrap();
    }
    for (v0, v1) in [(0, 0), (0, 1), (1, 2), (2, 0)] {
        Edge { v0, v1 }.write(&mut body).unwrap();
    }
    for ledge in [1i32, 2, 3] {
        ledge.write_le(&mut body).unwrap();
    }
    Face {
        first_ledge: 0,
        ledge_count: 3,
        ..Default::default()
    }
    .write(&mut body)
    .unwrap();

    let header = BspHeader {
        version: 29,
        vertices: Lump {
            offset: 124,
            size: 36,
        },
        edges: Lump {
            offset: 160,
            size: 16,
        },
        edge_list: Lump {
            offset: 176,
            size: 12,
        },
        faces: Lump {
            offset: 188,
            size: 20,
        },
        ..Default::default()
    };

    let mut out = Cursor::new(Vec::new());
    header.write(&mut out).unwrap();
    out.get_mut().extend_from_slice(body.get_ref());
    out.into_inner()
}

/// A model with one vertex and no triangles, without skin pixels
fn point_model() -> Vec<u8> {
    let header = MdlHeader {
        version: 6,
        scale: Vec3::new(2.0, 2.0, 2.0),
        translate: Vec3::new(1.0, 1.0, 1.0),
        num_skins: 1,
        num_verts: 1,
        num_frames: 1,
        ..Default::default()
    };

    let mut out = Cursor::new(Vec::new());
    header.write(&mut out).unwrap();
    0u32.write_le(&mut out).unwrap();
    [0u32; 3].write_le(&mut out).unwrap();
    0u32.write_le(&mut out).unwrap();
    [0u8; 24].write_le(&mut out).unwrap();
    QuantizedVertex {
        packed: [10, 0, 0],
        normal_index: 0,
    }
    .write(&mut out)
    .unwrap();
    out.into_inner()
}

/// A model whose only triangle points past its vertices
fn broken_model() -> Vec<u8> {
    let header = MdlHeader {
        version: 6,
        num_skins: 1,
        num_verts: 1,
        num_tris: 1,
        num_frames: 1,
        ..Default::default()
    };

    let mut out = Cursor::new(Vec::new());
    header.write(&mut out).unwrap();
    0u32.write_le(&mut out).unwrap();
    [0u32; 3].write_le(&mut out).unwrap();
    MdlTriangle {
        front_facing: 0,
        indices: [0, 0, 5],
    }
    .write(&mut out)
    .unwrap();
    0u32.write_le(&mut out).unwrap();
    [0u8; 24].write_le(&mut out).unwrap();
    [0u8; 4].write_le(&mut out).unwrap();
    out.into_inner()
}

fn setup(archive: &[u8]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("PAK0.PAK"), archive).unwrap();
    dir
}

fn args(dir: &Path, rest: &[&str]) -> ExportArgs {
    let archive = dir.join("PAK0.PAK");
    let mut argv = vec![
        "quake".to_string(),
        "--archive".to_string(),
        archive.display().to_string(),
        "--output-dir".to_string(),
        dir.display().to_string(),
    ];
    argv.extend(rest.iter().map(|s| s.to_string()));
    TestCli::try_parse_from(argv).unwrap().export
}

fn obj_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".obj"))
        .collect();
    names.sort();
    names
}

#[traced_test]
#[test]
fn export_level() {
    let dir = setup(&pak(&[("maps/start.bsp", triangle_level())]));

    let written = args(dir.path(), &["maps/start.bsp"]).export().unwrap();

    let path = dir.path().join("maps_start.bsp.obj");
    assert_eq!(written, Some(path.clone()));
    assert!(!logs_contain("has no triangles"));
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "o bsp\nv 0 0 0\nv 1 0 0\nv 0 2 0\nf 1 2 3\n"
    );
}

#[traced_test]
#[test]
fn export_model() {
    let dir = setup(&pak(&[
        ("maps/start.bsp", triangle_level()),
        ("progs/gib1.mdl", point_model()),
    ]));

    args(dir.path(), &["progs/gib1.mdl"]).export().unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("progs_gib1.mdl.obj")).unwrap(),
        "o mdl\nv 21 1 1\n"
    );
    assert!(logs_contain("progs/gib1.mdl has no triangles"));
}

#[traced_test]
#[test]
fn missing_entry_is_not_an_error() {
    let dir = setup(&pak(&[("maps/start.bsp", triangle_level())]));

    let written = args(dir.path(), &["maps/e1m1.bsp"]).export().unwrap();

    assert_eq!(written, None);
    assert!(obj_files(dir.path()).is_empty());
    assert!(logs_contain("there is no entry named maps/e1m1.bsp"));
}

#[test]
fn entry_names_are_matched_exactly() {
    let dir = setup(&pak(&[("maps/start.bsp", triangle_level())]));

    let written = args(dir.path(), &["MAPS/START.BSP"]).export().unwrap();

    assert_eq!(written, None);
}

#[test]
fn invalid_archive() {
    let mut archive = pak(&[("maps/start.bsp", triangle_level())]);
    archive[..4].copy_from_slice(b"PK\x03\x04");
    let dir = setup(&archive);

    assert!(args(dir.path(), &["maps/start.bsp"]).export().is_err());
    assert!(obj_files(dir.path()).is_empty());
}

#[test]
fn absent_entry_of_unknown_kind_is_not_an_error() {
    let dir = setup(&pak(&[]));

    let written = args(dir.path(), &["gfx/palette.lmp"]).export().unwrap();

    assert_eq!(written, None);
    assert!(obj_files(dir.path()).is_empty());
}

#[test]
fn bad_signature_is_reported_before_the_kind() {
    let mut archive = pak(&[]);
    archive[..4].copy_from_slice(b"IDPO");
    let dir = setup(&archive);

    let report = args(dir.path(), &["gfx/palette.lmp"]).export().unwrap_err();

    assert!(report
        .chain()
        .any(|e| e.to_string() == "file is an invalid pak archive"));
}

#[test]
fn missing_archive() {
    let dir = tempfile::tempdir().unwrap();

    assert!(args(dir.path(), &["maps/start.bsp"]).export().is_err());
}

#[test]
fn kind_is_required_for_unknown_extensions() {
    let dir = setup(&pak(&[("levels/start", triangle_level())]));

    assert!(args(dir.path(), &["levels/start"]).export().is_err());

    let written = args(dir.path(), &["--kind", "level", "levels/start"])
        .export()
        .unwrap();
    assert_eq!(written, Some(dir.path().join("levels_start.obj")));
}

#[test]
fn failed_decode_writes_nothing() {
    let dir = setup(&pak(&[("progs/bad.mdl", broken_model())]));

    assert!(args(dir.path(), &["progs/bad.mdl"]).export().is_err());
    assert!(obj_files(dir.path()).is_empty());
}

#[test]
fn exactly_one_entry_is_accepted() {
    assert!(TestCli::try_parse_from(["quake"]).is_err());
    assert!(TestCli::try_parse_from(["quake", "maps/start.bsp", "progs/gib1.mdl"]).is_err());
    assert!(TestCli::try_parse_from(["quake", "maps/start.bsp"]).is_ok());
}
