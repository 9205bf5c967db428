use binrw::BinWrite;
use quake_mdl::{
    error::Error,
    types::{MdlHeader, MdlTriangle, QuantizedVertex},
    MdlDecoder,
};
use quake_mesh::{MeshDecoder, Triangle, Vec3};
use quake_pak::{
    types::{PakHeader, PakRecord},
    PakArchive,
};
use std::io::Cursor;
use tracing_test::traced_test;

/// A model declaring `skins` skins but storing only the first, with a single frame
fn model(skins: u32, triangles: &[[u32; 3]], vertices: &[[u8; 3]]) -> Vec<u8> {
    let header = MdlHeader {
        version: 6,
        scale: Vec3::new(2.0, 2.0, 2.0),
        translate: Vec3::new(1.0, 1.0, 1.0),
        num_skins: skins,
        skin_width: 4,
        skin_height: 2,
        num_verts: vertices.len() as u32,
        num_tris: triangles.len() as u32,
        num_frames: 1,
        ..Default::default()
    };

    let mut out = Cursor::new(Vec::new());
    header.write(&mut out).unwrap();
    0u32.write_le(&mut out).unwrap();
    [0xEEu8; 8].write_le(&mut out).unwrap();
    for _ in vertices {
        [0u32; 3].write_le(&mut out).unwrap();
    }
    for indices in triangles {
        MdlTriangle {
            front_facing: 0,
            indices: *indices,
        }
        .write(&mut out)
        .unwrap();
    }
    0u32.write_le(&mut out).unwrap();
    [0u8; 24].write_le(&mut out).unwrap();
    for packed in vertices {
        QuantizedVertex {
            packed: *packed,
            normal_index: 7,
        }
        .write(&mut out)
        .unwrap();
    }
    out.into_inner()
}

fn pak_with(name: &str, data: &[u8]) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    PakHeader {
        directory_offset: 12 + data.len() as u32,
        directory_size: 64,
    }
    .write(&mut out)
    .unwrap();
    out.get_mut().extend_from_slice(data);
    out.set_position(out.get_ref().len() as u64);
    PakRecord::new(name, 12, data.len() as u32)
        .write(&mut out)
        .unwrap();
    out.into_inner()
}

#[traced_test]
#[test]
fn decode_model_from_archive() -> Result<(), Error> {
    let input = pak_with(
        "progs/demon.mdl",
        &model(1, &[[0, 1, 2]], &[[10, 0, 0], [0, 10, 0], [0, 0, 10]]),
    );
    let mut pak = PakArchive::new(Cursor::new(input)).unwrap();

    let mesh = MdlDecoder.decode(pak.by_name("progs/demon.mdl").unwrap())?;

    assert_eq!(
        mesh.vertices(),
        &[
            Vec3::new(21.0, 1.0, 1.0),
            Vec3::new(1.0, 21.0, 1.0),
            Vec3::new(1.0, 1.0, 21.0),
        ]
    );
    assert_eq!(mesh.triangles(), &[Triangle::new(0, 1, 2)]);
    assert!(logs_contain("reconstructed model"));
    assert!(!logs_contain("only the first skin is supported"));

    Ok(())
}

#[traced_test]
#[test]
fn extra_skins_are_reported() -> Result<(), Error> {
    let input = pak_with("progs/player.mdl", &model(2, &[], &[[1, 2, 3]]));
    let mut pak = PakArchive::new(Cursor::new(input)).unwrap();

    MdlDecoder.decode(pak.by_name("progs/player.mdl").unwrap())?;

    assert!(logs_contain("only the first skin is supported"));

    Ok(())
}

#[traced_test]
#[test]
fn model_may_not_read_past_the_entry() {
    let mut data = model(1, &[], &[[1, 2, 3]]);
    data.pop();
    let input = pak_with("progs/gib1.mdl", &data);
    let mut pak = PakArchive::new(Cursor::new(input)).unwrap();

    let result = MdlDecoder.decode(pak.by_name("progs/gib1.mdl").unwrap());

    assert!(matches!(
        result,
        Err(Error::TruncatedData {
            section: "frame vertices"
        })
    ));
}
