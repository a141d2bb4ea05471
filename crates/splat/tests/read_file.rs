//! End-to-end reads through the public API.

#![allow(clippy::float_cmp)]

use glam::{Vec3, Vec4};
use splat::{
    DecodeOptions, Error, RECORD_SIZE, RotationEncoding, SplatFile, read_splat_file,
    read_splat_file_with, to_scatter_points,
};

fn red_record(rotation: [u8; 4]) -> [u8; RECORD_SIZE] {
    let mut bytes = [0u8; RECORD_SIZE];
    for (i, v) in [1.0f32, 2.0, 3.0, 1.0, 1.0, 1.0].into_iter().enumerate() {
        bytes[i * 4..i * 4 + 4].copy_from_slice(&v.to_le_bytes());
    }
    bytes[24..28].copy_from_slice(&[255, 0, 0, 255]);
    bytes[28..32].copy_from_slice(&rotation);
    bytes
}

fn write_temp(bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.splat");
    std::fs::write(&path, bytes).unwrap();
    (dir, path)
}

#[test]
fn decodes_red_splat_with_zero_rotation() {
    let (_dir, path) = write_temp(&red_record([128; 4]));
    let options = DecodeOptions::default().with_rotation(RotationEncoding::Unsigned);

    let splats = read_splat_file_with(&path, options).unwrap();
    assert_eq!(splats.len(), 1);

    let splat = splats[0];
    assert_eq!(splat.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(splat.scale, Vec3::ONE);
    assert_eq!(splat.color, [255, 0, 0, 255]);
    assert_eq!(splat.rotation, Vec4::ZERO);

    let points = to_scatter_points(&splats);
    assert_eq!(points[0].css_rgba(), "rgba(255, 0, 0, 1)");
}

#[test]
fn signed_rotation_extremes() {
    let (_dir, path) = write_temp(&red_record([0x80, 0xFF, 0x80, 0xFF]));
    let splats = read_splat_file(&path).unwrap();
    assert_eq!(
        splats[0].rotation,
        Vec4::new(-2.0, -1.007_812_5, -2.0, -1.007_812_5)
    );
}

#[test]
fn sequential_and_indexed_agree() {
    let mut bytes = Vec::new();
    for i in 0..=u8::MAX {
        bytes.extend_from_slice(&red_record([i, i.wrapping_add(1), 0, 255]));
    }
    let (_dir, path) = write_temp(&bytes);

    let splats = read_splat_file(&path).unwrap();
    assert_eq!(splats.len(), bytes.len() / RECORD_SIZE);

    let mut file = SplatFile::open(&path).unwrap();
    assert_eq!(file.len(), splats.len());
    for index in [0, 1, 127, 255] {
        assert_eq!(file.get(index).unwrap(), splats[index]);
    }
}

#[test]
fn boundary_lengths() {
    let (_dir, empty) = write_temp(&[]);
    assert!(read_splat_file(&empty).unwrap().is_empty());

    let (_dir, short) = write_temp(&[0u8; 31]);
    assert!(matches!(
        read_splat_file(&short),
        Err(Error::MalformedFile { offset: 0, len: 31, .. })
    ));

    let (_dir, exact) = write_temp(&[0u8; 32]);
    assert_eq!(read_splat_file(&exact).unwrap().len(), 1);
}

#[test]
fn error_messages_name_the_problem() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.splat");
    let message = read_splat_file(&missing).unwrap_err().to_string();
    assert!(message.contains("not found"), "{message}");
    assert!(message.contains("nope.splat"), "{message}");
}
