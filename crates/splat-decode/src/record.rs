//! Single record decoding.

use glam::Vec3;

use crate::error::{DecodeError, DecodeResult};
use crate::options::{ByteOrder, DecodeOptions};
use crate::rotation::{decode_rotation, encode_rotation};
use crate::{COLOR_OFFSET, POSITION_OFFSET, RECORD_SIZE, ROTATION_OFFSET, SCALE_OFFSET, Splat};

/// Decode one 32-byte record.
///
/// # Format
///
/// - Bytes 0-11: Position (3 × f32)
/// - Bytes 12-23: Scale (3 × f32)
/// - Bytes 24-27: Color (4 × u8, RGBA)
/// - Bytes 28-31: Rotation (4 × quantized byte)
#[must_use]
pub fn decode_record(bytes: &[u8; RECORD_SIZE], options: DecodeOptions) -> Splat {
    Splat {
        position: read_vec3(bytes, POSITION_OFFSET, options.byte_order),
        scale: read_vec3(bytes, SCALE_OFFSET, options.byte_order),
        color: read_array(bytes, COLOR_OFFSET),
        rotation: decode_rotation(read_array(bytes, ROTATION_OFFSET), options.rotation),
    }
}

/// Decode one record from a slice that must be exactly 32 bytes long.
pub fn decode_record_slice(bytes: &[u8], options: DecodeOptions) -> DecodeResult<Splat> {
    let record: &[u8; RECORD_SIZE] = bytes.try_into().map_err(|_| {
        if bytes.len() < RECORD_SIZE {
            DecodeError::TruncatedRecord { len: bytes.len() }
        } else {
            DecodeError::RecordLength { len: bytes.len() }
        }
    })?;
    Ok(decode_record(record, options))
}

/// Encode a splat into a 32-byte record.
///
/// Position, scale and color are written verbatim. Rotation is re-quantized
/// with [`encode_rotation_component`](crate::encode_rotation_component).
#[must_use]
pub fn encode_record(splat: &Splat, options: DecodeOptions) -> [u8; RECORD_SIZE] {
    let mut out = [0u8; RECORD_SIZE];
    write_vec3(&mut out, POSITION_OFFSET, splat.position, options.byte_order);
    write_vec3(&mut out, SCALE_OFFSET, splat.scale, options.byte_order);
    out[COLOR_OFFSET..COLOR_OFFSET + 4].copy_from_slice(&splat.color);
    out[ROTATION_OFFSET..ROTATION_OFFSET + 4]
        .copy_from_slice(&encode_rotation(splat.rotation, options.rotation));
    out
}

fn read_array(bytes: &[u8; RECORD_SIZE], offset: usize) -> [u8; 4] {
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]
}

fn read_vec3(bytes: &[u8; RECORD_SIZE], offset: usize, order: ByteOrder) -> Vec3 {
    Vec3::new(
        order.read_f32(read_array(bytes, offset)),
        order.read_f32(read_array(bytes, offset + 4)),
        order.read_f32(read_array(bytes, offset + 8)),
    )
}

fn write_vec3(out: &mut [u8; RECORD_SIZE], offset: usize, v: Vec3, order: ByteOrder) {
    for (i, component) in v.to_array().into_iter().enumerate() {
        let at = offset + i * 4;
        out[at..at + 4].copy_from_slice(&order.write_f32(component));
    }
}
