//! Rotation quantization.
//!
//! Each quaternion component is stored as one byte `c` and reconstructed as
//! `(c - 128) / 128`. The result is never renormalized.

use crate::options::RotationEncoding;

/// Decode one quantized rotation component.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn decode_rotation_component(raw: u8, encoding: RotationEncoding) -> f32 {
    let c = match encoding {
        RotationEncoding::Signed => f32::from(raw as i8),
        RotationEncoding::Unsigned => f32::from(raw),
    };
    (c - 128.0) / 128.0
}

/// Quantize one rotation component back to its stored byte.
///
/// Rounds to the nearest representable step and clamps to the range of the
/// encoding, so values produced by [`decode_rotation_component`] map back to
/// the exact byte they came from. NaN encodes as the byte for `c = 0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_rotation_component(value: f32, encoding: RotationEncoding) -> u8 {
    let c = (value * 128.0 + 128.0).round();
    match encoding {
        RotationEncoding::Signed => c.clamp(-128.0, 127.0) as i8 as u8,
        RotationEncoding::Unsigned => c.clamp(0.0, 255.0) as u8,
    }
}

/// Decode all four rotation bytes.
pub(crate) fn decode_rotation(raw: [u8; 4], encoding: RotationEncoding) -> glam::Vec4 {
    glam::Vec4::from_array(raw.map(|b| decode_rotation_component(b, encoding)))
}

/// Encode all four rotation components.
pub(crate) fn encode_rotation(rotation: glam::Vec4, encoding: RotationEncoding) -> [u8; 4] {
    rotation
        .to_array()
        .map(|v| encode_rotation_component(v, encoding))
}
