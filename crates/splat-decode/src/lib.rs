//! Decode fixed-stride Gaussian splat records.
//!
//! A splat file is a flat sequence of 32-byte records with no header. Each
//! record stores a position, a per-axis scale, an RGBA color and a quantized
//! rotation quaternion. This crate provides pure synchronous functions for
//! turning those bytes into [`Splat`] values and back. It performs no I/O;
//! see the `splat` crate for file and stream readers.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Permissive**: Colors and rotations pass through unvalidated
//! - **Exact inverse**: `encode(decode(bytes)) == bytes` for every record
//!
//! # Key functions
//!
//! - [`decode_record`]: Decode one 32-byte record
//! - [`decode_splats`]: Decode a whole buffer of records
//! - [`encode_record`]: Inverse of [`decode_record`]
//! - [`record_count`]: Validate a byte length and count records

mod error;

pub mod buffer;
pub mod options;
pub mod record;
pub mod rotation;

pub use buffer::{decode_splats, encode_splats, record_count};
pub use error::{DecodeError, DecodeResult};
pub use options::{ByteOrder, DecodeOptions, RotationEncoding};
pub use record::{decode_record, decode_record_slice, encode_record};
pub use rotation::{decode_rotation_component, encode_rotation_component};

/// Size in bytes of one splat record.
pub const RECORD_SIZE: usize = 32;

/// Byte offset of the three position floats.
pub const POSITION_OFFSET: usize = 0;
/// Byte offset of the three scale floats.
pub const SCALE_OFFSET: usize = 12;
/// Byte offset of the four color bytes.
pub const COLOR_OFFSET: usize = 24;
/// Byte offset of the four quantized rotation bytes.
pub const ROTATION_OFFSET: usize = 28;

const _: () = assert!(ROTATION_OFFSET + 4 == RECORD_SIZE);

/// One decoded splat record.
///
/// - `position`: world-space X, Y, Z
/// - `scale`: per-axis ellipsoid scale
/// - `color`: R, G, B, A channels in `0..=255`
/// - `rotation`: quaternion components reconstructed from 8-bit values.
///   These are not renormalized and need not have unit length.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Splat {
    pub position: glam::Vec3,
    pub scale: glam::Vec3,
    pub color: [u8; 4],
    pub rotation: glam::Vec4,
}

impl Splat {
    /// Encode this splat back into a 32-byte record.
    #[must_use]
    pub fn to_bytes(&self, options: DecodeOptions) -> [u8; RECORD_SIZE] {
        encode_record(self, options)
    }

    /// Alpha channel normalized to `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        f32::from(self.color[3]) / 255.0
    }
}
