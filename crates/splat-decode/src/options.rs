//! Decoding options.
//!
//! The splat format carries no header, so nothing in the bytes says which
//! byte order the floats were written in or how the rotation bytes are
//! meant to be read. Both are supplied by the caller.

/// Byte order of the six floats in each record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Byte order of the host platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// Byte order of the host platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    pub(crate) fn read_f32(self, bytes: [u8; 4]) -> f32 {
        match self {
            Self::Little => f32::from_le_bytes(bytes),
            Self::Big => f32::from_be_bytes(bytes),
        }
    }

    pub(crate) fn write_f32(self, value: f32) -> [u8; 4] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }
}

/// How the four rotation bytes are interpreted before `(c - 128) / 128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RotationEncoding {
    /// Bytes are two's-complement `i8`. Decoded values lie in
    /// `[-2.0, -0.0078125]`.
    #[default]
    Signed,
    /// Bytes are `u8`. Decoded values lie in `[-1.0, 0.9921875]`.
    Unsigned,
}

/// Options controlling how records are decoded and encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    pub byte_order: ByteOrder,
    pub rotation: RotationEncoding,
}

impl DecodeOptions {
    #[must_use]
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationEncoding) -> Self {
        self.rotation = rotation;
        self
    }
}
