//! Whole-buffer decoding.

use crate::error::{DecodeError, DecodeResult};
use crate::options::DecodeOptions;
use crate::record::{decode_record, encode_record};
use crate::{RECORD_SIZE, Splat};

/// Number of records in a buffer of `len` bytes.
///
/// Fails if `len` is not a multiple of [`RECORD_SIZE`].
pub fn record_count(len: usize) -> DecodeResult<usize> {
    let remainder = len % RECORD_SIZE;
    if remainder != 0 {
        return Err(DecodeError::MalformedLength { len, remainder });
    }
    Ok(len / RECORD_SIZE)
}

/// Decode every record in `bytes`, in order.
///
/// The length is validated before anything is decoded; a trailing fragment
/// fails the whole call rather than yielding a partial result.
pub fn decode_splats(bytes: &[u8], options: DecodeOptions) -> DecodeResult<Vec<Splat>> {
    let count = record_count(bytes.len())?;
    let mut splats = Vec::with_capacity(count);
    for chunk in bytes.chunks_exact(RECORD_SIZE) {
        let record: &[u8; RECORD_SIZE] = chunk
            .try_into()
            .map_err(|_| DecodeError::TruncatedRecord { len: chunk.len() })?;
        splats.push(decode_record(record, options));
    }
    Ok(splats)
}

/// Encode splats into a contiguous buffer, one record per splat.
#[must_use]
pub fn encode_splats(splats: &[Splat], options: DecodeOptions) -> Vec<u8> {
    let mut out = Vec::with_capacity(splats.len() * RECORD_SIZE);
    for splat in splats {
        out.extend_from_slice(&encode_record(splat, options));
    }
    out
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::options::{ByteOrder, RotationEncoding};
    use proptest::prelude::*;

    #[test]
    fn empty_buffer_is_empty_cloud() {
        assert_eq!(decode_splats(&[], DecodeOptions::default()), Ok(Vec::new()));
    }

    #[test]
    fn single_record() {
        let splats = decode_splats(&[0; 32], DecodeOptions::default()).unwrap();
        assert_eq!(splats.len(), 1);
    }

    #[test]
    fn trailing_fragment_is_malformed() {
        assert_eq!(
            decode_splats(&[0; 31], DecodeOptions::default()),
            Err(DecodeError::MalformedLength {
                len: 31,
                remainder: 31
            })
        );
        assert_eq!(
            decode_splats(&[0; 70], DecodeOptions::default()),
            Err(DecodeError::MalformedLength {
                len: 70,
                remainder: 6
            })
        );
    }

    #[test]
    fn preserves_file_order() {
        let mut bytes = vec![0u8; 3 * RECORD_SIZE];
        for i in 0..3 {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f32;
            bytes[i * RECORD_SIZE..i * RECORD_SIZE + 4].copy_from_slice(&x.to_le_bytes());
        }
        let splats = decode_splats(&bytes, DecodeOptions::default()).unwrap();
        let xs: Vec<f32> = splats.iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    fn any_options() -> impl Strategy<Value = DecodeOptions> {
        (any::<bool>(), any::<bool>()).prop_map(|(big, unsigned)| DecodeOptions {
            byte_order: if big { ByteOrder::Big } else { ByteOrder::Little },
            rotation: if unsigned {
                RotationEncoding::Unsigned
            } else {
                RotationEncoding::Signed
            },
        })
    }

    proptest! {
        #[test]
        fn count_matches_length(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let result = decode_splats(&bytes, DecodeOptions::default());
            if bytes.len() % RECORD_SIZE == 0 {
                prop_assert_eq!(result.unwrap().len(), bytes.len() / RECORD_SIZE);
            } else {
                let is_malformed = matches!(result, Err(DecodeError::MalformedLength { .. }));
                prop_assert!(is_malformed);
            }
        }

        #[test]
        fn encode_decode_is_byte_exact(
            records in proptest::collection::vec(any::<[u8; 32]>(), 0..16),
            options in any_options(),
        ) {
            let bytes: Vec<u8> = records.concat();
            let splats = decode_splats(&bytes, options).unwrap();
            prop_assert_eq!(encode_splats(&splats, options), bytes);
        }

        #[test]
        fn decoded_fields_survive_reencoding(
            position in any::<[f32; 3]>(),
            scale in any::<[f32; 3]>(),
            color in any::<[u8; 4]>(),
            rotation in any::<[u8; 4]>(),
            options in any_options(),
        ) {
            let mut record = [0u8; RECORD_SIZE];
            for (i, v) in position.iter().chain(scale.iter()).enumerate() {
                record[i * 4..i * 4 + 4].copy_from_slice(&options.byte_order.write_f32(*v));
            }
            record[24..28].copy_from_slice(&color);
            record[28..32].copy_from_slice(&rotation);

            let first = decode_record(&record, options);
            let second = decode_record(&encode_record(&first, options), options);
            prop_assert_eq!(first.position.to_array().map(f32::to_bits), second.position.to_array().map(f32::to_bits));
            prop_assert_eq!(first.scale.to_array().map(f32::to_bits), second.scale.to_array().map(f32::to_bits));
            prop_assert_eq!(first.color, second.color);
            prop_assert_eq!(first.rotation, second.rotation);
        }
    }
}
