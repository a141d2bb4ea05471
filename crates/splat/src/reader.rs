//! Sequential splat reading.
//!
//! Records are pulled 32 bytes at a time from any [`Read`] source, so a file
//! is never loaded into memory twice.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::iter::FusedIterator;
use std::path::Path;

use splat_decode::{DecodeOptions, RECORD_SIZE, Splat, decode_record, decode_splats};

use crate::error::{Error, Result};

/// Streaming decoder over a byte source.
///
/// Yields one [`Splat`] per 32-byte record in source order. A trailing
/// fragment or a read failure is yielded once as an error, after which the
/// iterator is exhausted.
#[derive(Debug)]
pub struct SplatReader<R> {
    inner: R,
    options: DecodeOptions,
    records_read: usize,
    finished: bool,
}

impl<R: Read> SplatReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, DecodeOptions::default())
    }

    pub fn with_options(inner: R, options: DecodeOptions) -> Self {
        Self {
            inner,
            options,
            records_read: 0,
            finished: false,
        }
    }

    /// Number of complete records decoded so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Byte offset of the next record.
    pub fn offset(&self) -> u64 {
        (self.records_read * RECORD_SIZE) as u64
    }

    /// Decode the remaining records, failing on the first error.
    pub fn collect_all(self) -> Result<Vec<Splat>> {
        self.collect()
    }

    /// Give back the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for SplatReader<R> {
    type Item = Result<Splat>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut record = [0u8; RECORD_SIZE];
        match read_record(&mut self.inner, &mut record) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(RECORD_SIZE) => {
                self.records_read += 1;
                Some(Ok(decode_record(&record, self.options)))
            }
            Ok(len) => {
                self.finished = true;
                let offset = self.offset();
                tracing::warn!(
                    "Trailing {len}-byte fragment after {} records",
                    self.records_read
                );
                Some(Err(Error::Malformed { offset, len }))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(Error::Io(e)))
            }
        }
    }
}

impl<R: Read> FusedIterator for SplatReader<R> {}

/// Fill `buf` from `reader`, stopping early only at end of input.
///
/// Returns the number of bytes read; anything short of `buf.len()` means the
/// source is exhausted.
fn read_record(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Decode every record from a byte source.
pub fn read_splats<R: Read>(reader: R) -> Result<Vec<Splat>> {
    SplatReader::new(reader).collect_all()
}

/// Decode every record from a byte source with explicit options.
pub fn read_splats_with<R: Read>(reader: R, options: DecodeOptions) -> Result<Vec<Splat>> {
    SplatReader::with_options(reader, options).collect_all()
}

/// Decode splats already held in memory.
///
/// The whole buffer is validated before decoding, so a trailing fragment
/// fails with [`Error::Decode`] and nothing is returned.
pub fn read_splats_from_bytes(bytes: &[u8], options: DecodeOptions) -> Result<Vec<Splat>> {
    let splats = decode_splats(bytes, options)?;
    tracing::debug!("Decoded {} splats from {} bytes", splats.len(), bytes.len());
    Ok(splats)
}

/// Read and decode a splat file.
///
/// The file is closed before returning, whether decoding succeeded or not.
///
/// Rotation bytes are read as signed with the default options. Files
/// produced for the WebGL viewer store them unsigned and need
/// [`RotationEncoding::Unsigned`](splat_decode::RotationEncoding::Unsigned)
/// via [`read_splat_file_with`].
pub fn read_splat_file(path: impl AsRef<Path>) -> Result<Vec<Splat>> {
    read_splat_file_with(path, DecodeOptions::default())
}

/// Read and decode a splat file with explicit options.
pub fn read_splat_file_with(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Vec<Splat>> {
    let path = path.as_ref();
    tracing::debug!("Opening splat file {}", path.display());

    let file = File::open(path).map_err(|e| Error::from_io(path, e))?;
    let splats = read_splats_with(BufReader::new(file), options).map_err(|e| {
        tracing::error!("Failed to decode {}: {}", path.display(), e);
        e.with_path(path)
    })?;

    tracing::info!("Loaded {} splats from {}", splats.len(), path.display());
    Ok(splats)
}
