//! Random access by record index.
//!
//! Every record sits at `index * 32`, so a single record can be fetched with
//! one seek and one 32-byte read.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use splat_decode::{DecodeOptions, RECORD_SIZE, Splat, decode_record};

use crate::error::{Error, Result};

/// Number of whole records in a seekable source, or `Malformed` if it ends
/// in a fragment. Leaves the cursor at the end of the source.
#[allow(clippy::cast_possible_truncation)]
fn count_records<R: Seek>(reader: &mut R) -> Result<usize> {
    let end = reader.seek(SeekFrom::End(0))?;
    let stride = RECORD_SIZE as u64;
    let remainder = end % stride;
    if remainder != 0 {
        return Err(Error::Malformed {
            offset: end - remainder,
            len: remainder as usize,
        });
    }
    usize::try_from(end / stride).map_err(|_| Error::Malformed { offset: end, len: 0 })
}

/// Read the record at `index` from a seekable source.
pub fn read_splat_at<R: Read + Seek>(
    reader: &mut R,
    index: usize,
    options: DecodeOptions,
) -> Result<Splat> {
    let len = count_records(reader)?;
    if index >= len {
        return Err(Error::IndexOutOfRange { index, len });
    }
    read_record_at(reader, index, options)
}

fn read_record_at<R: Read + Seek>(
    reader: &mut R,
    index: usize,
    options: DecodeOptions,
) -> Result<Splat> {
    reader.seek(SeekFrom::Start((index * RECORD_SIZE) as u64))?;
    let mut record = [0u8; RECORD_SIZE];
    reader.read_exact(&mut record)?;
    Ok(decode_record(&record, options))
}

/// An open splat file supporting point lookups.
///
/// The length is validated once at open time; a file ending in a partial
/// record is rejected up front rather than on the first unlucky lookup.
#[derive(Debug)]
pub struct SplatFile {
    file: File,
    path: PathBuf,
    len: usize,
    options: DecodeOptions,
}

impl SplatFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, DecodeOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| Error::from_io(path, e))?;
        let len = count_records(&mut file).map_err(|e| e.with_path(path))?;
        tracing::debug!("Opened {} for indexed access: {len} records", path.display());

        Ok(Self {
            file,
            path: path.to_path_buf(),
            len,
            options,
        })
    }

    /// Number of records in the file.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the record at `index`.
    pub fn get(&mut self, index: usize) -> Result<Splat> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        read_record_at(&mut self.file, index, self.options).map_err(|e| e.with_path(&self.path))
    }
}
