//! Read Gaussian splat files.
//!
//! This crate wraps [`splat_decode`] with file and stream readers:
//!
//! - [`read_splat_file`]: Decode a whole file in one sequential pass
//! - [`SplatReader`]: Stream records from any [`std::io::Read`] source
//! - [`SplatFile`]: Seek straight to a record by index
//! - [`to_scatter_points`]: Reduce splats to `{position, color}` markers for
//!   a scatter plotter
//!
//! # Example
//!
//! ```no_run
//! use splat::{Bounds, read_splat_file, to_scatter_points};
//!
//! let splats = read_splat_file("scene.splat")?;
//! if let Some(bounds) = Bounds::from_splats(&splats) {
//!     println!("{} splats spanning {:?}", splats.len(), bounds.size());
//! }
//! let points = to_scatter_points(&splats);
//! # Ok::<(), splat::Error>(())
//! ```

mod error;

pub mod indexed;
pub mod reader;
pub mod scatter;

pub use error::{Error, Result};
pub use indexed::{SplatFile, read_splat_at};
pub use reader::{
    SplatReader, read_splat_file, read_splat_file_with, read_splats, read_splats_from_bytes,
    read_splats_with,
};
pub use scatter::{Bounds, ScatterPoint, to_scatter_points};

// Re-export the decoder types so most users only depend on this crate.
pub use splat_decode::{ByteOrder, DecodeError, DecodeOptions, RECORD_SIZE, RotationEncoding, Splat};
