//! Print a summary of a splat file.
//!
//! Run: `cargo run -p splat --features tools --bin splat_info -- <file.splat> [--big-endian] [--unsigned-rotation]`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use splat::{Bounds, ByteOrder, DecodeOptions, RotationEncoding, Splat, read_splat_file_with};
use tracing_subscriber::{EnvFilter, fmt};

/// Number of splats echoed in the summary.
const PREVIEW_COUNT: usize = 5;

struct Args {
    path: PathBuf,
    options: DecodeOptions,
}

fn parse_args() -> Result<Args, String> {
    let mut path = None;
    let mut options = DecodeOptions::default();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--big-endian" => options = options.with_byte_order(ByteOrder::Big),
            "--unsigned-rotation" => options = options.with_rotation(RotationEncoding::Unsigned),
            flag if flag.starts_with("--") => return Err(format!("unknown flag: {flag}")),
            _ if path.is_some() => return Err(format!("unexpected argument: {arg}")),
            _ => path = Some(PathBuf::from(&arg)),
        }
    }

    let path = path.ok_or("usage: splat_info <file.splat> [--big-endian] [--unsigned-rotation]")?;
    Ok(Args { path, options })
}

fn splat_json(splat: &Splat) -> serde_json::Value {
    serde_json::json!({
        "position": splat.position.to_array(),
        "scale": splat.scale.to_array(),
        "color": splat.color,
        "rotation": splat.rotation.to_array(),
    })
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let splats = match read_splat_file_with(&args.path, args.options) {
        Ok(splats) => splats,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let bounds = Bounds::from_splats(&splats);
    if let Some(bounds) = &bounds {
        tracing::info!(
            "Bounds: min={:?} max={:?} size={:?}",
            bounds.min,
            bounds.max,
            bounds.size()
        );
    }

    let summary = serde_json::json!({
        "path": args.path.display().to_string(),
        "splat_count": splats.len(),
        "bounds": bounds.map(|b| serde_json::json!({
            "min": b.min.to_array(),
            "max": b.max.to_array(),
        })),
        "first_splats": splats.iter().take(PREVIEW_COUNT).map(splat_json).collect::<Vec<_>>(),
    });

    match serde_json::to_string_pretty(&summary) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to format summary: {e}");
            ExitCode::FAILURE
        }
    }
}
