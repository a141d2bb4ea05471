//! Export a splat file as scatter plot markers.
//!
//! Writes a JSON document with parallel `x`, `y`, `z` and `color` arrays, the
//! shape most 3D scatter plotters accept directly.
//!
//! Run: `cargo run -p splat --features tools --bin splat_export -- <file.splat> <out.json>`

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use splat::{read_splat_file, to_scatter_points};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args: Vec<String> = env::args().collect();
    let (Some(input), Some(output)) = (args.get(1), args.get(2)) else {
        return Err("usage: splat_export <file.splat> <out.json>".into());
    };

    let splats = read_splat_file(input)?;
    let points = to_scatter_points(&splats);

    let document = serde_json::json!({
        "x": points.iter().map(|p| p.position.x).collect::<Vec<_>>(),
        "y": points.iter().map(|p| p.position.y).collect::<Vec<_>>(),
        "z": points.iter().map(|p| p.position.z).collect::<Vec<_>>(),
        "color": points.iter().map(splat::ScatterPoint::css_rgba).collect::<Vec<_>>(),
    });

    let output = Path::new(output);
    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer(&mut writer, &document)?;
    writer.flush()?;

    tracing::info!("Wrote {} markers to {}", points.len(), output.display());
    Ok(())
}
