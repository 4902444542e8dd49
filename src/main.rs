use anyhow::{Context, Result};
use clap::Parser;
use shelftools::cli::{Cli, Command};
use shelftools::convert::{self, ImageFormat};
use shelftools::item::ImageItem;
use shelftools::shelf;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Shelf { format } => shelf::run(format.map(Into::into)),
        Command::Convert { input, to, output } => run_convert(&input, to.into(), output),
        Command::Inspect { inputs } => run_inspect(&inputs),
    }
}

fn run_convert(input: &Path, format: ImageFormat, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| default_output(input, format));
    convert::convert(input, &output, format)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    eprintln!("Saved {}", output.display());
    Ok(())
}

/// `photo.png` converted to JPG lands next to the source as `photo.png.jpg`:
/// the target extension is appended to the full original name.
fn default_output(input: &Path, format: ImageFormat) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}.{}", name, format.extension()))
}

fn run_inspect(inputs: &[PathBuf]) -> Result<()> {
    let mut printed_any = false;
    for path in inputs {
        match ImageItem::load(path) {
            Ok(item) => {
                if printed_any {
                    println!();
                }
                print_item(&item);
                printed_any = true;
            }
            // One failing file does not abort the batch.
            Err(err) => warn!(file = %path.display(), %err, "skipping file"),
        }
    }
    Ok(())
}

fn print_item(item: &ImageItem) {
    println!("Name: {}", item.name);
    println!("Width: {}", item.width);
    println!("Height: {}", item.height);
    for (tag, description) in &item.metadata {
        println!("{tag}: {description}");
    }
}
