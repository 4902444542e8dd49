use crate::convert::ImageFormat;
use crate::shelf::ShelfFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Book-shelf record and image utilities
#[derive(Parser, Debug)]
#[command(name = "shelftools", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse the built-in book shelf, print it, then append a new record
    Shelf {
        /// Run only one of the two document formats
        #[arg(long, value_enum)]
        format: Option<Format>,
    },

    /// Convert an image to JPG or PNG
    Convert {
        /// Path to the source image
        input: PathBuf,

        /// Target format
        #[arg(long = "to", value_enum)]
        to: Target,

        /// Output path. Defaults to the source file name with the target
        /// extension appended, next to the source.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show dimensions and embedded metadata for image files
    Inspect {
        /// Image files to inspect; a failing file is skipped, not fatal
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

/// Shelf document format selector
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Xml,
    Json,
}

impl From<Format> for ShelfFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Xml => ShelfFormat::Xml,
            Format::Json => ShelfFormat::Json,
        }
    }
}

/// Conversion target selector
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Jpg,
    Png,
}

impl From<Target> for ImageFormat {
    fn from(target: Target) -> Self {
        match target {
            Target::Jpg => ImageFormat::Jpeg,
            Target::Png => ImageFormat::Png,
        }
    }
}
