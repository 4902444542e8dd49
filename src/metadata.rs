//! Embedded image metadata, read through the EXIF library.
//!
//! The extractor is an opaque collaborator as far as callers are concerned:
//! it hands back a flat tag-name → description mapping and never fails.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Key of the sentinel entry reported when extraction fails.
pub const ERROR_KEY: &str = "Error";

const ERROR_DESCRIPTION: &str = "Failed to extract metadata";

/// Extract every tag the EXIF reader finds in `path`, as name → description.
///
/// Any failure (unreadable file, unsupported format, no metadata container)
/// collapses into a single sentinel entry under [`ERROR_KEY`]. Callers treat
/// that key as a soft failure; nothing is ever raised outward.
pub fn extract(path: &Path) -> BTreeMap<String, String> {
    match read_tags(path) {
        Ok(tags) => tags,
        Err(err) => {
            debug!(file = %path.display(), %err, "metadata extraction failed");
            BTreeMap::from([(ERROR_KEY.to_string(), ERROR_DESCRIPTION.to_string())])
        }
    }
}

fn read_tags(path: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader)?;

    let mut tags = BTreeMap::new();
    for field in exif.fields() {
        tags.insert(
            field.tag.to_string(),
            field.display_value().with_unit(&exif).to_string(),
        );
    }
    Ok(tags)
}
