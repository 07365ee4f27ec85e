/// Manifest of compressed chromosome list files
///
/// The manifest lists artifact file names (not paths), one per line, sorted
/// so repeated runs produce identical files. It is consumed by the later
/// packaging step, which resolves names relative to the same directory.
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::compress::GZIP_SUFFIX;
use crate::descriptor::DESCRIPTOR_SUFFIX;
use crate::identifiers::validate_identifier;

pub const MANIFEST_FILE_NAME: &str = "chromosome_list_files.txt";

/// Reject manifest names that leave the output directory or collide with
/// a descriptor or its compressed artifact
pub fn validate_manifest_name(name: &str) -> Result<()> {
    validate_identifier(name).with_context(|| format!("Invalid manifest name '{}'", name.escape_debug()))?;

    let artifact_suffix = format!("{DESCRIPTOR_SUFFIX}.{GZIP_SUFFIX}");
    if name.ends_with(DESCRIPTOR_SUFFIX) || name.ends_with(&artifact_suffix) {
        bail!("Manifest name '{name}' would overwrite a chromosome list file");
    }
    Ok(())
}

/// Write the manifest and return the number of entries written
pub fn write_manifest<P: AsRef<Path>>(path: P, artifacts: &[PathBuf]) -> Result<usize> {
    let path = path.as_ref();

    let mut names = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        match artifact.file_name() {
            Some(name) => names.push(name.to_string_lossy().into_owned()),
            None => bail!("Artifact path has no file name: {}", artifact.display()),
        }
    }
    names.sort();
    names.dedup();

    let file = File::create(path)
        .with_context(|| format!("Failed to create manifest: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for name in &names {
        writeln!(writer, "{name}")?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

    Ok(names.len())
}

/// Count the entries of a manifest, ignoring empty lines
pub fn count_manifest_entries<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open manifest: {}", path.display()))?;

    let mut count = 0;
    for line in BufReader::new(file).lines() {
        if !line?.trim().is_empty() {
            count += 1;
        }
    }
    Ok(count)
}
