/// End-to-end generation of chromosome list artifacts
///
/// Reads the identifier list, writes one descriptor per identifier, gzips
/// each descriptor and records the compressed names in a manifest. Only
/// artifacts produced by this run are compressed and listed; leftovers from
/// earlier runs in the same directory are ignored.
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::compress::{gzip_file, CompressOptions};
use crate::descriptor::{write_descriptor, DescriptorFormat};
use crate::identifiers::read_identifiers;
use crate::manifest::{
    count_manifest_entries, validate_manifest_name, write_manifest, MANIFEST_FILE_NAME,
};

/// Where and how artifacts are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub manifest_name: String,
    pub format: DescriptorFormat,
    pub compress: CompressOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: PathBuf::from("."),
            manifest_name: MANIFEST_FILE_NAME.to_string(),
            format: DescriptorFormat::default(),
            compress: CompressOptions::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(&self.manifest_name)
    }
}

/// Outcome of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub identifiers: Vec<String>,
    pub blank_lines: usize,
    pub duplicates: usize,
    pub artifacts: Vec<PathBuf>,
    pub manifest: PathBuf,
    /// Lines counted in the manifest after writing it
    pub count: usize,
}

/// Generate `<id>_chromosomelist.txt.gz` for every identifier in `input`
/// plus the manifest listing them
pub fn generate_chromosome_lists<P: AsRef<Path>>(
    input: P,
    config: &GeneratorConfig,
) -> Result<GenerationReport> {
    let input = input.as_ref();

    // Validation happens before anything touches the output directory
    validate_manifest_name(&config.manifest_name)?;
    let list = read_identifiers(input)?;
    let blank_lines = list.blank_lines();
    let duplicates = list.duplicates();

    info!(
        "Read {} identifiers from {}",
        list.len(),
        input.display()
    );
    for id in list.iter() {
        info!("  {id}");
    }

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let identifiers = list.into_vec();
    let mut artifacts = Vec::with_capacity(identifiers.len());
    for id in &identifiers {
        let descriptor = write_descriptor(&config.output_dir, id, config.format)?;
        let artifact = gzip_file(&descriptor, &config.compress)?;
        debug!("Wrote {}", artifact.display());
        artifacts.push(artifact);
    }

    let manifest = config.manifest_path();
    write_manifest(&manifest, &artifacts)?;
    let count = count_manifest_entries(&manifest)?;

    info!(
        "Wrote {} compressed chromosome list files, manifest: {}",
        count,
        manifest.display()
    );

    Ok(GenerationReport {
        identifiers,
        blank_lines,
        duplicates,
        artifacts,
        manifest,
        count,
    })
}
