/// Chromosome list descriptor records
///
/// A descriptor states a sequence's name, its topology count and topology
/// label, tab-separated, as the sole content of `<id>_chromosomelist.txt`.
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DESCRIPTOR_SUFFIX: &str = "_chromosomelist.txt";
pub const TOPOLOGY_COUNT: &str = "1";
pub const TOPOLOGY: &str = "Monopartite";

/// Layout of the descriptor record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorFormat {
    /// Terminate the last field with a tab, as downstream consumers of the
    /// historical files expect
    pub trailing_tab: bool,
}

impl Default for DescriptorFormat {
    fn default() -> Self {
        DescriptorFormat { trailing_tab: true }
    }
}

/// Format the record for one identifier
pub fn descriptor_record(id: &str, format: DescriptorFormat) -> String {
    let mut record = [id, TOPOLOGY_COUNT, TOPOLOGY].join("\t");
    if format.trailing_tab {
        record.push('\t');
    }
    record
}

pub fn descriptor_file_name(id: &str) -> String {
    format!("{id}{DESCRIPTOR_SUFFIX}")
}

/// Write `<dir>/<id>_chromosomelist.txt`, overwriting any previous file
pub fn write_descriptor<P: AsRef<Path>>(
    dir: P,
    id: &str,
    format: DescriptorFormat,
) -> Result<PathBuf> {
    let path = dir.as_ref().join(descriptor_file_name(id));
    fs::write(&path, descriptor_record(id, format))
        .with_context(|| format!("Failed to write descriptor file: {}", path.display()))?;
    Ok(path)
}
