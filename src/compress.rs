//! Gzip compression of descriptor files
//!
//! Behaves like `gzip <file>`: `<file>.gz` replaces `<file>` unless the
//! original is explicitly kept. The gzip header carries no modification
//! time and no file name, so identical input gives identical output.

use anyhow::{bail, Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

pub const GZIP_SUFFIX: &str = "gz";
pub const DEFAULT_LEVEL: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    /// 1 (fastest) to 9 (best)
    pub level: u32,
    pub keep_uncompressed: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        CompressOptions {
            level: DEFAULT_LEVEL,
            keep_uncompressed: false,
        }
    }
}

/// Path of the compressed counterpart: `<path>.gz`
pub fn gz_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut name = path.as_ref().as_os_str().to_os_string();
    name.push(".");
    name.push(GZIP_SUFFIX);
    PathBuf::from(name)
}

/// Compress `path` into `<path>.gz` and return the new path
pub fn gzip_file<P: AsRef<Path>>(path: P, options: &CompressOptions) -> Result<PathBuf> {
    let path = path.as_ref();
    if !(1..=9).contains(&options.level) {
        bail!("Compression level must be between 1 and 9, got {}", options.level);
    }

    let output_path = gz_path(path);
    let dir = match output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let input = File::open(path)
        .with_context(|| format!("Failed to open file for compression: {}", path.display()))?;
    let mut reader = BufReader::new(input);

    // Encode next to the target so the final rename stays on one filesystem
    let temp = tempfile::Builder::new()
        .prefix(".chromlist")
        .suffix(".gz.tmp")
        .tempfile_in(&dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    let mut encoder = GzEncoder::new(temp, Compression::new(options.level));
    io::copy(&mut reader, &mut encoder)
        .with_context(|| format!("Failed to compress {}", path.display()))?;
    let mut temp = encoder
        .finish()
        .with_context(|| format!("Failed to finish gzip stream for {}", path.display()))?;
    temp.flush()
        .with_context(|| format!("Failed to flush compressed {}", output_path.display()))?;

    // tempfile creates 0600 files; carry over the source mode like gzip does
    let permissions = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?
        .permissions();
    fs::set_permissions(temp.path(), permissions)
        .with_context(|| format!("Failed to set permissions on {}", temp.path().display()))?;

    temp.persist(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;

    if !options.keep_uncompressed {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
    }

    Ok(output_path)
}
