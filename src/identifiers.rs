/// Reading and validating the list of sequence identifiers
///
/// Each line of the input file names one consensus sequence. Identifiers are
/// used verbatim as file name stems, so anything that could escape the output
/// directory or corrupt the tab-separated record is rejected up front.
use anyhow::{bail, Context, Result};
use indexmap::IndexSet;
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Validated identifiers in order of first occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierList {
    ids: IndexSet<String>,
    blank_lines: usize,
    duplicates: usize,
}

impl IdentifierList {
    /// Build from raw lines. Line numbers in errors are 1-based.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = IdentifierList::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            let id = strip_line_terminator(line.as_ref());

            if id.is_empty() {
                warn!("Skipping blank line {line_no}");
                list.blank_lines += 1;
                continue;
            }

            validate_identifier(id).with_context(|| format!("Invalid identifier on line {line_no}"))?;

            if !list.ids.insert(id.to_string()) {
                warn!("Duplicate identifier '{id}' on line {line_no}, keeping a single artifact");
                list.duplicates += 1;
            }
        }

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of empty lines that were skipped
    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }

    /// Number of repeated identifiers collapsed into an earlier one
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ids.into_iter().collect()
    }
}

/// Read the identifier list file, one identifier per line
pub fn read_identifiers<P: AsRef<Path>>(path: P) -> Result<IdentifierList> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open identifier list: {}", path.display()))?;

    let mut lines = Vec::new();
    for (idx, raw) in BufReader::new(file).split(b'\n').enumerate() {
        let raw = raw
            .with_context(|| format!("Failed to read identifier list: {}", path.display()))?;
        let line = String::from_utf8(raw).with_context(|| {
            format!(
                "Identifier list must be UTF-8: line {} of {} is not",
                idx + 1,
                path.display()
            )
        })?;
        lines.push(line);
    }

    IdentifierList::from_lines(lines)
}

/// Reject identifiers that cannot safely become a file name stem
pub fn validate_identifier(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("Identifier is empty");
    }
    if id.trim().is_empty() {
        bail!("Identifier '{}' is whitespace only", id.escape_debug());
    }
    if id == "." || id == ".." {
        bail!("Identifier '{id}' is a relative directory reference");
    }
    if let Some(c) = id.chars().find(|&c| c == '/' || c == '\\') {
        bail!("Identifier '{id}' contains path separator '{c}'");
    }
    if let Some(c) = id.chars().find(|c| c.is_control()) {
        bail!(
            "Identifier '{}' contains control character {:?}",
            id.escape_debug(),
            c
        );
    }
    Ok(())
}

// Lines handed to `from_lines` directly may still carry "\n" or "\r\n".
fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
