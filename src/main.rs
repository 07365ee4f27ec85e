use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use chromlist::compress::CompressOptions;
use chromlist::descriptor::DescriptorFormat;
use chromlist::manifest::MANIFEST_FILE_NAME;
use chromlist::{generate_chromosome_lists, GeneratorConfig};

/// Parse a gzip compression level (1-9)
fn parse_level(s: &str) -> Result<u32, String> {
    let level: u32 = s
        .parse()
        .map_err(|e| format!("Invalid compression level: {e}"))?;
    if !(1..=9).contains(&level) {
        return Err(format!("Compression level {level} out of range, use 1-9"));
    }
    Ok(level)
}

/// chromlist - Chromosome list files for consensus sequence submission
///
/// Writes <ID>_chromosomelist.txt.gz for every sequence identifier in INPUT
/// and a manifest naming them. Prints the number of files produced.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Identifier list: one sequence name per line
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Directory receiving the chromosome list files and manifest
    #[clap(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Manifest file name, created inside the output directory
    #[clap(short = 'm', long = "manifest", default_value = MANIFEST_FILE_NAME)]
    manifest: String,

    /// Keep the uncompressed chromosome list files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Gzip compression level
    #[clap(short = 'l', long = "level", default_value = "6", value_parser = parse_level)]
    level: u32,

    /// Omit the tab after the last field of each record
    #[clap(long = "no-trailing-tab")]
    no_trailing_tab: bool,

    /// Quiet mode (warnings and errors only)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    let env = env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter);
    env_logger::Builder::from_env(env).init();

    let config = GeneratorConfig {
        output_dir: args.output_dir,
        manifest_name: args.manifest,
        format: DescriptorFormat {
            trailing_tab: !args.no_trailing_tab,
        },
        compress: CompressOptions {
            level: args.level,
            keep_uncompressed: args.keep,
        },
    };

    let report = generate_chromosome_lists(&args.input, &config)?;
    println!("{}", report.count);

    Ok(())
}
