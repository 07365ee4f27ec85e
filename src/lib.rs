// Library exports for chromlist
pub mod compress;
pub mod descriptor;
pub mod generator;
pub mod identifiers;
pub mod manifest;

pub use generator::{generate_chromosome_lists, GenerationReport, GeneratorConfig};
