
use chromlist::manifest::MANIFEST_FILE_NAME;
use chromlist::{generate_chromosome_lists, GeneratorConfig};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;
use test_utils::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9._-]{0,15}"
}

/// Property: manifest lines == unique identifiers == reported count
#[test]
fn prop_manifest_matches_unique_identifiers() {
    proptest!(ProptestConfig::with_cases(32), |(ids in prop::collection::vec(identifier(), 0..20))| {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("names.txt");
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        create_identifier_file(&input, &refs);
        let out = temp_dir.path().join("out");

        let config = GeneratorConfig { output_dir: out.clone(), ..GeneratorConfig::default() };
        let report = generate_chromosome_lists(&input, &config).unwrap();

        let unique: BTreeSet<&str> = refs.iter().copied().collect();
        let lines = manifest_lines(&out.join(MANIFEST_FILE_NAME));

        prop_assert_eq!(report.count, unique.len());
        prop_assert_eq!(lines.len(), unique.len());

        let expected: Vec<String> = unique
            .iter()
            .map(|id| format!("{id}_chromosomelist.txt.gz"))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(lines, expected);
    });
}

/// Property: every artifact decompresses to exactly its record
#[test]
fn prop_artifact_content() {
    proptest!(ProptestConfig::with_cases(32), |(ids in prop::collection::btree_set(identifier(), 1..10))| {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("names.txt");
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        create_identifier_file(&input, &refs);

        let config = GeneratorConfig {
            output_dir: temp_dir.path().to_path_buf(),
            ..GeneratorConfig::default()
        };
        generate_chromosome_lists(&input, &config).unwrap();

        for id in &ids {
            let bytes = gunzip(&artifact_path(temp_dir.path(), id));
            let expected = format!("{id}\t1\tMonopartite\t").into_bytes();
            prop_assert_eq!(bytes, expected);
            let txt = temp_dir.path().join(format!("{id}_chromosomelist.txt"));
            prop_assert!(!txt.exists(), "uncompressed descriptor left for {}", id);
        }
        let names = fs::read_dir(temp_dir.path()).unwrap().count();
        // artifacts + manifest + input
        prop_assert_eq!(names, ids.len() + 2);
    });
}
