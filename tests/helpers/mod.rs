// tests/helpers/mod.rs
// Helper functions for testing geneconv-viz

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Header block as GENECONV writes it ahead of the fragment tables
pub const GENECONV_HEADER: &str = "\
#  GENECONV  Version 1.81
#  Input file: mtdna.fasta
#  Sequences: 3   Alignment length: 16569
#
#  Global Inner fragments
#                                 Sim     BC KA     Aligned Offsets         In Seq1         In Seq2
#  Names                         Pvalue  Pvalue    Begin  End   Len   Begin  End   Begin  End   Poly Dif Tot MisM Pen.
";

/// Three significant PI fragments covering 1200..=2400, 3000..=4800 and
/// 4500..=5200, one of them using the Fortran exponent marker.
pub const THREE_PI_FRAGMENTS: &str = "\
PI  s1;s2   0.0010  0.0100  1200  2400  1201  1200  2400  1200  2400  12  0  12  0  None
PI  s1;s3   1.2D-03 0.0300  3000  4800  1801  3000  4800  3000  4800  20  0  20  0  None
PI  s2;s3   0.0400  0.2000  4500  5200   701  4500  5200  4500  5200   9  0   9  0  None
";

/// Write a GENECONV-style file into `dir` and return its path
pub fn write_geneconv_file(dir: &Path, name: &str, fragments: &str) -> PathBuf {
    let path = dir.join(name);
    let contents = format!("{}{}#  End of table\n", GENECONV_HEADER, fragments);
    fs::write(&path, contents).expect("fixture should be writable");
    path
}

/// Parse a run summary file into a map of field to value
pub fn parse_summary_file(filepath: &Path) -> Result<HashMap<String, String>, String> {
    let contents = fs::read_to_string(filepath)
        .map_err(|e| format!("Could not read summary file {}: {}", filepath.display(), e))?;

    let mut field_map = HashMap::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() >= 2 {
            field_map.insert(parts[0].trim().to_string(), parts[1].trim().to_string());
        }
    }

    let required_fields = [
        "File name",
        "Fragments parsed",
        "Significant fragments",
        "Coverage length",
        "Total coverage",
        "Duplication coverage",
        "Duplication %",
        "Tail coverage",
        "Tail %",
        "Path",
        "Creation time",
    ];
    for field in required_fields {
        if !field_map.contains_key(field) {
            return Err(format!("Required field missing in summary: {}", field));
        }
    }

    Ok(field_map)
}

/// Read a coverage TSV back into a vector indexed by position
pub fn read_coverage_tsv(filepath: &Path) -> Vec<u32> {
    fs::read_to_string(filepath)
        .expect("coverage table should exist")
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| {
            let (_, count) = line.split_once('\t').expect("two columns");
            count.parse().expect("numeric coverage")
        })
        .collect()
}
