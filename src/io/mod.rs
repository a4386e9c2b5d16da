// src/io/mod.rs
// IO module for geneconv-viz: GENECONV fragment parsing, coverage writing

pub mod summary;

use crate::coverage::{FragmentKind, FragmentRecord};
use crate::error::GeneConvError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Minimum whitespace-separated tokens in a fragment line
const MIN_FRAGMENT_TOKENS: usize = 7;

/// Read all PI/PO/GI fragment records from a GENECONV output file.
///
/// Parsing is best effort: lines that are not fragment lines, or that have
/// too few or non-numeric fields, are skipped without error.
pub fn load_fragments(path: &Path) -> Result<Vec<FragmentRecord>, GeneConvError> {
    if !path.exists() {
        return Err(GeneConvError::NotFound(path.to_path_buf()));
    }

    let mut reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = String::from_utf8_lossy(&buf);
        if FragmentKind::from_prefix(&line).is_none() {
            continue;
        }
        match parse_fragment_line(&line) {
            Some(record) => records.push(record),
            None => debug!("Skipping malformed fragment line {}: {}", line_no, line.trim_end()),
        }
    }

    if records.is_empty() {
        return Err(GeneConvError::NoData);
    }
    info!("Parsed {} fragments from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a single fragment line.
///
/// Expected layout is `tag ? SimP ? Begin End Length ...` with the tag in
/// the first column; indented lines are not fragments. SimP may use the
/// Fortran `D` exponent marker (`1.5D-03`). Coordinates are unsigned, so a
/// line with a negative Begin, End or Length is dropped.
pub fn parse_fragment_line(line: &str) -> Option<FragmentRecord> {
    let kind = FragmentKind::from_prefix(line)?;
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FRAGMENT_TOKENS {
        return None;
    }
    let sim_p = parse_sim_p(fields[2])?;
    let begin = fields[4].parse().ok()?;
    let end = fields[5].parse().ok()?;
    let length = fields[6].parse().ok()?;
    Some(FragmentRecord {
        kind,
        sim_p,
        begin,
        end,
        length,
    })
}

/// Parse a p-value written with either an `e` or a Fortran `D` exponent
pub fn parse_sim_p(field: &str) -> Option<f64> {
    field.replace(['D', 'd'], "e").parse().ok()
}

/// Write the coverage array as `position<TAB>coverage` lines
pub fn write_coverage_tsv(path: &Path, counts: &[u32]) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "#position\tcoverage")?;
    for (pos, count) in counts.iter().enumerate() {
        writeln!(out, "{}\t{}", pos, count)?;
    }
    out.flush()?;
    Ok(())
}
