// src/coverage/mod.rs
// Coverage engine: fragment records, significance filtering and
// per-base stacking coverage

use crate::error::GeneConvError;
use log::{debug, warn};
use std::collections::TryReserveError;
use std::fmt;

/// Length of the all-zero array used when no fragment passes the filter
pub const FALLBACK_COVERAGE_LEN: usize = 1000;

/// Positions appended after the largest fragment end
pub const COVERAGE_PADDING: usize = 500;

pub const DEFAULT_P_THRESHOLD: f64 = 0.05;
pub const DEFAULT_MIN_LENGTH: u64 = 500;

/// GENECONV fragment tag (pairwise inner, pairwise outer, global inner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Pi,
    Po,
    Gi,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 3] = [FragmentKind::Pi, FragmentKind::Po, FragmentKind::Gi];

    pub fn tag(&self) -> &'static str {
        match self {
            FragmentKind::Pi => "PI",
            FragmentKind::Po => "PO",
            FragmentKind::Gi => "GI",
        }
    }

    /// Match the tag at the start of `s`, if any
    pub fn from_prefix(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| s.starts_with(kind.tag()))
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One fragment line of GENECONV output.
///
/// `length` is the span GENECONV reports, which is not re-derived from
/// `begin`/`end`. `begin <= end` is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentRecord {
    pub kind: FragmentKind,
    pub sim_p: f64,
    pub begin: u64,
    pub end: u64,
    pub length: u64,
}

/// Thresholds a fragment must meet to contribute to coverage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentFilter {
    /// Fragments need `sim_p` strictly below this
    pub p_threshold: f64,
    /// Fragments need `length` at or above this
    pub min_length: u64,
}

impl Default for FragmentFilter {
    fn default() -> Self {
        Self {
            p_threshold: DEFAULT_P_THRESHOLD,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl FragmentFilter {
    pub fn is_significant(&self, record: &FragmentRecord) -> bool {
        record.sim_p < self.p_threshold && record.length >= self.min_length
    }
}

/// Output of [`calculate_coverage`]
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult {
    /// Records that passed the filter, in input order
    pub filtered: Vec<FragmentRecord>,
    /// Per-base count of filtered fragments, indexed by position
    pub counts: Vec<u32>,
}

impl CoverageResult {
    pub fn is_fallback(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Filter significant fragments and stack them into a dense coverage array.
///
/// The array spans `0..max_end + COVERAGE_PADDING` where `max_end` is taken
/// over *all* records, not only the filtered ones. With no significant
/// fragment a zeroed array of [`FALLBACK_COVERAGE_LEN`] is returned so
/// rendering always has something to draw.
///
/// Fails with [`GeneConvError::CoverageTooLarge`] when the largest end is too
/// big to allocate an array for.
pub fn calculate_coverage(
    records: &[FragmentRecord],
    filter: &FragmentFilter,
) -> Result<CoverageResult, GeneConvError> {
    let filtered: Vec<FragmentRecord> = records
        .iter()
        .filter(|record| filter.is_significant(record))
        .copied()
        .collect();

    if filtered.is_empty() {
        warn!("No fragments met the significance criteria.");
        return Ok(CoverageResult {
            filtered,
            counts: vec![0; FALLBACK_COVERAGE_LEN],
        });
    }

    let max_end = records.iter().map(|r| r.end).max().unwrap_or(0);
    let len = usize::try_from(max_end)
        .ok()
        .and_then(|end| end.checked_add(COVERAGE_PADDING))
        .ok_or(GeneConvError::CoverageTooLarge(max_end))?;
    debug!(
        "{} of {} fragments significant; coverage array length {}",
        filtered.len(),
        records.len(),
        len
    );

    let counts = accumulate(&filtered, len).map_err(|_| GeneConvError::CoverageTooLarge(max_end))?;
    Ok(CoverageResult { filtered, counts })
}

/// Stack inclusive `[begin, end]` intervals into an array of `len` positions.
///
/// Reversed intervals add nothing. Intervals are clipped to the array.
/// Fails if the array cannot be allocated.
pub fn accumulate(records: &[FragmentRecord], len: usize) -> Result<Vec<u32>, TryReserveError> {
    let mut counts: Vec<u32> = Vec::new();
    counts.try_reserve_exact(len)?;
    counts.resize(len, 0);
    let Some(last) = len.checked_sub(1) else {
        return Ok(counts);
    };
    for record in records {
        let begin = record.begin as usize;
        let end = (record.end as usize).min(last);
        // Empty when begin > end
        for pos in begin..=end {
            counts[pos] += 1;
        }
    }
    Ok(counts)
}
