// src/plotting/stats.rs
//
// Region and per-base statistics for the coverage plot

pub const DEFAULT_TAIL_LEN: u64 = 750;

/// Inclusive coordinate interval of the duplication under study
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicationRegion {
    pub start: u64,
    pub end: u64,
}

impl DuplicationRegion {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// First position of the last `tail_len` bp, saturating at 0
    pub fn tail_start(&self, tail_len: u64) -> u64 {
        self.end.saturating_sub(tail_len)
    }
}

/// Coverage concentration in the duplication region and its tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionStats {
    pub total_sum: u64,
    pub dup_sum: u64,
    /// Sum over `tail_start..=end`. A tail longer than the region's end
    /// starts at position 0 rather than wrapping.
    pub tail_sum: u64,
    /// Rounded share of `total_sum` inside the duplication region
    pub dup_pct: u32,
    /// Rounded share of `total_sum` inside the tail
    pub tail_pct: u32,
    pub tail_start: u64,
}

/// Compute the sums and percentages shown in the plot legend.
///
/// Both intervals are inclusive and clipped to the array. Percentages are
/// rounded half to even and are 0 when the array sums to 0.
pub fn calculate_region_stats(
    counts: &[u32],
    region: &DuplicationRegion,
    tail_len: u64,
) -> RegionStats {
    let tail_start = region.tail_start(tail_len);
    let total_sum: u64 = counts.iter().map(|&c| c as u64).sum();
    let dup_sum = sum_inclusive(counts, region.start, region.end);
    let tail_sum = sum_inclusive(counts, tail_start, region.end);

    RegionStats {
        total_sum,
        dup_sum,
        tail_sum,
        dup_pct: percentage(dup_sum, total_sum),
        tail_pct: percentage(tail_sum, total_sum),
        tail_start,
    }
}

/// Sum of `counts[start..=end]`, clipped to the array; empty when reversed
pub fn sum_inclusive(counts: &[u32], start: u64, end: u64) -> u64 {
    if start > end || start >= counts.len() as u64 {
        return 0;
    }
    let stop = end.min(counts.len() as u64 - 1) as usize;
    counts[start as usize..=stop].iter().map(|&c| c as u64).sum()
}

fn percentage(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round_ties_even() as u32
}

/// Summary of the per-base coverage values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoverageStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub stddev: f64,
}

/// Calculate statistics over every position of a coverage array
///
/// # Arguments
/// * `counts` - Per-base coverage
///
/// # Returns
/// * `CoverageStats` - Computed statistics (all zero for an empty array)
pub fn calculate_per_base_stats(counts: &[u32]) -> CoverageStats {
    if counts.is_empty() {
        return CoverageStats::default();
    }

    let mut values = counts.to_vec();
    values.sort_unstable();

    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;

    let median = if values.len() % 2 == 0 {
        let mid = values.len() / 2;
        (values[mid - 1] as f64 + values[mid] as f64) / 2.0
    } else {
        values[values.len() / 2] as f64
    };

    let min = values[0] as f64;
    let max = values[values.len() - 1] as f64;

    // Sample standard deviation
    let variance = if values.len() > 1 {
        values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / (values.len() - 1) as f64
    } else {
        0.0
    };

    CoverageStats {
        mean,
        median,
        min,
        max,
        stddev: variance.sqrt(),
    }
}
