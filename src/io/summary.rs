// src/io/summary.rs
// Tab-separated run summary: inputs, thresholds and region statistics

use crate::coverage::{CoverageResult, FragmentFilter, FragmentKind, FragmentRecord};
use crate::plotting::stats::{DuplicationRegion, RegionStats, calculate_per_base_stats};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything reported about one run, one `field<TAB>value` line each
pub struct RunSummary {
    pub file_name: String,
    pub path: PathBuf,
    /// Parsed fragments per tag, in PI, PO, GI order
    pub fragments_by_kind: [(FragmentKind, usize); 3],
    pub num_fragments: usize,
    pub num_significant: usize,
    pub p_threshold: f64,
    pub min_length: u64,
    pub coverage_length: usize,
    pub mean_coverage: f64,
    pub median_coverage: f64,
    pub max_coverage: f64,
    pub region: DuplicationRegion,
    pub tail_len: u64,
    pub stats: RegionStats,
    pub creation_time: String,
}

impl RunSummary {
    pub fn new(
        path: &Path,
        records: &[FragmentRecord],
        filter: &FragmentFilter,
        coverage: &CoverageResult,
        region: DuplicationRegion,
        tail_len: u64,
        stats: RegionStats,
    ) -> Self {
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let fragments_by_kind =
            FragmentKind::ALL.map(|kind| (kind, records.iter().filter(|r| r.kind == kind).count()));
        let per_base = calculate_per_base_stats(&coverage.counts);
        let creation_time = chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string();

        Self {
            file_name,
            path: path.to_path_buf(),
            fragments_by_kind,
            num_fragments: records.len(),
            num_significant: coverage.filtered.len(),
            p_threshold: filter.p_threshold,
            min_length: filter.min_length,
            coverage_length: coverage.counts.len(),
            mean_coverage: per_base.mean,
            median_coverage: per_base.median,
            max_coverage: per_base.max,
            region,
            tail_len,
            stats,
            creation_time,
        }
    }

    pub fn format(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail
        let _ = self.write_fields(&mut output);
        output
    }

    fn write_fields(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "File name\t{}", self.file_name)?;
        writeln!(output, "Fragments parsed\t{}", self.num_fragments)?;
        for (kind, count) in &self.fragments_by_kind {
            writeln!(output, "{} fragments\t{}", kind, count)?;
        }
        writeln!(output, "Significant fragments\t{}", self.num_significant)?;
        writeln!(output, "P-value threshold\t{}", self.p_threshold)?;
        writeln!(output, "Min fragment length\t{}", self.min_length)?;
        writeln!(output, "Coverage length\t{}", self.coverage_length)?;
        writeln!(output, "Mean coverage\t{:.2}", self.mean_coverage)?;
        writeln!(output, "Median coverage\t{:.2}", self.median_coverage)?;
        writeln!(output, "Max coverage\t{:.0}", self.max_coverage)?;
        writeln!(output, "Total coverage\t{}", self.stats.total_sum)?;
        writeln!(
            output,
            "Duplication region\t{}-{}",
            self.region.start, self.region.end
        )?;
        writeln!(output, "Duplication coverage\t{}", self.stats.dup_sum)?;
        writeln!(output, "Duplication %\t{}", self.stats.dup_pct)?;
        writeln!(
            output,
            "Tail region\t{}-{}",
            self.stats.tail_start, self.region.end
        )?;
        writeln!(output, "Tail length\t{}", self.tail_len)?;
        writeln!(output, "Tail coverage\t{}", self.stats.tail_sum)?;
        writeln!(output, "Tail %\t{}", self.stats.tail_pct)?;
        writeln!(output)?;
        writeln!(output, "Path\t{}", self.path.display())?;
        writeln!(output, "Creation time\t{}", self.creation_time)?;
        Ok(())
    }

    /// Write to a file
    pub fn write_to_file(&self, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let mut file = File::create(output_path)?;
        file.write_all(self.format().as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::calculate_coverage;
    use crate::plotting::stats::calculate_region_stats;

    fn record(kind: FragmentKind, sim_p: f64, begin: u64, end: u64) -> FragmentRecord {
        FragmentRecord {
            kind,
            sim_p,
            begin,
            end,
            length: end - begin + 1,
        }
    }

    #[test]
    fn test_summary_fields() {
        let records = vec![
            record(FragmentKind::Pi, 0.001, 1000, 1999),
            record(FragmentKind::Pi, 0.2, 100, 900),
            record(FragmentKind::Gi, 0.01, 1500, 2499),
        ];
        let filter = FragmentFilter::default();
        let coverage = calculate_coverage(&records, &filter).unwrap();
        let region = DuplicationRegion::new(1000, 2000);
        let stats = calculate_region_stats(&coverage.counts, &region, 750);

        let summary = RunSummary::new(
            Path::new("data/run1.frags"),
            &records,
            &filter,
            &coverage,
            region,
            750,
            stats,
        );
        let text = summary.format();

        assert!(text.starts_with("File name\trun1.frags\n"));
        assert!(text.contains("Fragments parsed\t3\n"));
        assert!(text.contains("PI fragments\t2\n"));
        assert!(text.contains("PO fragments\t0\n"));
        assert!(text.contains("GI fragments\t1\n"));
        assert!(text.contains("Significant fragments\t2\n"));
        assert!(text.contains("Coverage length\t2999\n"));
        assert!(text.contains("Total coverage\t2000\n"));
        assert!(text.contains("Duplication coverage\t1501\n"));
        assert!(text.contains("Tail region\t1250-2000\n"));
        assert!(text.contains("Max coverage\t2\n"));
        assert!(text.contains("Creation time\t"));
    }

    #[test]
    fn test_write_to_file() {
        let records = vec![record(FragmentKind::Po, 0.9, 0, 10)];
        let filter = FragmentFilter::default();
        let coverage = calculate_coverage(&records, &filter).unwrap();
        let region = DuplicationRegion::new(0, 100);
        let stats = calculate_region_stats(&coverage.counts, &region, 750);
        let summary = RunSummary::new(Path::new("x.txt"), &records, &filter, &coverage, region, 750, stats);

        let tmp = tempfile::NamedTempFile::new().unwrap();
        summary.write_to_file(tmp.path()).unwrap();
        let contents = std::fs::read_to_string(tmp.path()).unwrap();
        assert!(contents.contains("Significant fragments\t0\n"));
        assert!(contents.contains("Coverage length\t1000\n"));
        assert!(contents.contains("Duplication %\t0\n"));
    }
}
