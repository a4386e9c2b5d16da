//! Coverage of significant GENECONV gene conversion fragments.
//!
//! The pipeline is parse -> filter + accumulate -> region statistics -> render:
//! [`io::load_fragments`], [`coverage::calculate_coverage`],
//! [`plotting::stats::calculate_region_stats`] and [`plotting::plot_coverage`].

pub mod coverage;
pub mod error;
pub mod io;
pub mod plotting;

pub use coverage::{
    CoverageResult, FragmentFilter, FragmentKind, FragmentRecord, calculate_coverage,
};
pub use error::GeneConvError;
pub use io::load_fragments;
pub use plotting::stats::{DuplicationRegion, RegionStats, calculate_region_stats};
