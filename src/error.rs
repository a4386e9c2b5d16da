// src/error.rs
//
// Error type for loading GENECONV fragment data

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while loading fragment data.
///
/// A file without significant fragments is not an error: the coverage
/// engine warns and falls back to an empty array instead.
#[derive(Debug, Error)]
pub enum GeneConvError {
    #[error("File '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("No valid GENECONV fragment data found in the file.")]
    NoData,

    #[error("Coverage array for fragment end {0} is too large to allocate.")]
    CoverageTooLarge(u64),

    #[error("File reading error: {0}")]
    IOError(#[from] std::io::Error),
}
