//! Error taxonomy - Resource / Parse / Render
//!
//! Every failure is fatal: the run aborts and no usable output is written.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A required font variant file is absent. There is no fallback
    /// substitution; a missing variant aborts the run.
    #[error("Missing font asset: {}", .0.display())]
    MissingFont(PathBuf),

    /// A font file exists but the layout engine rejected its contents.
    #[error("Unusable font asset {}: {source}", .path.display())]
    FontData {
        path: PathBuf,
        source: genpdf::error::Error,
    },

    #[error("Malformed resume data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Layout engine failure: {0}")]
    Render(genpdf::error::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
