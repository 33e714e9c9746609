use std::path::PathBuf;

/// Outcome of a batch export run.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// The timestamped directory the SBOM files were written into
    pub directory: PathBuf,
    /// Number of SBOM files written
    pub written: usize,
    /// Number of projects skipped by the skip-unsupported policy
    pub skipped: usize,
}
