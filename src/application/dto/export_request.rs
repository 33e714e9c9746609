/// Request parameters for a batch export run.
#[derive(Debug, Clone, Default)]
pub struct ExportRequest {
    /// Skip the SBOM fetch for projects whose type is not in the
    /// supported set. Off by default: the platform is asked for an
    /// SBOM for every project, and whatever JSON it answers with is
    /// written to disk.
    pub skip_unsupported: bool,
}

impl ExportRequest {
    pub fn new(skip_unsupported: bool) -> Self {
        Self { skip_unsupported }
    }
}
