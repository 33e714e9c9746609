use std::fmt;

/// Project types whose ecosystem supports SBOM export.
const SUPPORTED_TYPES: &[&str] = &["deb", "npm", "pip", "pipenv", "dockerfile", "rpm"];

/// Project types known to have no SBOM export.
const UNSUPPORTED_TYPES: &[&str] = &["sast"];

/// Classification outcome for a project's ecosystem type.
///
/// Unrecognized is a distinct variant rather than being folded into
/// Unsupported, so a new platform project type can never be
/// miscategorized silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportLevel {
    /// Type is in the known SBOM-supported set
    Supported,
    /// Type is in the known SBOM-unsupported set
    Unsupported,
    /// Type is in neither set
    Unrecognized,
}

impl SupportLevel {
    /// Classifies a project type string against the fixed type sets.
    pub fn classify(project_type: &str) -> Self {
        if SUPPORTED_TYPES.contains(&project_type) {
            SupportLevel::Supported
        } else if UNSUPPORTED_TYPES.contains(&project_type) {
            SupportLevel::Unsupported
        } else {
            SupportLevel::Unrecognized
        }
    }

    /// Whether the platform is expected to produce a usable SBOM
    /// for this classification. Used by the opt-in skip policy.
    pub fn is_exportable(self) -> bool {
        matches!(self, SupportLevel::Supported)
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportLevel::Supported => write!(f, "supported"),
            SupportLevel::Unsupported => write!(f, "unsupported"),
            SupportLevel::Unrecognized => write!(f, "unrecognized"),
        }
    }
}
