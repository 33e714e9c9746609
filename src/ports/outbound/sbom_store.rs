use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::shared::Result;

/// A parsed SBOM document paired with the file name it came from.
#[derive(Debug, Clone)]
pub struct NamedDocument {
    pub name: String,
    pub document: Value,
}

/// SbomStore port for the filesystem handoff between fetch and merge
///
/// The filesystem is the only state the pipeline carries between
/// steps: the fetcher writes one file per project into an export
/// directory, and the merger reads every JSON file back out.
pub trait SbomStore {
    /// Creates a uniquely named export directory for one run and
    /// returns its path. Existing directories are never cleaned up.
    fn create_export_dir(&self, format_slug: &str) -> Result<PathBuf>;

    /// Writes one SBOM document, pretty-printed, into `dir`.
    fn write_sbom(&self, dir: &Path, file_name: &str, document: &Value) -> Result<PathBuf>;

    /// Reads and parses every `*.json` file in `dir`, ordered
    /// lexicographically by file name so merge output is reproducible.
    fn read_documents(&self, dir: &Path) -> Result<Vec<NamedDocument>>;
}

impl<S: SbomStore + ?Sized> SbomStore for &S {
    fn create_export_dir(&self, format_slug: &str) -> Result<PathBuf> {
        (**self).create_export_dir(format_slug)
    }

    fn write_sbom(&self, dir: &Path, file_name: &str, document: &Value) -> Result<PathBuf> {
        (**self).write_sbom(dir, file_name, document)
    }

    fn read_documents(&self, dir: &Path) -> Result<Vec<NamedDocument>> {
        (**self).read_documents(dir)
    }
}
