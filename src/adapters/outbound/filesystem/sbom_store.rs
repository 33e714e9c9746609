use chrono::Local;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::outbound::{NamedDocument, SbomStore};
use crate::shared::error::ExportError;
use crate::shared::Result;

/// FileSystemSbomStore adapter for the fetch/merge filesystem handoff
///
/// Export directories are created under `root` (the working directory
/// in normal use) and named `{format-slug}_{YYYYMMDD_HHMMSS}`. They
/// are never cleaned up; two runs in the same second would share a
/// directory, which the sequential pipeline does not guard against.
pub struct FileSystemSbomStore {
    root: PathBuf,
}

impl FileSystemSbomStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Store rooted at the current working directory.
    pub fn current_dir() -> Self {
        Self::new(PathBuf::from("."))
    }
}

impl SbomStore for FileSystemSbomStore {
    fn create_export_dir(&self, format_slug: &str) -> Result<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let dir = self.root.join(format!("{}_{}", format_slug, timestamp));

        fs::create_dir_all(&dir).map_err(|e| ExportError::FileWriteError {
            path: dir.clone(),
            details: e.to_string(),
        })?;

        Ok(dir)
    }

    fn write_sbom(&self, dir: &Path, file_name: &str, document: &Value) -> Result<PathBuf> {
        let path = dir.join(file_name);

        // Refuse to follow a symlink left at the target path
        if path.exists() {
            let metadata = fs::symlink_metadata(&path).map_err(|e| ExportError::FileWriteError {
                path: path.clone(),
                details: e.to_string(),
            })?;
            if metadata.is_symlink() {
                return Err(ExportError::FileWriteError {
                    path,
                    details: "Output path is a symbolic link; writing through symbolic links is not allowed".to_string(),
                }
                .into());
            }
        }

        let content = serde_json::to_string_pretty(document)?;
        fs::write(&path, content).map_err(|e| ExportError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }

    fn read_documents(&self, dir: &Path) -> Result<Vec<NamedDocument>> {
        if !dir.is_dir() {
            return Err(ExportError::InvalidDirectory {
                path: dir.to_path_buf(),
                reason: if dir.exists() {
                    "Not a directory".to_string()
                } else {
                    "Directory does not exist".to_string()
                },
            }
            .into());
        }

        let entries = fs::read_dir(dir).map_err(|e| ExportError::FileReadError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ExportError::FileReadError {
                path: dir.to_path_buf(),
                details: e.to_string(),
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".json") && entry.path().is_file() {
                names.push(name);
            }
        }

        // Directory listing order is filesystem-dependent; sort by
        // file name so merge output is reproducible.
        names.sort();

        let mut documents = Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(&name);
            let content = fs::read_to_string(&path).map_err(|e| ExportError::FileReadError {
                path: path.clone(),
                details: e.to_string(),
            })?;
            let document: Value =
                serde_json::from_str(&content).map_err(|e| ExportError::MalformedDocument {
                    name: name.clone(),
                    details: e.to_string(),
                })?;
            documents.push(NamedDocument { name, document });
        }

        Ok(documents)
    }
}
