use std::path::Path;

use crate::domain::MergedBom;
use crate::ports::outbound::SbomStore;
use crate::shared::Result;

/// MergeSbomsUseCase - Union every SBOM in a directory into one document
///
/// Reads every `*.json` file in the directory (lexicographic file-name
/// order), and concatenates their `components` and `dependencies`
/// arrays onto a fixed CycloneDX envelope. No deduplication, no schema
/// validation; an unparsable file or a non-array key aborts the merge.
///
/// # Type Parameters
/// * `S` - SbomStore implementation
pub struct MergeSbomsUseCase<S> {
    store: S,
}

impl<S: SbomStore> MergeSbomsUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(&self, dir: &Path) -> Result<MergedBom> {
        let documents = self.store.read_documents(dir)?;

        let mut merged = MergedBom::new();
        for named in &documents {
            merged.absorb(&named.name, &named.document)?;
        }

        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::filesystem::FileSystemSbomStore;
    use std::fs;
    use tempfile::TempDir;

    fn store_for(temp: &TempDir) -> FileSystemSbomStore {
        FileSystemSbomStore::new(temp.path().to_path_buf())
    }

    #[test]
    fn test_merge_two_files_concatenates_in_file_name_order() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("npm_SBOM.json"),
            r#"{"components": [{"name": "A"}, {"name": "B"}]}"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("pip_SBOM.json"),
            r#"{"components": [{"name": "C"}]}"#,
        )
        .unwrap();

        let use_case = MergeSbomsUseCase::new(store_for(&temp));
        let merged = use_case.execute(temp.path()).unwrap();

        assert_eq!(merged.components().len(), 3);
        assert_eq!(merged.components()[0]["name"], "A");
        assert_eq!(merged.components()[1]["name"], "B");
        assert_eq!(merged.components()[2]["name"], "C");
        assert!(merged.dependencies().is_empty());
    }

    #[test]
    fn test_merge_empty_directory_produces_empty_envelope() {
        let temp = TempDir::new().unwrap();

        let use_case = MergeSbomsUseCase::new(store_for(&temp));
        let merged = use_case.execute(temp.path()).unwrap();

        assert!(merged.components().is_empty());
        assert!(merged.dependencies().is_empty());
    }

    #[test]
    fn test_merge_twice_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("npm_SBOM.json"),
            r#"{"components": [{"name": "A"}], "dependencies": [{"ref": "A"}]}"#,
        )
        .unwrap();

        let use_case = MergeSbomsUseCase::new(store_for(&temp));
        let first = use_case.execute(temp.path()).unwrap().to_pretty_json().unwrap();
        let second = use_case.execute(temp.path()).unwrap().to_pretty_json().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_merge_includes_error_envelope_files_as_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("npm_SBOM.json"),
            r#"{"components": [{"name": "A"}]}"#,
        )
        .unwrap();
        // What the platform answers for a sast project
        fs::write(
            temp.path().join("sast_SBOM.json"),
            r#"{"errors": [{"detail": "SBOM not supported for this project type"}]}"#,
        )
        .unwrap();

        let use_case = MergeSbomsUseCase::new(store_for(&temp));
        let merged = use_case.execute(temp.path()).unwrap();

        assert_eq!(merged.components().len(), 1);
    }

    #[test]
    fn test_merge_propagates_malformed_document() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("bad_SBOM.json"),
            r#"{"components": 42}"#,
        )
        .unwrap();

        let use_case = MergeSbomsUseCase::new(store_for(&temp));
        let result = use_case.execute(temp.path());

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("bad_SBOM.json"));
    }
}
