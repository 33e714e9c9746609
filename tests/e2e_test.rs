/// End-to-end tests for the CLI
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn sbom_export() -> Command {
    let mut cmd = Command::cargo_bin("sbom-export").unwrap();
    // Keep the test environment hermetic: no ambient credentials,
    // no config file discovered from the repository checkout.
    cmd.env_remove("SBOM_EXPORT_TOKEN");
    cmd.env_remove("SBOM_EXPORT_ORG_ID");
    cmd
}

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        sbom_export().arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        sbom_export().arg("--version").assert().code(0);
    }

    /// Exit code 2: unknown option
    #[test]
    fn test_exit_code_invalid_option() {
        sbom_export().arg("--invalid-option").assert().code(2);
    }

    /// Exit code 2: no subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        sbom_export().assert().code(2);
    }

    /// Exit code 3: application error - merging a nonexistent directory
    #[test]
    fn test_exit_code_merge_missing_directory() {
        let temp = TempDir::new().unwrap();
        sbom_export()
            .current_dir(temp.path())
            .args(["merge", "/nonexistent/sbom/dir"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid SBOM directory"));
    }

    /// Exit code 3: application error - API commands need a token
    #[test]
    fn test_exit_code_projects_without_token() {
        let temp = TempDir::new().unwrap();
        sbom_export()
            .current_dir(temp.path())
            .args(["projects", "--org", "org-1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Missing configuration"))
            .stderr(predicate::str::contains("SBOM_EXPORT_TOKEN"));
    }

    /// Exit code 3: a token alone is not enough, the org id is required too
    #[test]
    fn test_exit_code_export_without_org() {
        let temp = TempDir::new().unwrap();
        sbom_export()
            .current_dir(temp.path())
            .env("SBOM_EXPORT_TOKEN", "test-token")
            .arg("export")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("SBOM_EXPORT_ORG_ID"));
    }
}

#[test]
fn test_merge_concatenates_directory_contents() {
    let temp = TempDir::new().unwrap();
    let sbom_dir = temp.path().join("export");
    fs::create_dir(&sbom_dir).unwrap();
    fs::write(
        sbom_dir.join("npm_SBOM.json"),
        r#"{"components": [{"name": "A"}, {"name": "B"}]}"#,
    )
    .unwrap();
    fs::write(
        sbom_dir.join("pip_SBOM.json"),
        r#"{"components": [{"name": "C"}]}"#,
    )
    .unwrap();

    let output = temp.path().join("merged.json");
    sbom_export()
        .current_dir(temp.path())
        .args(["merge", "export", "-o"])
        .arg(&output)
        .assert()
        .code(0);

    let merged: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(merged["bomFormat"], "CycloneDX");
    assert_eq!(merged["specVersion"], "1.4");
    assert_eq!(merged["components"].as_array().unwrap().len(), 3);
    assert_eq!(merged["components"][0]["name"], "A");
    assert_eq!(merged["components"][2]["name"], "C");
    assert_eq!(merged["dependencies"], serde_json::json!([]));
}

#[test]
fn test_merge_empty_directory_writes_empty_envelope() {
    let temp = TempDir::new().unwrap();
    let sbom_dir = temp.path().join("export");
    fs::create_dir(&sbom_dir).unwrap();

    sbom_export()
        .current_dir(temp.path())
        .args(["merge", "export"])
        .assert()
        .code(0);

    // Default output file name in the working directory
    let merged: Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("merged_SBOM.json")).unwrap())
            .unwrap();
    assert_eq!(merged["components"], serde_json::json!([]));
    assert_eq!(merged["dependencies"], serde_json::json!([]));
}

#[test]
fn test_merge_is_idempotent_byte_for_byte() {
    let temp = TempDir::new().unwrap();
    let sbom_dir = temp.path().join("export");
    fs::create_dir(&sbom_dir).unwrap();
    fs::write(
        sbom_dir.join("npm_SBOM.json"),
        r#"{"components": [{"name": "A"}], "dependencies": [{"ref": "A"}]}"#,
    )
    .unwrap();

    let run = || {
        sbom_export()
            .current_dir(temp.path())
            .args(["merge", "export"])
            .assert()
            .code(0);
        fs::read(temp.path().join("merged_SBOM.json")).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_merge_rejects_malformed_document() {
    let temp = TempDir::new().unwrap();
    let sbom_dir = temp.path().join("export");
    fs::create_dir(&sbom_dir).unwrap();
    fs::write(sbom_dir.join("bad_SBOM.json"), r#"{"components": "oops"}"#).unwrap();

    sbom_export()
        .current_dir(temp.path())
        .args(["merge", "export"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Malformed SBOM document"));
}
