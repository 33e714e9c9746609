use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested operation completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM export and aggregation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Missing configuration: {name}\n\n💡 Hint: {hint}")]
    MissingConfig { name: String, hint: String },

    #[error("API request failed: {endpoint}\nStatus: {status}\n\n💡 Hint: Verify that the API token is valid and the organization id is correct")]
    Api { endpoint: String, status: u16 },

    #[error("Unexpected API response: {endpoint}\nDetails: {details}\n\n💡 Hint: The API may have changed shape; check the configured API version")]
    UnexpectedResponse { endpoint: String, details: String },

    #[error("Malformed SBOM document: {name}\nDetails: {details}\n\n💡 Hint: Only JSON documents with array-valued 'components' and 'dependencies' can be merged")]
    MalformedDocument { name: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid SBOM directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory produced by a previous export run")]
    InvalidDirectory { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_missing_config_display() {
        let error = ExportError::MissingConfig {
            name: "SBOM_EXPORT_TOKEN".to_string(),
            hint: "Set the SBOM_EXPORT_TOKEN environment variable".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Missing configuration"));
        assert!(display.contains("SBOM_EXPORT_TOKEN"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_api_error_display() {
        let error = ExportError::Api {
            endpoint: "https://api.example.com/rest/orgs/abc/projects".to_string(),
            status: 401,
        };
        let display = format!("{}", error);
        assert!(display.contains("API request failed"));
        assert!(display.contains("401"));
        assert!(display.contains("orgs/abc/projects"));
    }

    #[test]
    fn test_malformed_document_display() {
        let error = ExportError::MalformedDocument {
            name: "npm_123_SBOM.json".to_string(),
            details: "'components' is not an array".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed SBOM document"));
        assert!(display.contains("npm_123_SBOM.json"));
        assert!(display.contains("'components' is not an array"));
    }

    #[test]
    fn test_invalid_directory_display() {
        let error = ExportError::InvalidDirectory {
            path: PathBuf::from("/missing/dir"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid SBOM directory"));
        assert!(display.contains("/missing/dir"));
        assert!(display.contains("Directory does not exist"));
    }
}
