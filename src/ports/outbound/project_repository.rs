use serde_json::Value;

use crate::domain::Project;
use crate::shared::Result;

/// ProjectRepository port for the platform's REST API
///
/// This port abstracts the remote vulnerability-management platform
/// that owns the organization's projects and renders their SBOMs.
/// All calls are blocking; the pipeline is strictly sequential.
pub trait ProjectRepository {
    /// Lists every project identifier in the organization, in the
    /// order the API returns them (the listing call is pagination-less).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The API returns an error status code
    /// - The response lacks the expected `data` array
    fn list_project_ids(&self, org_id: &str) -> Result<Vec<String>>;

    /// Fetches one project's name and ecosystem type.
    fn get_project(&self, org_id: &str, project_id: &str) -> Result<Project>;

    /// Requests a CycloneDX-formatted SBOM for one project.
    ///
    /// The platform answers failed renders with a JSON error envelope
    /// rather than an empty body; any JSON body is returned as-is so
    /// the caller can persist it. Transport errors and non-JSON bodies
    /// are the only failures.
    fn fetch_sbom(&self, org_id: &str, project_id: &str) -> Result<Value>;
}

impl<R: ProjectRepository + ?Sized> ProjectRepository for &R {
    fn list_project_ids(&self, org_id: &str) -> Result<Vec<String>> {
        (**self).list_project_ids(org_id)
    }

    fn get_project(&self, org_id: &str, project_id: &str) -> Result<Project> {
        (**self).get_project(org_id, project_id)
    }

    fn fetch_sbom(&self, org_id: &str, project_id: &str) -> Result<Value> {
        (**self).fetch_sbom(org_id, project_id)
    }
}
