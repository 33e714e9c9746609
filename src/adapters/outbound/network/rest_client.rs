use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::domain::Project;
use crate::ports::outbound::ProjectRepository;
use crate::shared::error::ExportError;
use crate::shared::Result;

#[derive(Debug, Deserialize)]
struct ProjectListResponse {
    data: Vec<ProjectListEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectListEntry {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    data: ProjectResource,
}

#[derive(Debug, Deserialize)]
struct ProjectResource {
    id: String,
    attributes: ProjectAttributes,
}

#[derive(Debug, Deserialize)]
struct ProjectAttributes {
    name: String,
    #[serde(rename = "type")]
    project_type: String,
}

/// REST API client for the vulnerability-management platform
///
/// Implements the ProjectRepository port over a blocking reqwest
/// client. Every request carries the bearer-style `token` header and
/// the platform's date-based `version` query parameter.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests (fail fast, the pipeline has no
///   partial-result recovery anyway)
pub struct RestProjectRepository {
    client: Client,
    base_url: String,
    api_version: String,
    sbom_format: String,
    token: String,
}

impl RestProjectRepository {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new API client from resolved configuration
    pub fn new(config: &Config) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-export/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            sbom_format: config.sbom_format.clone(),
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}?version={}", self.base_url, path, self.api_version)
    }

    fn get(&self, endpoint: &str) -> Result<reqwest::blocking::Response> {
        let response = self
            .client
            .get(endpoint)
            .header("Authorization", format!("token {}", self.token))
            .header("Content-Type", "application/json")
            .send()?;
        Ok(response)
    }

    /// GET an endpoint and deserialize, mapping error statuses and
    /// unexpected response shapes to the error taxonomy.
    fn get_json<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let response = self.get(endpoint)?;
        let status = response.status();

        if !status.is_success() {
            return Err(ExportError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text()?;
        let parsed = serde_json::from_str(&body).map_err(|e| ExportError::UnexpectedResponse {
            endpoint: endpoint.to_string(),
            details: e.to_string(),
        })?;
        Ok(parsed)
    }
}

impl ProjectRepository for RestProjectRepository {
    fn list_project_ids(&self, org_id: &str) -> Result<Vec<String>> {
        let endpoint = self.endpoint(&format!("orgs/{}/projects", org_id));
        let listing: ProjectListResponse = self.get_json(&endpoint)?;
        Ok(listing.data.into_iter().map(|entry| entry.id).collect())
    }

    fn get_project(&self, org_id: &str, project_id: &str) -> Result<Project> {
        let endpoint = self.endpoint(&format!("orgs/{}/projects/{}", org_id, project_id));
        let response: ProjectResponse = self.get_json(&endpoint)?;
        Ok(Project::new(
            response.data.id,
            response.data.attributes.name,
            response.data.attributes.project_type,
        ))
    }

    fn fetch_sbom(&self, org_id: &str, project_id: &str) -> Result<Value> {
        let endpoint = format!(
            "{}&format={}",
            self.endpoint(&format!("orgs/{}/projects/{}/sbom", org_id, project_id)),
            urlencoding::encode(&self.sbom_format)
        );

        let response = self.get(&endpoint)?;
        let status = response.status();
        let body = response.text()?;

        // Failed renders come back as a JSON error envelope; keep the
        // body so the caller can persist it alongside real SBOMs. Only
        // a body that is not JSON at all is a hard failure.
        match serde_json::from_str(&body) {
            Ok(document) => Ok(document),
            Err(_) if !status.is_success() => Err(ExportError::Api {
                endpoint,
                status: status.as_u16(),
            }
            .into()),
            Err(e) => Err(ExportError::UnexpectedResponse {
                endpoint,
                details: e.to_string(),
            }
            .into()),
        }
    }
}
