use std::collections::HashMap;

use sbom_export::prelude::*;
use serde_json::{json, Value};

/// Mock ProjectRepository for testing
pub struct MockProjectRepository {
    projects: Vec<Project>,
    sboms: HashMap<String, Value>,
    should_fail: bool,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            sboms: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_project(mut self, project: Project, sbom: Value) -> Self {
        self.sboms.insert(project.id.clone(), sbom);
        self.projects.push(project);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            projects: Vec::new(),
            sboms: HashMap::new(),
            should_fail: true,
        }
    }

    /// What the platform answers for a project type with no SBOM export
    pub fn error_envelope() -> Value {
        json!({"errors": [{"detail": "SBOM not supported for this project type"}]})
    }
}

impl Default for MockProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRepository for MockProjectRepository {
    fn list_project_ids(&self, _org_id: &str) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock project repository failure");
        }
        Ok(self.projects.iter().map(|p| p.id.clone()).collect())
    }

    fn get_project(&self, _org_id: &str, project_id: &str) -> Result<Project> {
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock has no project {}", project_id))
    }

    fn fetch_sbom(&self, _org_id: &str, project_id: &str) -> Result<Value> {
        Ok(self
            .sboms
            .get(project_id)
            .cloned()
            .unwrap_or_else(Self::error_envelope))
    }
}
