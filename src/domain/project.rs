/// A project as reported by the platform's REST API.
///
/// Read-only: every field is sourced from the remote API and never
/// mutated or persisted locally beyond transient display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Opaque project identifier
    pub id: String,
    /// Human-readable project name
    pub name: String,
    /// Ecosystem or scan category, e.g. "npm", "pip", "sast"
    pub project_type: String,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_type: project_type.into(),
        }
    }

    /// File name for this project's exported SBOM document.
    pub fn sbom_file_name(&self) -> String {
        format!("{}_{}_SBOM.json", self.project_type, self.id)
    }
}
