use crate::domain::{Project, SupportLevel};
use crate::ports::outbound::{ExportReporter, ProjectRepository};
use crate::shared::Result;

/// ClassifyProjectsUseCase - Enumerate and classify the organization's projects
///
/// Lists every project id in the organization, fetches each project's
/// name and ecosystem type, classifies the type against the fixed
/// supported/unsupported sets, and emits one color-coded line per
/// project through the reporter. Classification persists nothing; the
/// returned pairs exist for the caller's benefit (and for tests).
///
/// # Type Parameters
/// * `R` - ProjectRepository implementation
/// * `RP` - ExportReporter implementation
pub struct ClassifyProjectsUseCase<R, RP> {
    repository: R,
    reporter: RP,
}

impl<R, RP> ClassifyProjectsUseCase<R, RP>
where
    R: ProjectRepository,
    RP: ExportReporter,
{
    pub fn new(repository: R, reporter: RP) -> Self {
        Self {
            repository,
            reporter,
        }
    }

    /// Enumerates, classifies and displays every project in the
    /// organization. Any API failure propagates immediately; there is
    /// no retry and no partial result.
    pub fn execute(&self, org_id: &str) -> Result<Vec<(Project, SupportLevel)>> {
        let project_ids = self.repository.list_project_ids(org_id)?;

        let mut classified = Vec::with_capacity(project_ids.len());
        for project_id in &project_ids {
            let project = self.repository.get_project(org_id, project_id)?;
            let level = SupportLevel::classify(&project.project_type);
            self.reporter.report_project(&project, level);
            classified.push((project, level));
        }

        Ok(classified)
    }
}
