use std::path::{Path, PathBuf};

use crate::application::dto::{ExportRequest, ExportSummary};
use crate::config::Config;
use crate::domain::SupportLevel;
use crate::ports::outbound::{ExportReporter, ProjectRepository, SbomStore};
use crate::shared::Result;

/// ExportSbomsUseCase - Fetch SBOMs and write them to disk
///
/// Batch mode creates a uniquely named export directory, fetches one
/// SBOM per project and writes one pretty-printed file per project
/// named `{type}_{id}_SBOM.json`. Execution is strictly sequential;
/// a failure mid-run leaves a partially populated directory with no
/// resumption mechanism.
///
/// # Type Parameters
/// * `R` - ProjectRepository implementation
/// * `S` - SbomStore implementation
/// * `RP` - ExportReporter implementation
pub struct ExportSbomsUseCase<R, S, RP> {
    repository: R,
    store: S,
    reporter: RP,
    config: Config,
}

impl<R, S, RP> ExportSbomsUseCase<R, S, RP>
where
    R: ProjectRepository,
    S: SbomStore,
    RP: ExportReporter,
{
    pub fn new(repository: R, store: S, reporter: RP, config: Config) -> Self {
        Self {
            repository,
            store,
            reporter,
            config,
        }
    }

    /// Batch export: one SBOM file per project in the organization.
    ///
    /// Returns the export directory so the merger can consume it.
    pub fn execute(&self, request: &ExportRequest) -> Result<ExportSummary> {
        let org_id = &self.config.org_id;
        let project_ids = self.repository.list_project_ids(org_id)?;
        let directory = self.store.create_export_dir(&self.config.format_slug())?;

        self.reporter.report(&format!(
            "📦 Exporting SBOMs for {} project(s)",
            project_ids.len()
        ));
        self.reporter.start_progress(project_ids.len());

        let mut written = 0;
        let mut skipped = 0;
        for project_id in &project_ids {
            let project = self.repository.get_project(org_id, project_id)?;
            let level = SupportLevel::classify(&project.project_type);

            if request.skip_unsupported && !level.is_exportable() {
                skipped += 1;
                self.reporter
                    .advance_progress(&format!("skipped {} ({})", project.name, level));
                continue;
            }

            let document = self.repository.fetch_sbom(org_id, project_id)?;
            if document.get("components").is_none() {
                // Unsupported types come back as an error envelope; the
                // file is written anyway, matching the merge semantics.
                self.reporter.report_warning(&format!(
                    "{} ({}): response contains no components",
                    project.name, project.project_type
                ));
            }

            self.store
                .write_sbom(&directory, &project.sbom_file_name(), &document)?;
            written += 1;
            self.reporter.advance_progress(&project.name);
        }

        self.reporter.finish_progress();
        self.reporter.report_directory(&directory);

        Ok(ExportSummary {
            directory,
            written,
            skipped,
        })
    }

    /// Single-project export into `dir`, named `{type}_SBOM.json`.
    pub fn fetch_one(&self, project_id: &str, dir: &Path) -> Result<PathBuf> {
        let org_id = &self.config.org_id;
        let project = self.repository.get_project(org_id, project_id)?;
        let document = self.repository.fetch_sbom(org_id, project_id)?;

        let file_name = format!("{}_SBOM.json", project.project_type);
        let path = self.store.write_sbom(dir, &file_name, &document)?;
        Ok(path)
    }
}
