use std::path::Path;

use crate::domain::{Project, SupportLevel};

/// ExportReporter port for console feedback during enumeration,
/// classification and export
///
/// Output is human-readable only; nothing downstream parses it.
pub trait ExportReporter {
    /// Reports a plain progress message
    fn report(&self, message: &str);

    /// Reports one classified project (the color-coded per-project line)
    fn report_project(&self, project: &Project, level: SupportLevel);

    /// Reports a non-fatal problem with a single project's SBOM
    fn report_warning(&self, message: &str);

    /// Announces the directory an export run produced
    fn report_directory(&self, path: &Path);

    /// Starts a progress bar over `total` projects
    fn start_progress(&self, total: usize);

    /// Advances the progress bar by one project
    fn advance_progress(&self, message: &str);

    /// Finishes and clears the progress bar
    fn finish_progress(&self);
}

impl<R: ExportReporter + ?Sized> ExportReporter for &R {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_project(&self, project: &Project, level: SupportLevel) {
        (**self).report_project(project, level)
    }

    fn report_warning(&self, message: &str) {
        (**self).report_warning(message)
    }

    fn report_directory(&self, path: &Path) {
        (**self).report_directory(path)
    }

    fn start_progress(&self, total: usize) {
        (**self).start_progress(total)
    }

    fn advance_progress(&self, message: &str) {
        (**self).advance_progress(message)
    }

    fn finish_progress(&self) {
        (**self).finish_progress()
    }
}
