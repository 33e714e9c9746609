use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sbom_export::prelude::*;

/// Recording ExportReporter for asserting display routing in tests
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: Mutex<Vec<String>>,
    pub classified: Mutex<Vec<(String, SupportLevel)>>,
    pub warnings: Mutex<Vec<String>>,
    pub directories: Mutex<Vec<PathBuf>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classified_levels(&self) -> Vec<(String, SupportLevel)> {
        self.classified.lock().unwrap().clone()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.lock().unwrap().len()
    }
}

impl ExportReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_project(&self, project: &Project, level: SupportLevel) {
        self.classified
            .lock()
            .unwrap()
            .push((project.id.clone(), level));
    }

    fn report_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn report_directory(&self, path: &Path) {
        self.directories.lock().unwrap().push(path.to_path_buf());
    }

    fn start_progress(&self, _total: usize) {}

    fn advance_progress(&self, _message: &str) {}

    fn finish_progress(&self) {}
}
