/// Mock implementations for testing
mod mock_project_repository;
mod recording_reporter;

pub use mock_project_repository::MockProjectRepository;
pub use recording_reporter::RecordingReporter;
