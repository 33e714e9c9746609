/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (REST API, file system, console).
pub mod export_reporter;
pub mod output_presenter;
pub mod project_repository;
pub mod sbom_store;

pub use export_reporter::ExportReporter;
pub use output_presenter::OutputPresenter;
pub use project_repository::ProjectRepository;
pub use sbom_store::{NamedDocument, SbomStore};
