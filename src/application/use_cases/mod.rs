pub mod classify_projects;
pub mod export_sboms;
pub mod merge_sboms;

pub use classify_projects::ClassifyProjectsUseCase;
pub use export_sboms::ExportSbomsUseCase;
pub use merge_sboms::MergeSbomsUseCase;
