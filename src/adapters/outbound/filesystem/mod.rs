pub mod file_writer;
pub mod sbom_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use sbom_store::FileSystemSbomStore;
