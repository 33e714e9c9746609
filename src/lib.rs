//! sbom-export - organization-wide SBOM export and aggregation
//!
//! This library retrieves per-project CycloneDX SBOM documents from a
//! vulnerability-management platform's REST API, classifies projects by
//! whether their ecosystem supports SBOM export, writes each SBOM to
//! disk, and merges them into a single aggregate document.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`domain`): Projects, classification, and the merge core
//! - **Application Layer** (`application`): Use cases and their request types
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error and result types
//!
//! # Example
//!
//! ```no_run
//! use sbom_export::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = Config::resolve(None)?;
//!
//! let repository = RestProjectRepository::new(&config)?;
//! let store = FileSystemSbomStore::current_dir();
//! let reporter = ConsoleReporter::new();
//!
//! let export = ExportSbomsUseCase::new(&repository, &store, &reporter, config);
//! let summary = export.execute(&ExportRequest::default())?;
//!
//! let merge = MergeSbomsUseCase::new(&store);
//! let merged = merge.execute(&summary.directory)?;
//! println!("{}", merged.to_pretty_json()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSbomStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::RestProjectRepository;
    pub use crate::application::dto::{ExportRequest, ExportSummary};
    pub use crate::application::use_cases::{
        ClassifyProjectsUseCase, ExportSbomsUseCase, MergeSbomsUseCase,
    };
    pub use crate::config::Config;
    pub use crate::domain::{MergedBom, Project, SupportLevel};
    pub use crate::ports::outbound::{
        ExportReporter, NamedDocument, OutputPresenter, ProjectRepository, SbomStore,
    };
    pub use crate::shared::Result;
}
