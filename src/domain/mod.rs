pub mod classification;
pub mod merged_bom;
pub mod project;

pub use classification::SupportLevel;
pub use merged_bom::MergedBom;
pub use project::Project;
