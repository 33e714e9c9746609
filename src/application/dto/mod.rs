pub mod export_request;
pub mod export_summary;

pub use export_request::ExportRequest;
pub use export_summary::ExportSummary;
