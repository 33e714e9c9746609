/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist here; the inbound surface is
/// the use case structs themselves, driven directly by the CLI.
pub mod outbound;
