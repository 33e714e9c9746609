/// Outbound adapters - Concrete implementations of driven ports
pub mod console;
pub mod filesystem;
pub mod network;
