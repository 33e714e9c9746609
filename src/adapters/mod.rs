/// Adapters module containing concrete implementations of ports
pub mod outbound;
