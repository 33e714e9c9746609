/// Application layer containing use cases and their request/response types
pub mod dto;
pub mod use_cases;
