/// Application layer - Use cases, read models and DTOs
///
/// This layer coordinates the compliance domain with infrastructure
/// through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
