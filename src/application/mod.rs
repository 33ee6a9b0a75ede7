/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the inventory pipeline and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
