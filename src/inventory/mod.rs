/// Inventory domain - records, references and the pure services that build them
pub mod domain;
pub mod services;
