/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the platform CLI, the file
/// system and the console.
pub mod outbound;
