/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe everything the inventory use cases
/// need from the outside world.
pub mod outbound;
