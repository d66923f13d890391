/// Ports module defining interfaces for hexagonal architecture
///
/// The parser core is driven directly through the use case; only outbound
/// (driven) ports are needed for the infrastructure it talks to.
pub mod outbound;
