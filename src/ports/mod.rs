/// Ports module defining interfaces for hexagonal architecture
///
/// The compliance core drives everything outside it through these outbound
/// (driven) ports: scan execution, catalogue loading, progress reporting and
/// output formatting.
pub mod outbound;
