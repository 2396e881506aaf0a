/// Compliance domain layer
///
/// Pure data model and policies for compliance posture. No I/O happens here;
/// scans and persistence are reached through the ports.
pub mod domain;
pub mod policies;
