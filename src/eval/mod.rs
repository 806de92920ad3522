/// Stable scene fingerprints.
pub mod fingerprint;
/// Per-frame derived values.
pub mod params;
/// Batch evaluation over frame ranges.
pub mod sweep;
