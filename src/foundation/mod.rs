/// Frame, fps and canvas primitives.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Pixel rounding helpers.
pub mod math;
