//! Output scene graph handed to an external compositor.

/// Fluent node builder.
pub mod dsl;
/// Scene, node and style types.
pub mod model;
