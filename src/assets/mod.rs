/// CSS-style colors.
pub mod color;
/// Opaque image handles.
pub mod images;
