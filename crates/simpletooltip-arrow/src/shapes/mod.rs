// Modules
mod arrowshape;
/// polygons
pub mod polygon;

// Re-exports
pub use arrowshape::{ArrowPaths, ArrowShape};
pub use polygon::Polygon;
