#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![allow(clippy::single_match)]

//! the simpletooltip-arrow crate draws the pointer arrow of a tooltip popup.
//!
//! The main entry point is the [ArrowDrawable] struct, hosted through the [Drawable] trait.

// Modules
/// the arrow drawable
pub mod arrowdrawable;
/// colors
pub mod color;
/// color filters, that can be applied onto paints
pub mod colorfilter;
/// arrow directions
pub mod direction;
/// the drawable trait
pub mod drawable;
/// module for extension traits for foreign types
pub mod ext;
/// paints
pub mod paint;
/// module for shapes
pub mod shapes;

// Re-exports
pub use arrowdrawable::{ArrowDrawable, ArrowOptions};
pub use color::Color;
pub use colorfilter::ColorFilter;
pub use direction::Direction;
pub use drawable::{Drawable, Opacity};
pub use paint::Paint;

// Renames
extern crate nalgebra as na;
