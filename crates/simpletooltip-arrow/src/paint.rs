// Imports
use crate::{Color, ColorFilter};
use std::sync::Arc;

/// A solid color brush with an optional color filter.
#[derive(Debug, Clone, Default)]
pub struct Paint {
    color: Color,
    color_filter: Option<Arc<dyn ColorFilter>>,
}

impl Paint {
    /// A new paint with the given color and no color filter.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            color_filter: None,
        }
    }

    /// The unfiltered color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the color, including its alpha.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The alpha of the color as 8 bit value.
    pub fn alpha(&self) -> u8 {
        self.color.alpha_byte()
    }

    /// Set the alpha of the color as 8 bit value, keeping its rgb channels.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.color = self.color.with_alpha_byte(alpha);
    }

    /// The color filter, if any.
    pub fn color_filter(&self) -> Option<&Arc<dyn ColorFilter>> {
        self.color_filter.as_ref()
    }

    /// Set or clear the color filter.
    pub fn set_color_filter(&mut self, color_filter: Option<Arc<dyn ColorFilter>>) {
        self.color_filter = color_filter;
    }

    /// The color that ends up on the surface, with the color filter applied.
    pub fn effective_color(&self) -> Color {
        match &self.color_filter {
            Some(color_filter) => color_filter.filter(self.color),
            None => self.color,
        }
    }

    /// Whether painting with this paint leaves the surface untouched.
    pub fn is_invisible(&self) -> bool {
        self.effective_color().alpha_byte() == 0
    }
}
