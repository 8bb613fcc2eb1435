// Imports
use crate::ext::RectExt;
use crate::shapes::{ArrowPaths, ArrowShape};
use crate::{Color, ColorFilter, Direction, Drawable, Opacity, Paint};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Options to construct an [ArrowDrawable] from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "arrow_options")]
pub struct ArrowOptions {
    /// Fill color of the arrow.
    #[serde(rename = "fill_color")]
    pub fill_color: Color,
    /// Color of the border beneath the fill. Transparent draws no border.
    #[serde(rename = "border_color")]
    pub border_color: Color,
    /// Border size, in the units of the bounds.
    #[serde(rename = "border_size")]
    pub border_size: u32,
    /// The direction the arrow tip points to.
    #[serde(rename = "direction")]
    pub direction: Direction,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            border_color: Color::TRANSPARENT,
            border_size: ArrowDrawable::BORDER_SIZE_DEFAULT,
            direction: Direction::default(),
        }
    }
}

/// The pointer arrow of a tooltip, with an optional border.
///
/// The border polygon is painted first, the inset fill polygon on top of it.
/// The polygons are in coordinates local to the drawable, starting at `(0, 0)`.
#[derive(Debug)]
pub struct ArrowDrawable {
    background_color: Color,
    border_paint: Paint,
    paint: Paint,
    border_size: u32,
    direction: Direction,
    bounds: kurbo::Rect,
    /// Only valid for `bounds`. `None` until first computed.
    paths: Mutex<Option<ArrowPaths>>,
}

impl ArrowDrawable {
    /// The border size when none is given.
    pub const BORDER_SIZE_DEFAULT: u32 = 4;

    /// A new arrow without a border.
    pub fn new(fill_color: Color, direction: Direction) -> Self {
        Self::with_border(fill_color, Color::TRANSPARENT, direction)
    }

    /// A new arrow with a border of the default size.
    pub fn with_border(fill_color: Color, border_color: Color, direction: Direction) -> Self {
        Self::with_border_size(
            fill_color,
            border_color,
            Self::BORDER_SIZE_DEFAULT,
            direction,
        )
    }

    /// A new arrow with a border of the given size.
    pub fn with_border_size(
        fill_color: Color,
        border_color: Color,
        border_size: u32,
        direction: Direction,
    ) -> Self {
        Self {
            background_color: Color::TRANSPARENT,
            border_paint: Paint::new(border_color),
            paint: Paint::new(fill_color),
            border_size,
            direction,
            bounds: kurbo::Rect::ZERO,
            paths: Mutex::new(None),
        }
    }

    /// A new arrow from the given options.
    pub fn from_options(options: &ArrowOptions) -> Self {
        Self::with_border_size(
            options.fill_color,
            options.border_color,
            options.border_size,
            options.direction,
        )
    }

    /// Set the color painted over the whole bounds beneath the arrow. Transparent by default.
    pub fn with_background_color(mut self, background_color: Color) -> Self {
        self.background_color = background_color;
        self
    }

    /// The direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The border size.
    pub fn border_size(&self) -> u32 {
        self.border_size
    }

    /// The background color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// The paint of the border polygon.
    pub fn border_paint(&self) -> &Paint {
        &self.border_paint
    }

    /// The paint of the fill polygon.
    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    /// Replace the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.paint.set_color(color);
    }

    /// The computed paths, if they were computed already.
    pub fn paths(&self) -> Option<ArrowPaths> {
        self.lock_paths().clone()
    }

    fn compute_paths(&self, bounds: kurbo::Rect) -> ArrowPaths {
        tracing::trace!(
            ?bounds,
            direction = ?self.direction,
            border_size = self.border_size,
            "Computing arrow paths"
        );
        ArrowShape::new(
            self.direction,
            bounds.size_v(),
            f64::from(self.border_size),
        )
        .compute_paths()
    }

    // The paths are always replaced as a whole, so they stay consistent even if a holder of the lock panicked.
    fn lock_paths(&self) -> MutexGuard<'_, Option<ArrowPaths>> {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drawable for ArrowDrawable {
    fn bounds(&self) -> kurbo::Rect {
        self.bounds
    }

    fn on_bounds_change(&mut self, bounds: kurbo::Rect) {
        let paths = self.compute_paths(bounds);
        self.bounds = bounds;
        self.paths = Mutex::new(Some(paths));
    }

    fn draw(&self, cx: &mut impl piet::RenderContext) -> anyhow::Result<()> {
        let mut paths = self.lock_paths();
        let paths = paths.get_or_insert_with(|| self.compute_paths(self.bounds));

        cx.save().map_err(|e| anyhow::anyhow!("{e:?}"))?;

        if self.background_color.alpha_byte() != 0 {
            cx.fill(
                self.bounds.at_origin(),
                &Into::<piet::Color>::into(self.background_color),
            );
        }
        if !paths.border.is_empty() && !self.border_paint.is_invisible() {
            cx.fill(
                paths.border.outline_path(),
                &Into::<piet::Color>::into(self.border_paint.effective_color()),
            );
        }
        if !paths.fill.is_empty() && !self.paint.is_invisible() {
            cx.fill(
                paths.fill.outline_path(),
                &Into::<piet::Color>::into(self.paint.effective_color()),
            );
        }

        cx.restore()
            .map_err(|e| anyhow::anyhow!("{e:?}"))
            .context("Restoring render context after drawing arrow failed")?;
        Ok(())
    }

    fn set_alpha(&mut self, alpha: u8) {
        self.paint.set_alpha(alpha);
    }

    fn set_color_filter(&mut self, color_filter: Option<Arc<dyn ColorFilter>>) {
        self.paint.set_color_filter(color_filter);
    }

    fn opacity(&self) -> Opacity {
        if self.paint.color_filter().is_some() {
            return Opacity::Translucent;
        }

        match self.paint.alpha() {
            255 => Opacity::Opaque,
            0 => Opacity::Transparent,
            _ => Opacity::Translucent,
        }
    }
}
