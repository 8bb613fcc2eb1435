// Imports
use crate::ColorFilter;
use piet::RenderContext;
use std::sync::Arc;

/// How the pixels a drawable paints relate to what is beneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opacity {
    /// Covers everything beneath it.
    Opaque,
    /// Blends with what is beneath it.
    Translucent,
    /// Leaves everything beneath it untouched.
    Transparent,
}

/// Trait for types that can draw themselves on a [piet::RenderContext] inside the bounds given by their host.
pub trait Drawable {
    /// The bounds last supplied by the host.
    fn bounds(&self) -> kurbo::Rect;

    /// Called by the host when the bounds have changed.
    fn on_bounds_change(&mut self, bounds: kurbo::Rect);

    /// Draw itself.
    ///
    /// The implementors are expected to save/restore the drawing context.
    fn draw(&self, cx: &mut impl piet::RenderContext) -> anyhow::Result<()>;

    /// Draw itself to a [cairo::Context].
    fn draw_to_cairo(&self, cx: &cairo::Context) -> anyhow::Result<()> {
        let mut piet_cx = piet_cairo::CairoRenderContext::new(cx);
        self.draw(&mut piet_cx)?;
        piet_cx.finish().map_err(|e| anyhow::anyhow!("{e:?}"))
    }

    /// Set the alpha of the content, ranging [0, 255].
    fn set_alpha(&mut self, alpha: u8);

    /// Set or clear the color filter applied to the content.
    fn set_color_filter(&mut self, color_filter: Option<Arc<dyn ColorFilter>>);

    /// The opacity of the content.
    fn opacity(&self) -> Opacity;
}
