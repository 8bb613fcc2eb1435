/// Extension trait for [`na::Vector2<f64>`].
pub trait Vector2Ext
where
    Self: Sized,
{
    /// Converts to kurbo::Point
    fn to_kurbo_point(&self) -> kurbo::Point;
    /// Converts from kurbo::Point
    fn from_kurbo_point(kurbo_point: kurbo::Point) -> Self;
    /// Approximate equality
    fn approx_eq(&self, other: &Self) -> bool;
}

impl Vector2Ext for na::Vector2<f64> {
    fn to_kurbo_point(&self) -> kurbo::Point {
        kurbo::Point::new(self[0], self[1])
    }

    fn from_kurbo_point(kurbo_point: kurbo::Point) -> Self {
        na::vector![kurbo_point.x, kurbo_point.y]
    }

    fn approx_eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self[0], other[0]) && approx::relative_eq!(self[1], other[1])
    }
}

/// Extension trait for [kurbo::Rect].
pub trait RectExt
where
    Self: Sized,
{
    /// The size, with negative extents of unordered rects reported as zero.
    fn size_v(&self) -> na::Vector2<f64>;
    /// The rect moved to the origin, keeping its size.
    fn at_origin(&self) -> Self;
}

impl RectExt for kurbo::Rect {
    fn size_v(&self) -> na::Vector2<f64> {
        na::vector![self.width().max(0.0), self.height().max(0.0)]
    }

    fn at_origin(&self) -> Self {
        let size = self.size_v();
        kurbo::Rect::new(0.0, 0.0, size[0], size[1])
    }
}

#[cfg(test)]
mod tests {
    use super::{RectExt, Vector2Ext};

    #[test]
    fn kurbo_point_conversion() {
        let v = na::vector![3.5, -2.0];
        assert!(na::Vector2::from_kurbo_point(v.to_kurbo_point()).approx_eq(&v));
    }

    #[test]
    fn rect_size() {
        let rect = kurbo::Rect::new(10.0, 20.0, 110.0, 70.0);
        assert!(rect.size_v().approx_eq(&na::vector![100.0, 50.0]));
        assert_eq!(rect.at_origin(), kurbo::Rect::new(0.0, 0.0, 100.0, 50.0));

        let inverted = kurbo::Rect::new(10.0, 20.0, 5.0, 10.0);
        assert!(inverted.size_v().approx_eq(&na::vector![0.0, 0.0]));
    }
}
