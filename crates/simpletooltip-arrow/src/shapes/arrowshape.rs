// Imports
use super::Polygon;
use crate::Direction;

/// All doc-comments of this file rely on the following graphic, showing a left pointing arrow
/// inside its bounds of width `W` and height `H`:
///
/// ```text
///   (0,0) +---------------+ (W,0)
///         |          ___/ |
///         |     ___/      |
///   (0,H/2)<---           |
///         |     ‾‾‾\      |
///         |          ‾‾‾\ |
///   (0,H) +---------------+ (W,H)
/// ```
///
/// The border polygon spans the whole bounds. The fill polygon is the same triangle inset by the
/// border size `B`, so that the border peeks out beneath it as an outline.
/// The other directions are the same triangle, rotated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowShape {
    /// The direction the tip points to.
    pub direction: Direction,
    /// The size of the arrow bounds.
    pub size: na::Vector2<f64>,
    /// The border size.
    pub border_size: f64,
}

/// The polygons of an arrow, computed for one set of bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrowPaths {
    /// The inset polygon painted with the fill paint.
    pub fill: Polygon,
    /// The full size polygon painted beneath the fill polygon.
    pub border: Polygon,
}

impl ArrowPaths {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.fill.is_empty() && self.border.is_empty()
    }
}

impl ArrowShape {
    /// A new arrow shape.
    pub fn new(direction: Direction, size: na::Vector2<f64>, border_size: f64) -> Self {
        Self {
            direction,
            size,
            border_size,
        }
    }

    /// Compute the fill and border polygons.
    ///
    /// [Direction::Auto] has no geometry, both polygons are then empty.
    pub fn compute_paths(&self) -> ArrowPaths {
        let w = self.size[0];
        let h = self.size[1];
        let b = self.border_size;
        // midpoints snap to whole units
        let half_w = (w / 2.0).trunc();
        let half_h = (h / 2.0).trunc();

        let (fill, border) = match self.direction {
            Direction::Left => (
                [
                    na::vector![w + b, h],
                    na::vector![b, half_h],
                    na::vector![w, b],
                    na::vector![w, h],
                ],
                [
                    na::vector![w, h],
                    na::vector![0.0, half_h],
                    na::vector![w, 0.0],
                    na::vector![w, h],
                ],
            ),
            Direction::Top => (
                [
                    na::vector![b, h],
                    na::vector![half_w, b],
                    na::vector![w - b, h],
                    na::vector![b, h],
                ],
                [
                    na::vector![0.0, h],
                    na::vector![half_w, 0.0],
                    na::vector![w, h],
                    na::vector![0.0, h],
                ],
            ),
            Direction::Right => (
                [
                    na::vector![-b, 0.0],
                    na::vector![w - b, half_h],
                    na::vector![-b, h],
                    na::vector![-b, 0.0],
                ],
                [
                    na::vector![0.0, 0.0],
                    na::vector![w, half_h],
                    na::vector![0.0, h],
                    na::vector![0.0, 0.0],
                ],
            ),
            Direction::Bottom => (
                [
                    na::vector![0.0, -b],
                    na::vector![half_w, h - b],
                    na::vector![w, -b],
                    na::vector![0.0, -b],
                ],
                [
                    na::vector![0.0, 0.0],
                    na::vector![half_w, h],
                    na::vector![w, 0.0],
                    na::vector![0.0, 0.0],
                ],
            ),
            Direction::Auto => {
                tracing::debug!("Arrow direction is `auto`, no geometry to compute");
                return ArrowPaths::default();
            }
        };

        ArrowPaths {
            fill: Self::polygon_from_vertices(fill),
            border: Self::polygon_from_vertices(border),
        }
    }

    fn polygon_from_vertices(vertices: [na::Vector2<f64>; 4]) -> Polygon {
        let [start, rest @ ..] = vertices;
        let mut polygon = Polygon::new(start);
        polygon.extend(rest);
        polygon
    }
}
