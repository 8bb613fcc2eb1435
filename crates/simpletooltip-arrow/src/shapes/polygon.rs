// Imports
use crate::ext::Vector2Ext;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "polygon")]
/// A closed polygon, made of a start vertex followed by line-to vertices.
///
/// A polygon without any line-to vertices is empty and has no area to draw.
pub struct Polygon {
    /// The polygon start
    #[serde(rename = "start")]
    pub start: na::Vector2<f64>,
    /// The polygon path
    #[serde(rename = "path")]
    pub path: Vec<na::Vector2<f64>>,
}

impl Polygon {
    /// A new polygon
    pub fn new(start: na::Vector2<f64>) -> Self {
        Self {
            start,
            path: Vec::new(),
        }
    }

    /// Whether the polygon has no line-to vertices.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The vertices as they were added, starting with the start vertex.
    pub fn vertices(&self) -> Vec<na::Vector2<f64>> {
        if self.is_empty() {
            return Vec::new();
        }
        std::iter::once(self.start)
            .chain(self.path.iter().copied())
            .collect()
    }

    /// The vertices after closing, ending with the start vertex.
    ///
    /// The start vertex is only appended when the path does not already end there.
    pub fn closed_vertices(&self) -> Vec<na::Vector2<f64>> {
        let mut vertices = self.vertices();
        if let Some(last) = vertices.last() {
            if *last != self.start {
                vertices.push(self.start);
            }
        }
        vertices
    }

    /// The bounds of the polygon.
    pub fn bounds(&self) -> kurbo::Rect {
        self.path.iter().fold(
            kurbo::Rect::from_points(self.start.to_kurbo_point(), self.start.to_kurbo_point()),
            |bounds, p| bounds.union_pt(p.to_kurbo_point()),
        )
    }

    /// The closed outline path. Empty for an empty polygon.
    pub fn outline_path(&self) -> kurbo::BezPath {
        if self.is_empty() {
            return kurbo::BezPath::new();
        }
        let iter = std::iter::once(kurbo::PathEl::MoveTo(self.start.to_kurbo_point())).chain(
            self.path
                .iter()
                .map(|p| kurbo::PathEl::LineTo(p.to_kurbo_point())),
        );
        let mut path = kurbo::BezPath::from_iter(iter);
        path.close_path();
        path
    }
}

impl Extend<na::Vector2<f64>> for Polygon {
    fn extend<T: IntoIterator<Item = na::Vector2<f64>>>(&mut self, iter: T) {
        self.path.extend(iter);
    }
}
