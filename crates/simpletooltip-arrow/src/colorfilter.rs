// Imports
use crate::Color;

/// Types that transform the color of a paint before it is composited.
///
/// Filters are shared between paints as `Arc<dyn ColorFilter>`.
pub trait ColorFilter: std::fmt::Debug + Send + Sync {
    /// The filtered color.
    fn filter(&self, color: Color) -> Color;
}

/// Tints with a single color, in the manner of a source-in blend.
///
/// The result carries the rgb of the tint and the product of both alphas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintColorFilter {
    /// The tint color.
    pub tint: Color,
}

impl TintColorFilter {
    /// A new tint filter.
    pub fn new(tint: Color) -> Self {
        Self { tint }
    }
}

impl ColorFilter for TintColorFilter {
    fn filter(&self, color: Color) -> Color {
        Color::new(self.tint.r, self.tint.g, self.tint.b, self.tint.a * color.a)
    }
}

/// Multiplies the rgb channels and then adds to them. Alpha is left untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingColorFilter {
    /// Multiplied per channel, alpha is ignored.
    pub mul: Color,
    /// Added per channel after multiplying, alpha is ignored.
    pub add: Color,
}

impl LightingColorFilter {
    /// A new lighting filter.
    pub fn new(mul: Color, add: Color) -> Self {
        Self { mul, add }
    }
}

impl ColorFilter for LightingColorFilter {
    fn filter(&self, color: Color) -> Color {
        Color::new(
            color.r * self.mul.r + self.add.r,
            color.g * self.mul.g + self.add.g,
            color.b * self.mul.b + self.add.b,
            color.a,
        )
    }
}

/// A 4x5 matrix transforming `[r, g, b, a, 1]` into `[r', g', b', a']`.
///
/// The channels are in the range [0.0, 255.0], so the last column is an offset in 8 bit units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrixColorFilter {
    /// The matrix.
    pub matrix: na::SMatrix<f64, 4, 5>,
}

impl Default for ColorMatrixColorFilter {
    fn default() -> Self {
        Self {
            matrix: na::SMatrix::<f64, 4, 5>::identity(),
        }
    }
}

impl ColorMatrixColorFilter {
    /// A new color matrix filter.
    pub fn new(matrix: na::SMatrix<f64, 4, 5>) -> Self {
        Self { matrix }
    }

    /// A filter that only scales the alpha channel by the given factor.
    pub fn alpha_scale(factor: f64) -> Self {
        let mut filter = Self::default();
        filter.matrix[(3, 3)] = factor;
        filter
    }

    /// A filter that desaturates to grayscale, weighting the channels by their luma.
    pub fn grayscale() -> Self {
        let luma = na::RowSVector::<f64, 5>::from_row_slice(&[0.2126, 0.7152, 0.0722, 0.0, 0.0]);
        let mut filter = Self::default();
        filter.matrix.set_row(0, &luma);
        filter.matrix.set_row(1, &luma);
        filter.matrix.set_row(2, &luma);
        filter
    }
}

impl ColorFilter for ColorMatrixColorFilter {
    fn filter(&self, color: Color) -> Color {
        let input = na::SVector::<f64, 5>::new(
            color.r * 255.0,
            color.g * 255.0,
            color.b * 255.0,
            color.a * 255.0,
            1.0,
        );
        let output = self.matrix * input / 255.0;

        Color::new(output[0], output[1], output[2], output[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_keeps_source_alpha() {
        let filter = TintColorFilter::new(Color::RED);
        let filtered = filter.filter(Color::from_argb(0x80_00_ff_00));

        assert!(filtered.approx_eq(Color::new(1.0, 0.0, 0.0, 128.0 / 255.0)));
    }

    #[test]
    fn lighting_clamps() {
        let filter = LightingColorFilter::new(
            Color::new(0.5, 1.0, 1.0, 1.0),
            Color::new(0.0, 0.5, 0.0, 0.0),
        );
        let filtered = filter.filter(Color::new(1.0, 1.0, 0.2, 0.3));

        assert!(filtered.approx_eq(Color::new(0.5, 1.0, 0.2, 0.3)));
    }

    #[test]
    fn identity_matrix() {
        let color = Color::from_argb(0xc0_12_34_56);

        assert!(ColorMatrixColorFilter::default()
            .filter(color)
            .approx_eq(color));
    }

    #[test]
    fn matrix_offset_in_8bit_units() {
        let mut filter = ColorMatrixColorFilter::default();
        filter.matrix[(0, 4)] = 51.0;

        let filtered = filter.filter(Color::BLACK);
        assert!(filtered.approx_eq(Color::new(0.2, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn alpha_scale_and_grayscale() {
        let halved = ColorMatrixColorFilter::alpha_scale(0.5).filter(Color::BLUE);
        assert!(halved.approx_eq(Color::new(0.0, 0.0, 1.0, 0.5)));

        let gray = ColorMatrixColorFilter::grayscale().filter(Color::WHITE);
        assert!(gray.approx_eq(Color::WHITE));
    }
}
