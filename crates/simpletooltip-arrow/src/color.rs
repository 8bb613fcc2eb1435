// Imports
use serde::{Deserialize, Serialize};

/// A rgba color
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(default, rename = "color")]
pub struct Color {
    /// Red, ranging [0.0, 1.0].
    #[serde(rename = "r")]
    pub r: f64,
    /// Green, ranging [0.0, 1.0].
    #[serde(rename = "g")]
    pub g: f64,
    /// Blue, ranging [0.0, 1.0].
    #[serde(rename = "b")]
    pub b: f64,
    /// Alpha, ranging [0.0, 1.0].
    #[serde(rename = "a")]
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Transparent color with r,g,b set to 0.0.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Black color.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// White color.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Red color.
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Green color.
    pub const GREEN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };

    /// Blue color.
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };

    /// A new color from rgba values.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// A new color from 8 bit channel values.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// A color from a packed `0xAARRGGBB` value, the layout used by color ints on Android.
    pub fn from_argb(value: u32) -> Self {
        Self::from_rgba8(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
            ((value >> 24) & 0xff) as u8,
        )
    }

    /// Packs into a `0xAARRGGBB` value.
    pub fn to_argb(self) -> u32 {
        (u32::from(self.alpha_byte()) << 24)
            | (u32::from(Self::channel_byte(self.r)) << 16)
            | (u32::from(Self::channel_byte(self.g)) << 8)
            | u32::from(Self::channel_byte(self.b))
    }

    /// The alpha channel as 8 bit value, ranging [0, 255].
    pub fn alpha_byte(&self) -> u8 {
        Self::channel_byte(self.a)
    }

    /// The same color with the alpha channel replaced by the given 8 bit value.
    ///
    /// The rgb channels are left untouched.
    pub fn with_alpha_byte(self, alpha: u8) -> Self {
        Self {
            a: f64::from(alpha) / 255.0,
            ..self
        }
    }

    /// Approximate equality.
    pub fn approx_eq(self, other: Self) -> bool {
        approx::relative_eq!(self.r, other.r)
            && approx::relative_eq!(self.g, other.g)
            && approx::relative_eq!(self.b, other.b)
            && approx::relative_eq!(self.a, other.a)
    }

    fn channel_byte(value: f64) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl From<piet::Color> for Color {
    fn from(piet_color: piet::Color) -> Self {
        let piet_rgba = piet_color.as_rgba();
        Self {
            r: piet_rgba.0,
            g: piet_rgba.1,
            b: piet_rgba.2,
            a: piet_rgba.3,
        }
    }
}

impl From<Color> for piet::Color {
    fn from(color: Color) -> Self {
        piet::Color::rgba(color.r, color.g, color.b, color.a)
    }
}

impl From<(f64, f64, f64, f64)> for Color {
    fn from(tuple: (f64, f64, f64, f64)) -> Self {
        Self {
            r: tuple.0,
            g: tuple.1,
            b: tuple.2,
            a: tuple.3,
        }
    }
}

impl From<Color> for (f64, f64, f64, f64) {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn argb_layout() {
        let color = Color::from_argb(0x80ff0040);

        assert_eq!(color.alpha_byte(), 0x80);
        assert!(color.approx_eq(Color::from_rgba8(0xff, 0x00, 0x40, 0x80)));
        assert_eq!(color.to_argb(), 0x80ff0040);
    }

    #[test]
    fn alpha_byte_keeps_rgb() {
        let color = Color::from_argb(0xff336699).with_alpha_byte(0x10);

        assert_eq!(color.to_argb(), 0x10336699);
    }

    #[test]
    fn alpha_byte_rounds() {
        assert_eq!(Color::TRANSPARENT.alpha_byte(), 0);
        assert_eq!(Color::BLACK.alpha_byte(), 255);
        assert_eq!(Color::new(0.0, 0.0, 0.0, 0.999).alpha_byte(), 255);
        assert_eq!(Color::new(0.0, 0.0, 0.0, 0.5).alpha_byte(), 128);
    }
}
