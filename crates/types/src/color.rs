//! Foundational color type used throughout rainbow-border.

use serde::{Deserialize, Serialize};

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8,
        )
    }

    /// Format as a lowercase `#rrggbb` hex string (alpha is dropped).
    pub fn to_hex_rgb(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Parse a `#rrggbb` or `rrggbb` hex string into an opaque color.
    pub fn from_hex_rgb(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::from_rgba8(r, g, b, 255))
    }

    /// Convert to GTK RGBA
    #[cfg(feature = "gtk")]
    pub fn to_gdk_rgba(&self) -> gdk4::RGBA {
        gdk4::RGBA::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32)
    }

    /// Create from GTK RGBA
    #[cfg(feature = "gtk")]
    pub fn from_gdk_rgba(rgba: &gdk4::RGBA) -> Self {
        Self {
            r: rgba.red() as f64,
            g: rgba.green() as f64,
            b: rgba.blue() as f64,
            a: rgba.alpha() as f64,
        }
    }

    /// Apply to Cairo context
    #[cfg(feature = "gtk")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_round_trip() {
        let color = Color::from_rgba8(255, 128, 0, 255);
        assert_eq!(color.to_rgba8(), (255, 128, 0, 255));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::from_rgba8(255, 0, 0, 255).to_hex_rgb(), "#ff0000");
        assert_eq!(Color::from_rgba8(43, 43, 43, 255).to_hex_rgb(), "#2b2b2b");
        assert_eq!(Color::from_rgba8(0, 255, 255, 255).to_hex_rgb(), "#00ffff");
    }

    #[test]
    fn test_hex_parsing() {
        let color = Color::from_hex_rgb("#2b2b2b").unwrap();
        assert_eq!(color.to_rgba8(), (43, 43, 43, 255));
        assert_eq!(Color::from_hex_rgb("ff00ff").unwrap().to_hex_rgb(), "#ff00ff");
        assert!(Color::from_hex_rgb("#fff").is_none());
        assert!(Color::from_hex_rgb("not a color").is_none());
    }
}
