//! Border widget configuration.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Configuration for a rainbow border widget. Immutable after the widget is
/// created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorderConfig {
    /// Border thickness in pixels. Must be positive.
    pub border_width: u32,
    /// Corner radius in pixels. Zero selects the square (no-corner) variant.
    pub corner_radius: u32,
    /// Animation frame rate in frames per second. Must be positive.
    pub frame_rate: u32,
    /// Canvas fill behind hosted content.
    pub base_color: Color,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            border_width: 5,
            corner_radius: 10,
            frame_rate: 20,
            base_color: Color::from_rgba8(0x2b, 0x2b, 0x2b, 255),
        }
    }
}

impl BorderConfig {
    /// Whether the rounded-corner traversal applies.
    pub fn is_rounded(&self) -> bool {
        self.corner_radius > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_selection() {
        assert!(BorderConfig::default().is_rounded());
        let square = BorderConfig {
            corner_radius: 0,
            ..BorderConfig::default()
        };
        assert!(!square.is_rounded());
    }

    #[test]
    fn test_config_serialization() {
        let config = BorderConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"border_width\":5"));

        let deserialized: BorderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
