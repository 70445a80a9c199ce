//! Rainbow color mapping along the border perimeter.

use rainbow_border_types::Color;

/// Map a perimeter distance to a color of the rainbow.
///
/// The spectrum is divided into six equal sectors (red → yellow → green →
/// cyan → blue → magenta → red) with linear interpolation inside each
/// sector, the classic full-saturation HSV hue sweep. `offset` is the
/// animation accumulator; adding it before the modulo is what makes the
/// colors travel around the border.
///
/// `perimeter` must be positive. Callers guard degenerate viewports before
/// asking for colors.
pub fn rainbow_color(position: f64, perimeter: f64, offset: f64) -> Color {
    debug_assert!(perimeter > 0.0, "perimeter must be positive");

    // rem_euclid keeps the wrapped distance non-negative for any position
    let color_position = (position + offset).rem_euclid(perimeter);
    let hue = color_position / perimeter * 6.0;

    let (r, g, b) = if hue < 1.0 {
        // Red → Yellow
        (255, (255.0 * hue) as u8, 0)
    } else if hue < 2.0 {
        // Yellow → Green
        ((255.0 * (2.0 - hue)) as u8, 255, 0)
    } else if hue < 3.0 {
        // Green → Cyan
        (0, 255, (255.0 * (hue - 2.0)) as u8)
    } else if hue < 4.0 {
        // Cyan → Blue
        (0, (255.0 * (4.0 - hue)) as u8, 255)
    } else if hue < 5.0 {
        // Blue → Magenta
        ((255.0 * (hue - 4.0)) as u8, 0, 255)
    } else {
        // Magenta → Red
        (255, 0, (255.0 * (6.0 - hue)) as u8)
    };

    Color::from_rgba8(r, g, b, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIMETER: f64 = 600.0;

    fn rgb(position: f64, offset: f64) -> (u8, u8, u8) {
        let (r, g, b, _) = rainbow_color(position, PERIMETER, offset).to_rgba8();
        (r, g, b)
    }

    #[test]
    fn test_sector_boundaries_are_exact() {
        assert_eq!(rgb(0.0, 0.0), (255, 0, 0), "red");
        assert_eq!(rgb(PERIMETER / 6.0, 0.0), (255, 255, 0), "yellow");
        assert_eq!(rgb(PERIMETER / 3.0, 0.0), (0, 255, 0), "green");
        assert_eq!(rgb(PERIMETER / 2.0, 0.0), (0, 255, 255), "cyan");
        assert_eq!(rgb(PERIMETER * 2.0 / 3.0, 0.0), (0, 0, 255), "blue");
        assert_eq!(rgb(PERIMETER * 5.0 / 6.0, 0.0), (255, 0, 255), "magenta");
    }

    #[test]
    fn test_periodic_in_whole_perimeters() {
        for position in [0.0, 37.25, 123.5, 299.0, 571.75] {
            let base = rgb(position, 0.0);
            for k in [-2.0, -1.0, 1.0, 2.0, 5.0] {
                assert_eq!(rgb(position + k * PERIMETER, 0.0), base);
            }
        }
    }

    #[test]
    fn test_offset_is_a_position_shift() {
        for position in [0.0, 50.5, 431.0] {
            for offset in [3.0, 99.0, 1234.5] {
                assert_eq!(rgb(position, offset), rgb(position + offset, 0.0));
            }
        }
    }

    #[test]
    fn test_negative_positions_wrap_forward() {
        assert_eq!(rgb(-PERIMETER, 0.0), rgb(0.0, 0.0));
        assert_eq!(rgb(-150.0, 0.0), rgb(PERIMETER - 150.0, 0.0));
    }

    #[test]
    fn test_hex_output_matches_canvas_format() {
        assert_eq!(rainbow_color(0.0, PERIMETER, 0.0).to_hex_rgb(), "#ff0000");
        assert_eq!(
            rainbow_color(PERIMETER / 2.0, PERIMETER, 0.0).to_hex_rgb(),
            "#00ffff"
        );
    }

    #[test]
    fn test_channels_interpolate_within_first_sector() {
        // Halfway through red → yellow, green is at 127 (truncated).
        assert_eq!(rgb(PERIMETER / 12.0, 0.0), (255, 127, 0));
    }
}
