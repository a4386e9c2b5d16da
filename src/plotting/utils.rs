// src/plotting/utils.rs
//
// Utility functions for plotting module

use plotters::style::RGBColor;

/// Format a number with thousands separators
///
/// # Arguments
/// * `num` - Number to format
///
/// # Returns
/// * String with formatted number (e.g., "1,234,567")
pub fn format_number(num: u64) -> String {
    let num_str = num.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Blend two colors based on a factor (0.0 to 1.0)
///
/// # Arguments
/// * `color1` - First color
/// * `color2` - Second color
/// * `factor` - Blend factor (0.0 = all color1, 1.0 = all color2)
///
/// # Returns
/// * Blended RGBColor
pub fn blend_colors(color1: &RGBColor, color2: &RGBColor, factor: f64) -> RGBColor {
    let factor = factor.clamp(0.0, 1.0);

    RGBColor(
        ((color1.0 as f64) * (1.0 - factor) + (color2.0 as f64) * factor) as u8,
        ((color1.1 as f64) * (1.0 - factor) + (color2.1 as f64) * factor) as u8,
        ((color1.2 as f64) * (1.0 - factor) + (color2.2 as f64) * factor) as u8,
    )
}

/// Vertices of a post-step line through the coverage array.
///
/// Position `i` holds `counts[i]` until `i + 1`. Runs of equal coverage
/// collapse to their two end points so long flat stretches stay cheap.
pub fn step_points(counts: &[u32]) -> Vec<(i64, f64)> {
    let Some(&first) = counts.first() else {
        return Vec::new();
    };

    let mut points = vec![(0i64, first as f64)];
    for (i, pair) in counts.windows(2).enumerate() {
        if pair[0] != pair[1] {
            let x = (i + 1) as i64;
            points.push((x, pair[0] as f64));
            points.push((x, pair[1] as f64));
        }
    }

    let last_x = (counts.len() - 1) as i64;
    if points.last().map(|&(x, _)| x) != Some(last_x) {
        points.push((last_x, counts[counts.len() - 1] as f64));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1000000), "1,000,000");
        assert_eq!(format_number(42), "42");
    }

    #[test]
    fn test_blend_colors() {
        let color1 = RGBColor(0, 0, 0);
        let color2 = RGBColor(255, 255, 255);

        let blend_half = blend_colors(&color1, &color2, 0.5);
        assert_eq!(blend_half.0, 127);
        assert_eq!(blend_half.1, 127);
        assert_eq!(blend_half.2, 127);
    }

    #[test]
    fn test_step_points() {
        let points = step_points(&[0, 0, 2, 2, 1]);
        assert_eq!(
            points,
            vec![(0, 0.0), (2, 0.0), (2, 2.0), (4, 2.0), (4, 1.0)]
        );
    }

    #[test]
    fn test_step_points_flat_and_empty() {
        assert_eq!(step_points(&[3, 3, 3]), vec![(0, 3.0), (2, 3.0)]);
        assert_eq!(step_points(&[7]), vec![(0, 7.0)]);
        assert!(step_points(&[]).is_empty());
    }
}
