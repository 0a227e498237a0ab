// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry and light formulas
//!
//! Closed-form helpers used by the analysis pipeline. All of them are pure
//! and total over their documented domains; input validation happens in
//! [`crate::room::RoomSpec::validate`].

use crate::catalog::{Orientation, ReflectanceBand, FLOOR_REFLECTANCE};
use crate::color::Rgb;

/// Floor area in m²
#[inline]
pub fn area(length: f64, width: f64) -> f64 {
    length * width
}

/// Room volume in m³
#[inline]
pub fn volume(length: f64, width: f64, height: f64) -> f64 {
    area(length, width) * height
}

/// Total glazed area in m²
#[inline]
pub fn window_area(count: u32, window_width: f64, window_height: f64) -> f64 {
    count as f64 * window_width * window_height
}

/// Share of the artificial light requirement covered by daylight.
///
/// Window-to-floor ratio scaled by the orientation exposure. The caller
/// must handle the no-window case itself and never pass a zero
/// `room_area`. The result is not capped at 1.
pub fn natural_light_factor(window_area: f64, room_area: f64, orientation: Orientation) -> f64 {
    let window_to_floor_ratio = window_area / room_area;
    window_to_floor_ratio * orientation.exposure_factor()
}

/// Linear interpolation of `x` from `from` onto `to`, clamped to the ends
fn interpolate(x: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    if x <= from.0 {
        return to.0;
    }
    if x >= from.1 {
        return to.1;
    }
    let t = (x - from.0) / (from.1 - from.0);
    to.0 + t * (to.1 - to.0)
}

/// Approximate surface reflectance from its color brightness
pub fn color_reflectance(color: Rgb) -> f64 {
    let brightness = color.brightness();
    let band = ReflectanceBand::for_brightness(brightness);
    interpolate(brightness, band.brightness_range(), band.reflectance_range())
}

/// Surface-weighted reflectance: four walls, the ceiling and a fixed floor
pub fn average_reflectance(wall_color: Rgb, ceiling_color: Rgb) -> f64 {
    let wall = color_reflectance(wall_color);
    let ceiling = color_reflectance(ceiling_color);
    (4.0 * wall + ceiling + FLOOR_REFLECTANCE) / 6.0
}

/// Artificial lumens needed to reach `required_lux` over `room_area`.
///
/// Brighter rooms need less light (`1 / (0.8 + reflectance)`) and daylight
/// removes its share. Clamped at 0 because the natural light factor can
/// exceed 1 for large, well exposed windows.
pub fn required_lumens(
    room_area: f64,
    required_lux: f64,
    reflectance: f64,
    natural_light_factor: f64,
) -> f64 {
    let base_lumens = room_area * required_lux;
    let reflectance_factor = 1.0 / (0.8 + reflectance);
    let artificial_lumens = base_lumens * reflectance_factor * (1.0 - natural_light_factor);
    artificial_lumens.max(0.0)
}

/// Maximum center-to-center fixture spacing for a mounting height
#[inline]
pub fn recommended_spacing(mounting_height: f64, spacing_factor: f64) -> f64 {
    mounting_height * spacing_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gray(level: u8) -> Rgb {
        Rgb::new(level, level, level)
    }

    #[test]
    fn test_area_and_volume() {
        assert_eq!(area(4.0, 3.0), 12.0);
        assert_eq!(area(3.0, 4.0), area(4.0, 3.0));
        assert_relative_eq!(volume(4.0, 3.0, 2.4), 28.8, epsilon = 1e-12);
        assert_relative_eq!(area(7.3, 2.15), area(2.15, 7.3));
    }

    #[test]
    fn test_window_area() {
        assert_relative_eq!(window_area(2, 1.2, 1.5), 3.6, epsilon = 1e-12);
        assert_eq!(window_area(0, 1.2, 1.5), 0.0);
    }

    #[test]
    fn test_natural_light_factor_by_orientation() {
        let south = natural_light_factor(3.0, 12.0, Orientation::South);
        let east = natural_light_factor(3.0, 12.0, Orientation::East);
        let north = natural_light_factor(3.0, 12.0, Orientation::North);
        assert_relative_eq!(south, 0.25);
        assert_relative_eq!(east, 0.2125);
        assert_relative_eq!(north, 0.1625);
        assert_eq!(natural_light_factor(0.0, 12.0, Orientation::South), 0.0);
    }

    #[test]
    fn test_color_reflectance_band_ends() {
        assert_relative_eq!(color_reflectance(Rgb::WHITE), 0.8);
        assert_relative_eq!(color_reflectance(Rgb::BLACK), 0.1);
    }

    #[test]
    fn test_color_reflectance_monotonic() {
        let mut previous = color_reflectance(gray(0));
        for level in 1..=255u8 {
            let current = color_reflectance(gray(level));
            assert!(
                current >= previous - 1e-12,
                "reflectance dropped at level {level}: {previous} -> {current}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_color_reflectance_continuous_at_band_edges() {
        for edge in [0.3, 0.7] {
            let below = ReflectanceBand::for_brightness(edge - 1e-9);
            let above = ReflectanceBand::for_brightness(edge + 1e-9);
            let left = interpolate(edge - 1e-9, below.brightness_range(), below.reflectance_range());
            let right = interpolate(edge + 1e-9, above.brightness_range(), above.reflectance_range());
            assert_relative_eq!(left, right, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_average_reflectance_white() {
        let r = average_reflectance(Rgb::WHITE, Rgb::WHITE);
        assert_relative_eq!(r, (4.0 * 0.8 + 0.8 + 0.3) / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_required_lumens_example_room() {
        // 4 x 3 m living room, white surfaces, no windows
        let reflectance = average_reflectance(Rgb::WHITE, Rgb::WHITE);
        let lumens = required_lumens(12.0, 300.0, reflectance, 0.0);
        assert_relative_eq!(lumens, 21600.0 / 9.1, epsilon = 1e-9);
        assert_relative_eq!(lumens, 2373.626_373_626, epsilon = 1e-6);
    }

    #[test]
    fn test_required_lumens_decreases_with_daylight() {
        let mut previous = f64::INFINITY;
        for step in 0..=20 {
            let factor = step as f64 * 0.1;
            let lumens = required_lumens(12.0, 300.0, 0.5, factor);
            assert!(lumens <= previous);
            assert!(lumens >= 0.0);
            previous = lumens;
        }
        assert_eq!(required_lumens(12.0, 300.0, 0.5, 1.7), 0.0);
    }

    #[test]
    fn test_required_lumens_decreases_with_reflectance() {
        let dark = required_lumens(12.0, 300.0, 0.1, 0.2);
        let medium = required_lumens(12.0, 300.0, 0.45, 0.2);
        let light = required_lumens(12.0, 300.0, 0.8, 0.2);
        assert!(dark > medium);
        assert!(medium > light);
    }

    #[test]
    fn test_recommended_spacing() {
        assert_relative_eq!(recommended_spacing(2.4, 1.5), 3.6, epsilon = 1e-12);
    }
}
