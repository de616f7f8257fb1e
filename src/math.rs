//! Progress ↔ pixel mapping along the track.
//!
//! Both directions are plain linear interpolation. Nothing here clamps: a
//! progress outside `0..=max` lands outside the track.

/// Pixel x of `progress` on a track starting at `start` and `width` wide.
///
/// `max` must be non-zero; [`crate::ProgressState`] guarantees it.
pub(crate) fn progress_to_pixel(progress: f64, max: f64, start: f64, width: f64) -> f64 {
    (progress / max) * width + start
}

/// Inverse of [`progress_to_pixel`]. `None` when the track has no width.
pub(crate) fn pixel_to_progress(x: f64, max: f64, start: f64, width: f64) -> Option<f64> {
    if width <= 0.0 {
        return None;
    }
    Some((x - start) / width * max)
}

/// Format `value` with `decimal_places` digits, or truncated toward zero
/// when `integer` is set or no digits are wanted.
///
/// Float output rounds to nearest on the exact binary value, so `57.345`
/// (stored as `57.344999…`) prints as `57.34`.
pub(crate) fn format_value(value: f64, integer: bool, decimal_places: u32) -> String {
    if integer || decimal_places == 0 {
        // `as` saturates and maps NaN to 0
        format!("{}", value.trunc() as i64)
    } else {
        format!("{:.*}", decimal_places as usize, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_to_track_edges() {
        assert_eq!(progress_to_pixel(0.0, 100.0, 10.0, 280.0), 10.0);
        assert_eq!(progress_to_pixel(100.0, 100.0, 10.0, 280.0), 290.0);
        assert_eq!(progress_to_pixel(50.0, 100.0, 10.0, 280.0), 150.0);
    }

    #[test]
    fn extrapolates_outside_the_range() {
        assert!(progress_to_pixel(-10.0, 100.0, 10.0, 280.0) < 10.0);
        assert_eq!(progress_to_pixel(150.0, 100.0, 10.0, 280.0), 430.0);
    }

    #[test]
    fn collapsed_track_has_no_inverse() {
        assert_eq!(pixel_to_progress(5.0, 100.0, 10.0, 0.0), None);
        assert_eq!(pixel_to_progress(150.0, 100.0, 10.0, 280.0), Some(50.0));
    }

    #[test]
    fn formats_values() {
        assert_eq!(format_value(57.345, false, 2), "57.34");
        assert_eq!(format_value(57.345, true, 2), "57");
        assert_eq!(format_value(57.9, false, 0), "57");
        assert_eq!(format_value(-3.7, true, 1), "-3");
        assert_eq!(format_value(12.0, false, 1), "12.0");
    }
}
