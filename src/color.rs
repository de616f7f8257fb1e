//! Hex color attributes.
//!
//! Attribute colors use the `#AARRGGBB` ordering, so alpha comes first when
//! present. Accepted lengths are 3, 4, 6 and 8 digits, with or without `#`.

use floem::peniko::Color;

/// Parse a hex color attribute.
///
/// 3 and 6-char forms are opaque. 4 and 8-char forms carry a leading alpha.
pub fn parse_color(hex: &str) -> Option<Color> {
    let stripped = hex.trim().trim_start_matches('#');
    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&stripped[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&stripped[i..i + 2], 16).ok();
    match stripped.len() {
        3 => Some(Color::rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba8(nibble(1)?, nibble(2)?, nibble(3)?, nibble(0)?)),
        6 => Some(Color::rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba8(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
        _ => None,
    }
}

/// Resolve an optional color attribute, falling back to `default` when it is
/// absent or malformed.
pub(crate) fn color_or(value: Option<&str>, default: Color, attr: &'static str) -> Color {
    match value {
        None => default,
        Some(raw) => parse_color(raw).unwrap_or_else(|| {
            tracing::warn!(attr, value = raw, "malformed color attribute, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_lengths() {
        assert_eq!(parse_color("#F00"), Some(Color::rgb8(255, 0, 0)));
        assert_eq!(parse_color("80F0"), Some(Color::rgba8(255, 0, 0, 0x88)));
        assert_eq!(parse_color("#3B82F6"), Some(Color::rgb8(0x3B, 0x82, 0xF6)));
        assert_eq!(
            parse_color("#803B82F6"),
            Some(Color::rgba8(0x3B, 0x82, 0xF6, 0x80))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#GGHHII"), None);
        assert_eq!(parse_color("blue"), None);
    }

    #[test]
    fn malformed_attribute_falls_back() {
        let fallback = Color::rgb8(1, 2, 3);
        assert_eq!(color_or(Some("nope"), fallback, "thumb_color"), fallback);
        assert_eq!(color_or(None, fallback, "thumb_color"), fallback);
        assert_eq!(
            color_or(Some("#000"), fallback, "thumb_color"),
            Color::rgb8(0, 0, 0)
        );
    }
}
