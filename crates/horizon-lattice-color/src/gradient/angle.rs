//! Gradient angle parsing and formatting.
//!
//! Angles are stored in degrees in `[0, 360)`. Direction keywords follow the
//! legacy prefixed convention, naming the side the gradient starts from:
//! `top` is 0, `right` 90, `bottom` 180, `left` 270, and the diagonals sit
//! at the 45 degree multiples in between.
//!
//! The standard `to <side>` syntax names the side the gradient ends at, so it
//! is reversed before lookup: `to right` is stored as `left` (270), and
//! formatting 270 for standard output prints `to right` again.

/// Keyword to angle, with both word orders for the diagonals.
const KEYWORD_ANGLES: [(&str, i32); 12] = [
    ("top", 0),
    ("right", 90),
    ("bottom", 180),
    ("left", 270),
    ("right top", 45),
    ("top right", 45),
    ("bottom right", 135),
    ("right bottom", 135),
    ("left bottom", 225),
    ("bottom left", 225),
    ("top left", 315),
    ("left top", 315),
];

/// The keyword printed for each keyword angle.
const ANGLE_KEYWORDS: [(i32, &str); 8] = [
    (0, "top"),
    (45, "top right"),
    (90, "right"),
    (135, "right bottom"),
    (180, "bottom"),
    (225, "bottom left"),
    (270, "left"),
    (315, "left top"),
];

/// Opposite directions. The table is symmetric.
const OPPOSITES: [(&str, &str); 12] = [
    ("top", "bottom"),
    ("right", "left"),
    ("bottom", "top"),
    ("left", "right"),
    ("right top", "left bottom"),
    ("top right", "bottom left"),
    ("bottom right", "top left"),
    ("right bottom", "left top"),
    ("left bottom", "right top"),
    ("bottom left", "top right"),
    ("top left", "bottom right"),
    ("left top", "right bottom"),
];

/// Reverse a direction keyword. Anything else is returned unchanged.
pub fn reverse_direction(direction: &str) -> &str {
    OPPOSITES
        .iter()
        .find(|(from, _)| *from == direction)
        .map_or(direction, |(_, to)| to)
}

/// The angle of a direction keyword.
pub fn keyword_angle(keyword: &str) -> Option<i32> {
    KEYWORD_ANGLES
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|(_, angle)| *angle)
}

/// The keyword for an angle, if it is exactly one of the keyword angles.
pub fn angle_keyword(angle: f64) -> Option<&'static str> {
    ANGLE_KEYWORDS
        .iter()
        .find(|(degrees, _)| *degrees as f64 == angle)
        .map(|(_, keyword)| *keyword)
}

/// Parse an angle token: `45deg`, `-90`, `left`, `to right top`, ...
///
/// A `to <side>` token is stored as the angle of the opposite keyword, so
/// `to top` yields 180 and `to right` yields 270. [`format_angle`] reverses it
/// back for standard output.
///
/// A token that is neither a keyword nor starts with an integer yields NaN.
pub fn parse_angle(input: &str) -> f64 {
    let lowered = input.trim().to_ascii_lowercase();
    let token = match lowered.strip_prefix("to ") {
        Some(rest) => reverse_direction(rest.trim()),
        None => lowered.as_str(),
    };

    if let Some(angle) = keyword_angle(token) {
        return angle as f64;
    }

    normalize_angle(parse_leading_int(token))
}

/// Normalize whole degrees into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let degrees = degrees.trunc();
    if degrees == 0.0 {
        return 0.0;
    }

    if degrees >= 360.0 {
        degrees % 360.0
    } else if degrees < 0.0 {
        let rem = degrees % 360.0;
        if rem == 0.0 { 0.0 } else { rem + 360.0 }
    } else {
        degrees
    }
}

/// Format an angle for output.
///
/// With `use_keyword`, keyword angles print as keywords. Standard output uses
/// the `to <side>` form; prefixed output prints the bare keyword.
pub fn format_angle(angle: f64, use_keyword: bool, standard: bool) -> String {
    let degrees = angle.trunc();

    match angle_keyword(degrees) {
        Some(keyword) if use_keyword && standard => {
            format!("to {}", reverse_direction(keyword))
        }
        Some(keyword) if use_keyword => keyword.to_string(),
        _ => format!("{degrees}deg"),
    }
}

/// Parse a leading base-10 integer, ignoring anything after it.
fn parse_leading_int(token: &str) -> f64 {
    let token = token.trim_start();
    let (sign, digits) = match token.as_bytes().first() {
        Some(b'-') => (-1.0, &token[1..]),
        Some(b'+') => (1.0, &token[1..]),
        _ => (1.0, token),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return f64::NAN;
    }

    digits[..end]
        .parse::<f64>()
        .map_or(f64::NAN, |value| sign * value)
}
