//! Textual color formats.
//!
//! The [`ColorCodec`] holds an ordered list of [`FormatDescriptor`]s. Parsing
//! tests each descriptor in declared order and stops at the first one that
//! recognizes the input:
//!
//! 1. `rgb(r, g, b)`
//! 2. `rgba(r, g, b, a)`
//! 3. `hsl(h, s%, l%)`
//! 4. `hsla(h, s%, l%, a)`
//! 5. `#rrggbb` / `#rgb`
//! 6. `transparent`
//! 7. a CSS color keyword such as `red`

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Deserialize;

use super::convert::{Hsl, hsl_to_rgb, rgb_to_hsl};
use super::named;
use super::value::{ColorValue, ColorUpdate};
use crate::Error;

/// A textual color syntax family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    #[default]
    Hex,
    Transparent,
    /// A CSS color keyword.
    Name,
}

impl ColorFormat {
    /// The canonical upper-case name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Rgb => "RGB",
            ColorFormat::Rgba => "RGBA",
            ColorFormat::Hsl => "HSL",
            ColorFormat::Hsla => "HSLA",
            ColorFormat::Hex => "HEX",
            ColorFormat::Transparent => "TRANSPARENT",
            ColorFormat::Name => "NAME",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RGB" => Ok(ColorFormat::Rgb),
            "RGBA" => Ok(ColorFormat::Rgba),
            "HSL" => Ok(ColorFormat::Hsl),
            "HSLA" => Ok(ColorFormat::Hsla),
            "HEX" => Ok(ColorFormat::Hex),
            "TRANSPARENT" => Ok(ColorFormat::Transparent),
            "NAME" => Ok(ColorFormat::Name),
            _ => Err(Error::unknown_format(s)),
        }
    }
}

type ParseFn = fn(&Captures<'_>) -> Option<ColorUpdate>;
type SerializeFn = fn(&ColorValue) -> String;

/// One entry of the codec: a matcher, a parser, and a serializer.
pub struct FormatDescriptor {
    format: ColorFormat,
    pattern: Regex,
    parse: ParseFn,
    serialize: SerializeFn,
}

impl FormatDescriptor {
    fn new(format: ColorFormat, pattern: &str, parse: ParseFn, serialize: SerializeFn) -> Self {
        Self {
            format,
            pattern: Regex::new(pattern).expect("color format patterns are valid"),
            parse,
            serialize,
        }
    }

    /// The format this descriptor handles.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Match the input and convert the captured groups to attributes.
    pub fn parse(&self, input: &str) -> Option<ColorUpdate> {
        let captures = self.pattern.captures(input)?;
        (self.parse)(&captures)
    }

    /// Print a color in this syntax.
    pub fn serialize(&self, value: &ColorValue) -> String {
        (self.serialize)(value)
    }
}

impl fmt::Debug for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatDescriptor")
            .field("format", &self.format)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Ordered registry of color formats.
///
/// The table is immutable and built once; use [`ColorCodec::standard`].
#[derive(Debug)]
pub struct ColorCodec {
    formats: Vec<FormatDescriptor>,
}

static STANDARD: LazyLock<ColorCodec> = LazyLock::new(ColorCodec::build);

impl ColorCodec {
    /// The shared codec with every supported format.
    pub fn standard() -> &'static ColorCodec {
        &STANDARD
    }

    fn build() -> Self {
        let formats = vec![
            FormatDescriptor::new(
                ColorFormat::Rgb,
                r"(?i)rgb\(\s*(\d{1,3}%?)\s*,\s*(\d{1,3}%?)\s*,\s*(\d{1,3}%?)\s*\)",
                parse_rgb,
                to_rgb,
            ),
            FormatDescriptor::new(
                ColorFormat::Rgba,
                r"(?i)rgba\(\s*(\d{1,3}%?)\s*,\s*(\d{1,3}%?)\s*,\s*(\d{1,3}%?)\s*,\s*(\d?(?:\.\d+)?)\s*\)",
                parse_rgba,
                to_rgba,
            ),
            FormatDescriptor::new(
                ColorFormat::Hsl,
                r"(?i)hsl\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)",
                parse_hsl,
                to_hsl,
            ),
            FormatDescriptor::new(
                ColorFormat::Hsla,
                r"(?i)hsla\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d?(?:\.\d+)?)\s*\)",
                parse_hsla,
                to_hsla,
            ),
            FormatDescriptor::new(
                ColorFormat::Hex,
                r"(?i)#([a-f0-9]{6}|[a-f0-9]{3})",
                parse_hex,
                to_hex,
            ),
            FormatDescriptor::new(
                ColorFormat::Transparent,
                r"(?i)transparent",
                |_| Some(ColorUpdate::rgba(0, 0, 0, 0.0)),
                |_| "transparent".to_string(),
            ),
            FormatDescriptor::new(ColorFormat::Name, r"(?i)^\s*([a-z]+)\s*$", parse_name, to_name),
        ];

        Self { formats }
    }

    /// The descriptors in matching order.
    pub fn formats(&self) -> &[FormatDescriptor] {
        &self.formats
    }

    /// Find the descriptor for a format.
    pub fn descriptor(&self, format: ColorFormat) -> Option<&FormatDescriptor> {
        self.formats.iter().find(|d| d.format == format)
    }

    /// Parse a color string with the first format that recognizes it.
    pub fn parse(&self, input: &str) -> Option<(ColorFormat, ColorUpdate)> {
        self.formats
            .iter()
            .find_map(|d| d.parse(input).map(|update| (d.format, update)))
    }

    /// Print a color in the given format.
    pub fn serialize(&self, format: ColorFormat, value: &ColorValue) -> String {
        match self.descriptor(format) {
            Some(descriptor) => descriptor.serialize(value),
            None => to_hex(value),
        }
    }
}

/// Parse an RGB channel: an integer, or a percentage scaled by 2.55 and truncated.
fn channel(token: &str) -> u8 {
    let scaled = match token.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().map_or(0.0, |p| (p * 2.55).trunc()),
        None => token.parse::<f64>().unwrap_or(0.0),
    };
    scaled.clamp(0.0, 255.0) as u8
}

/// Parse an alpha token. An empty or malformed token yields NaN.
fn alpha(token: &str) -> f64 {
    token.parse::<f64>().map_or(f64::NAN, |a| a.clamp(0.0, 1.0))
}

fn number(token: &str) -> f64 {
    token.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_rgb(caps: &Captures<'_>) -> Option<ColorUpdate> {
    Some(ColorUpdate::rgba(
        channel(&caps[1]),
        channel(&caps[2]),
        channel(&caps[3]),
        1.0,
    ))
}

fn parse_rgba(caps: &Captures<'_>) -> Option<ColorUpdate> {
    Some(ColorUpdate::rgba(
        channel(&caps[1]),
        channel(&caps[2]),
        channel(&caps[3]),
        alpha(&caps[4]),
    ))
}

fn hsl_update(caps: &Captures<'_>, a: f64) -> ColorUpdate {
    let h = number(&caps[1]);
    let hsl = Hsl {
        h: ((h % 360.0) + 360.0) % 360.0,
        s: number(&caps[2]) / 100.0,
        l: number(&caps[3]) / 100.0,
    };
    let rgb = hsl_to_rgb(hsl);
    let update = ColorUpdate::rgba(rgb.r, rgb.g, rgb.b, a);

    // Black has no hue of its own; carry the parsed one.
    if hsl.l == 0.0 {
        update.with_hue(hsl.h)
    } else {
        update
    }
}

fn parse_hsl(caps: &Captures<'_>) -> Option<ColorUpdate> {
    Some(hsl_update(caps, 1.0))
}

fn parse_hsla(caps: &Captures<'_>) -> Option<ColorUpdate> {
    Some(hsl_update(caps, alpha(&caps[4])))
}

fn parse_hex(caps: &Captures<'_>) -> Option<ColorUpdate> {
    let hex = expand_hex(&caps[1]);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(ColorUpdate::rgba(byte(0)?, byte(2)?, byte(4)?, 1.0))
}

/// Expand a three digit hex string by doubling each digit.
fn expand_hex(hex: &str) -> String {
    if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    }
}

fn parse_name(caps: &Captures<'_>) -> Option<ColorUpdate> {
    let rgb = named::lookup(&caps[1])?;
    Some(ColorUpdate::rgba(rgb.r, rgb.g, rgb.b, 1.0))
}

pub(crate) fn to_rgb(value: &ColorValue) -> String {
    format!("rgb({}, {}, {})", value.r, value.g, value.b)
}

pub(crate) fn to_rgba(value: &ColorValue) -> String {
    format!("rgba({}, {}, {}, {})", value.r, value.g, value.b, value.a)
}

/// HSL components as printed: whole-degree hue and whole percentages.
fn hsl_parts(value: &ColorValue) -> (i64, i64, i64) {
    let hsl = rgb_to_hsl(value.rgb());
    (
        (hsl.h.round() % 360.0) as i64,
        (hsl.s * 100.0).round() as i64,
        (hsl.l * 100.0).round() as i64,
    )
}

pub(crate) fn to_hsl(value: &ColorValue) -> String {
    let (h, s, l) = hsl_parts(value);
    format!("hsl({h}, {s}%, {l}%)")
}

pub(crate) fn to_hsla(value: &ColorValue) -> String {
    let (h, s, l) = hsl_parts(value);
    format!("hsla({h}, {s}%, {l}%, {})", value.a)
}

pub(crate) fn to_hex(value: &ColorValue) -> String {
    format!("#{:02x}{:02x}{:02x}", value.r, value.g, value.b)
}

/// Shorten `#aabbcc` to `#abc` when every channel repeats its digit.
pub(crate) fn shorten_hex(hex: &str) -> String {
    let digits = hex.as_bytes();
    if digits.len() == 7 && digits[1] == digits[2] && digits[3] == digits[4] && digits[5] == digits[6]
    {
        format!(
            "#{}{}{}",
            digits[1] as char, digits[3] as char, digits[5] as char
        )
    } else {
        hex.to_string()
    }
}

fn to_name(value: &ColorValue) -> String {
    match named::name_of(value.rgb()) {
        Some(name) if value.a == 1.0 => name.to_string(),
        _ if value.a < 1.0 => to_rgba(value),
        _ => to_hex(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> &'static ColorCodec {
        ColorCodec::standard()
    }

    #[test]
    fn declared_order() {
        let order: Vec<_> = codec().formats().iter().map(|d| d.format()).collect();
        assert_eq!(
            order,
            vec![
                ColorFormat::Rgb,
                ColorFormat::Rgba,
                ColorFormat::Hsl,
                ColorFormat::Hsla,
                ColorFormat::Hex,
                ColorFormat::Transparent,
                ColorFormat::Name,
            ]
        );
    }

    #[test]
    fn parse_rgb_percentages() {
        let (format, update) = codec().parse("rgb(50%, 20%, 0%)").unwrap();
        assert_eq!(format, ColorFormat::Rgb);
        assert_eq!(update, ColorUpdate::rgba(127, 51, 0, 1.0));
    }

    #[test]
    fn full_percentage_truncates() {
        // 100 * 2.55 is just under 255 in binary floating point.
        let (_, update) = codec().parse("rgb(100%, 0, 0)").unwrap();
        assert_eq!(update.r, Some(254));
    }

    #[test]
    fn parse_rgba_alpha() {
        let (format, update) = codec().parse("RGBA(10, 20, 30, .5)").unwrap();
        assert_eq!(format, ColorFormat::Rgba);
        assert_eq!(update, ColorUpdate::rgba(10, 20, 30, 0.5));
    }

    #[test]
    fn empty_alpha_is_poisoned() {
        let (_, update) = codec().parse("rgba(10, 20, 30, )").unwrap();
        assert!(update.a.unwrap().is_nan());
    }

    #[test]
    fn parse_hsl_wraps_hue() {
        let (format, update) = codec().parse("hsl(480, 100%, 50%)").unwrap();
        assert_eq!(format, ColorFormat::Hsl);
        assert_eq!(update, ColorUpdate::rgba(0, 255, 0, 1.0));
    }

    #[test]
    fn parse_black_hsl_keeps_hue() {
        let (_, update) = codec().parse("hsla(200, 50%, 0%, 0.3)").unwrap();
        assert_eq!(update.h, Some(200.0));
        assert_eq!(update.rgb_count(), 3);
    }

    #[test]
    fn parse_short_hex() {
        let (format, update) = codec().parse("#AbC").unwrap();
        assert_eq!(format, ColorFormat::Hex);
        assert_eq!(update, ColorUpdate::rgba(0xaa, 0xbb, 0xcc, 1.0));
    }

    #[test]
    fn parse_transparent_and_names() {
        let (format, update) = codec().parse("transparent").unwrap();
        assert_eq!(format, ColorFormat::Transparent);
        assert_eq!(update.a, Some(0.0));

        let (format, update) = codec().parse(" Red ").unwrap();
        assert_eq!(format, ColorFormat::Name);
        assert_eq!(update, ColorUpdate::rgba(255, 0, 0, 1.0));
    }

    #[test]
    fn unknown_input_matches_nothing() {
        assert!(codec().parse("notacolor").is_none());
        assert!(codec().parse("rgb(1, 2)").is_none());
        assert!(codec().parse("").is_none());
    }

    #[test]
    fn serializers() {
        let value = ColorValue {
            r: 255,
            g: 0,
            b: 0,
            a: 0.5,
            ..ColorValue::default()
        };
        assert_eq!(to_rgb(&value), "rgb(255, 0, 0)");
        assert_eq!(to_rgba(&value), "rgba(255, 0, 0, 0.5)");
        assert_eq!(to_hsl(&value), "hsl(0, 100%, 50%)");
        assert_eq!(to_hsla(&value), "hsla(0, 100%, 50%, 0.5)");
        assert_eq!(to_hex(&value), "#ff0000");
        assert_eq!(to_name(&value), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn shorten() {
        assert_eq!(shorten_hex("#ff0000"), "#f00");
        assert_eq!(shorten_hex("#ff0001"), "#ff0001");
    }

    #[test]
    fn format_names() {
        assert_eq!("hsla".parse::<ColorFormat>().unwrap(), ColorFormat::Hsla);
        assert_eq!(ColorFormat::Hex.to_string(), "HEX");
        assert!("cmyk".parse::<ColorFormat>().is_err());
    }
}
