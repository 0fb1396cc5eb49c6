//! Tokenizer for CSS gradient functions.
//!
//! The grammar is deliberately loose: it finds a gradient function anywhere
//! in the input, splits off an optional leading angle, and scans the rest
//! for `<color> [<percentage>]` stops. Text between stops that does not look
//! like a stop is skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::GradientType;

static GRADIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(-webkit-|-moz-|-ms-|-o-)?(repeating-linear|linear|radial)-gradient\s*\(\s*(.+)\s*\)")
        .expect("gradient pattern is valid")
});

static PARAMETERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:((?:to\s+)?(?:(?:top|left|right|bottom)\s*){1,2}|[-+]?\d+deg)\s*,)?\s*(.+)",
    )
    .expect("parameters pattern is valid")
});

static STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)((?:rgba|rgb|hsla|hsl)\s*\([\s\d.,%]+\)|#[a-z0-9]{3,6}|[a-z]+)\s*(\d{1,3}%)?",
    )
    .expect("stop pattern is valid")
});

/// A recognized gradient function, borrowed from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGradient<'a> {
    /// Vendor prefix including both dashes, e.g. `-webkit-`.
    pub prefix: Option<&'a str>,
    pub gradient_type: GradientType,
    /// The raw angle token, when one leads the parameters.
    pub angle: Option<&'a str>,
    pub stops: Vec<StopToken<'a>>,
}

/// One `<color> [<percentage>]` stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopToken<'a> {
    pub color: &'a str,
    pub position: Option<&'a str>,
}

/// Tokenize a gradient function.
///
/// Returns `None` when the input contains no gradient function.
pub fn parse_gradient(input: &str) -> Option<ParsedGradient<'_>> {
    let caps = GRADIENT.captures(input)?;
    let gradient_type = caps.get(2)?.as_str().parse::<GradientType>().ok()?;
    let body = caps.get(3)?.as_str().trim_end();

    let (angle, stops) = match PARAMETERS.captures(body) {
        Some(params) => (
            params.get(1).map(|m| m.as_str().trim()),
            params.get(2).map_or("", |m| m.as_str()),
        ),
        None => (None, body),
    };

    Some(ParsedGradient {
        prefix: caps.get(1).map(|m| m.as_str()),
        gradient_type,
        angle,
        stops: parse_stops(stops),
    })
}

/// Scan a stop list.
pub fn parse_stops(input: &str) -> Vec<StopToken<'_>> {
    let mut stops = Vec::new();
    let mut last_end = 0;

    for caps in STOP.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        let skipped = &input[last_end..whole.start()];
        if skipped.contains(|c: char| !c.is_whitespace() && c != ',') {
            tracing::trace!("Skipping unrecognized stop text {:?}", skipped);
        }
        last_end = whole.end();

        if let Some(color) = caps.get(1) {
            stops.push(StopToken {
                color: color.as_str(),
                position: caps.get(2).map(|m| m.as_str()),
            });
        }
    }

    stops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_linear() {
        let parsed = parse_gradient("linear-gradient(to right, red, blue)").unwrap();
        assert_eq!(parsed.prefix, None);
        assert_eq!(parsed.gradient_type, GradientType::Linear);
        assert_eq!(parsed.angle, Some("to right"));
        assert_eq!(
            parsed.stops,
            vec![
                StopToken { color: "red", position: None },
                StopToken { color: "blue", position: None },
            ]
        );
    }

    #[test]
    fn prefixed_with_positions() {
        let parsed =
            parse_gradient("-webkit-linear-gradient(45deg, #fff 10%, rgba(0, 0, 0, 0.5) 90%)")
                .unwrap();
        assert_eq!(parsed.prefix, Some("-webkit-"));
        assert_eq!(parsed.angle, Some("45deg"));
        assert_eq!(
            parsed.stops,
            vec![
                StopToken { color: "#fff", position: Some("10%") },
                StopToken { color: "rgba(0, 0, 0, 0.5)", position: Some("90%") },
            ]
        );
    }

    #[test]
    fn no_angle() {
        let parsed = parse_gradient("linear-gradient(red 0%, hsl(120, 50%, 50%) 100%)").unwrap();
        assert_eq!(parsed.angle, None);
        assert_eq!(parsed.stops.len(), 2);
        assert_eq!(parsed.stops[1].color, "hsl(120, 50%, 50%)");
    }

    #[test]
    fn negative_and_keyword_angles() {
        let parsed = parse_gradient("linear-gradient(-45deg, red, blue)").unwrap();
        assert_eq!(parsed.angle, Some("-45deg"));

        let parsed = parse_gradient("linear-gradient(left top , red, blue)").unwrap();
        assert_eq!(parsed.angle, Some("left top"));
        assert_eq!(parsed.stops.len(), 2);
    }

    #[test]
    fn other_types() {
        let parsed = parse_gradient("radial-gradient(red, blue)").unwrap();
        assert_eq!(parsed.gradient_type, GradientType::Radial);

        let parsed = parse_gradient("-moz-repeating-linear-gradient(red, blue 20%)").unwrap();
        assert_eq!(parsed.gradient_type, GradientType::RepeatingLinear);
        assert_eq!(parsed.prefix, Some("-moz-"));
    }

    #[test]
    fn found_inside_declaration() {
        let parsed = parse_gradient("background: LINEAR-GRADIENT(top, red, blue);").unwrap();
        assert_eq!(parsed.angle, Some("top"));
        assert_eq!(parsed.stops.len(), 2);
    }

    #[test]
    fn not_a_gradient() {
        assert!(parse_gradient("red").is_none());
        assert!(parse_gradient("conic-gradient(red, blue)").is_none());
        assert!(parse_gradient("linear-gradient()").is_none());
    }
}
