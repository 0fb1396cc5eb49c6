//! Color stop positions.

/// The position of a color stop along the gradient line.
///
/// Positions are fractions of the gradient length, so `0.5` is the middle.
/// A stop without an explicit position is resolved when the gradient is
/// serialized, see [`resolve_positions`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// No explicit position.
    #[default]
    Unresolved,
    /// An explicit fraction.
    At(f64),
}

impl Position {
    /// The explicit fraction, if any.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Unresolved => None,
            Self::At(value) => Some(*value),
        }
    }

    /// Check whether the position was given explicitly.
    #[inline]
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::At(_))
    }
}

impl From<f64> for Position {
    fn from(value: f64) -> Self {
        Self::At(value)
    }
}

impl From<Option<f64>> for Position {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unresolved, Self::At)
    }
}

impl From<&str> for Position {
    fn from(token: &str) -> Self {
        parse_position(token)
    }
}

/// Parse a position token.
///
/// `50%` becomes `0.5`, a bare number is taken as a fraction, and an empty
/// token is unresolved. A token that is not a number becomes NaN.
pub fn parse_position(token: &str) -> Position {
    let token = token.trim();
    if token.is_empty() {
        return Position::Unresolved;
    }

    let value = match token.strip_suffix('%') {
        Some(percent) => percent
            .trim()
            .parse::<f64>()
            .map_or(f64::NAN, |value| value / 100.0),
        None => token.parse::<f64>().unwrap_or(f64::NAN),
    };

    Position::At(value)
}

/// Format a fraction as a whole percentage, truncating towards zero.
pub fn format_position(value: f64) -> String {
    let percent = (value * 100.0).trunc();
    if percent == 0.0 {
        return "0%".to_string();
    }
    format!("{percent}%")
}

/// Resolve every stop position.
///
/// An unresolved first stop sits at 0 and an unresolved last stop at 1.
/// Each run of unresolved stops between two known positions is spread evenly
/// between them. Explicit positions are never reordered or clamped.
pub fn resolve_positions(positions: &[Position]) -> Vec<f64> {
    let mut resolved: Vec<Option<f64>> = positions.iter().map(Position::value).collect();

    let Some(last) = resolved.len().checked_sub(1) else {
        return Vec::new();
    };
    if resolved[0].is_none() {
        resolved[0] = Some(0.0);
    }
    if resolved[last].is_none() {
        resolved[last] = Some(1.0);
    }

    let mut anchor = 0;
    for index in 1..resolved.len() {
        let Some(end) = resolved[index] else {
            continue;
        };

        let gap = index - anchor;
        if gap > 1 {
            let start = resolved[anchor].unwrap_or_default();
            let step = (end - start) / gap as f64;
            for (offset, slot) in resolved[anchor + 1..index].iter_mut().enumerate() {
                *slot = Some(start + (offset + 1) as f64 * step);
            }
        }
        anchor = index;
    }

    resolved.into_iter().map(Option::unwrap_or_default).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(positions: &[Option<f64>]) -> Vec<f64> {
        let positions: Vec<Position> = positions.iter().copied().map(Position::from).collect();
        resolve_positions(&positions)
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(parse_position("50%"), Position::At(0.5));
        assert_eq!(parse_position(" 100% "), Position::At(1.0));
        assert_eq!(parse_position("0.25"), Position::At(0.25));
        assert_eq!(parse_position(""), Position::Unresolved);
        assert!(parse_position("abc%").value().is_some_and(f64::is_nan));
    }

    #[test]
    fn format_truncates() {
        assert_eq!(format_position(0.5), "50%");
        assert_eq!(format_position(0.333), "33%");
        assert_eq!(format_position(0.999), "99%");
        assert_eq!(format_position(1.0), "100%");
        assert_eq!(format_position(-0.001), "0%");
        assert_eq!(format_position(f64::NAN), "NaN%");
    }

    #[test]
    fn ends_default_to_bounds() {
        assert_eq!(resolve(&[None, None]), vec![0.0, 1.0]);
        assert_eq!(resolve(&[None]), vec![0.0]);
        assert_eq!(resolve(&[]), Vec::<f64>::new());
    }

    #[test]
    fn interior_runs_are_spread() {
        assert_eq!(resolve(&[None, None, None]), vec![0.0, 0.5, 1.0]);
        assert_eq!(resolve(&[Some(0.2), None, None, Some(0.8)]), {
            let step = (0.8 - 0.2) / 3.0;
            vec![0.2, 0.2 + step, 0.2 + 2.0 * step, 0.8]
        });
        assert_eq!(resolve(&[None, Some(0.4), None]), vec![0.0, 0.4, 1.0]);
    }

    #[test]
    fn explicit_positions_are_kept() {
        assert_eq!(resolve(&[Some(0.75), None, Some(0.25)]), vec![0.75, 0.5, 0.25]);
        assert_eq!(resolve(&[Some(1.5), Some(-0.5)]), vec![1.5, -0.5]);
    }
}
