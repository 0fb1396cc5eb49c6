//! CSS gradient model.
//!
//! A [`Gradient`] holds an angle, an ordered list of color stops, a gradient
//! type and the vendor prefix it was parsed with. Stops are edited through a
//! cursor: `insert`, `get_at` and `remove_at` move it, and `insert`, `get`
//! and `remove` act on it.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_color::prelude::*;
//!
//! let mut gradient = Gradient::default();
//! gradient.append("#fff", Position::Unresolved);
//! gradient.append("rgba(0, 0, 0, 0.5)", 0.8);
//! gradient.set_angle("30deg");
//!
//! assert_eq!(
//!     gradient.val().unwrap(),
//!     "linear-gradient(30deg, #fff, rgba(0, 0, 0, 0.5) 80%)"
//! );
//! ```

pub mod angle;
pub mod grammar;
mod options;
pub mod position;
mod serialize;

use std::fmt;
use std::str::FromStr;

pub use options::{DEFAULT_PREFIXES, GradientOptions};
pub use position::Position;

use crate::color::Color;
use crate::{Error, Result};

/// Gradient function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    RepeatingLinear,
}

impl GradientType {
    /// The CSS function name without `-gradient`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::RepeatingLinear => "repeating-linear",
        }
    }
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "linear" => Ok(Self::Linear),
            "radial" => Ok(Self::Radial),
            "repeating-linear" => Ok(Self::RepeatingLinear),
            _ => Err(Error::unknown_type(s)),
        }
    }
}

/// A color at a position along the gradient line.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub position: Position,
}

/// A CSS gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    angle: f64,
    stops: Vec<GradientStop>,
    gradient_type: GradientType,
    prefix: Option<String>,
    cursor: isize,
    options: GradientOptions,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(GradientOptions::default())
    }
}

impl Gradient {
    /// Create an empty linear gradient.
    pub fn new(options: GradientOptions) -> Self {
        Self {
            angle: 0.0,
            stops: Vec::new(),
            gradient_type: GradientType::Linear,
            prefix: None,
            cursor: 0,
            options,
        }
    }

    /// Create a gradient from a CSS string.
    ///
    /// Unrecognized input yields an empty gradient.
    pub fn parse(input: &str, options: GradientOptions) -> Self {
        let mut gradient = Self::new(options);
        gradient.from_string(input);
        gradient
    }

    /// Replace the gradient with the one described by `input`.
    ///
    /// The gradient is reset first. Returns `false` when the input holds no
    /// gradient function, leaving the gradient empty.
    pub fn from_string(&mut self, input: &str) -> bool {
        self.reset();

        let Some(parsed) = grammar::parse_gradient(input) else {
            tracing::debug!("No gradient function in {:?}", input);
            return false;
        };

        self.prefix = parsed.prefix.map(str::to_string);
        self.gradient_type = parsed.gradient_type;
        if let Some(token) = parsed.angle {
            self.set_angle(token);
        }
        for stop in parsed.stops {
            let position = stop
                .position
                .map_or(Position::Unresolved, position::parse_position);
            self.append(stop.color, position);
        }

        tracing::trace!(
            "Parsed {} gradient with {} stops",
            self.gradient_type,
            self.stops.len()
        );
        true
    }

    /// The gradient printed with its own prefix settings.
    pub fn val(&self) -> Result<String> {
        self.to_css(None)
    }

    /// Alias of [`from_string`](Self::from_string).
    pub fn set_val(&mut self, input: &str) -> bool {
        self.from_string(input)
    }

    /// The angle in degrees, `[0, 360)` or NaN for an unparseable token.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Set the angle from a CSS token such as `45deg` or `to right`.
    pub fn set_angle(&mut self, token: &str) {
        self.angle = angle::parse_angle(token);
    }

    /// Set the angle in degrees.
    pub fn set_angle_degrees(&mut self, degrees: f64) {
        self.angle = angle::normalize_angle(degrees);
    }

    /// Append a stop at the end.
    pub fn append(&mut self, color: &str, position: impl Into<Position>) {
        let index = self.stops.len() as isize;
        self.insert_at(color, position, index);
    }

    /// Insert a stop at the cursor.
    pub fn insert(&mut self, color: &str, position: impl Into<Position>) {
        self.insert_at(color, position, self.cursor);
    }

    /// Insert a stop at `index` and move the cursor there.
    ///
    /// A negative index counts from the end; an index past the end appends.
    pub fn insert_at(&mut self, color: &str, position: impl Into<Position>, index: isize) {
        let stop = GradientStop {
            color: Color::with_options(
                color,
                self.options.force_color_format,
                self.options.color.clone(),
            ),
            position: position.into(),
        };

        let len = self.stops.len() as isize;
        let at = if index < 0 { (len + index).max(0) } else { index.min(len) };
        self.stops.insert(at as usize, stop);
        self.cursor = index;
    }

    /// The stop at the cursor.
    pub fn get(&self) -> Option<&GradientStop> {
        self.stop(self.cursor)
    }

    /// The stop at `index`. The cursor moves there when the stop exists.
    pub fn get_at(&mut self, index: isize) -> Option<&GradientStop> {
        if self.stop(index).is_none() {
            return None;
        }
        self.cursor = index;
        self.stop(index)
    }

    /// Remove the stop at the cursor.
    pub fn remove(&mut self) -> Option<GradientStop> {
        self.remove_at(self.cursor)
    }

    /// Remove the stop at `index` and move the cursor to the previous index.
    pub fn remove_at(&mut self, index: isize) -> Option<GradientStop> {
        let at = usize::try_from(index).ok().filter(|&at| at < self.stops.len())?;
        self.cursor = index - 1;
        Some(self.stops.remove(at))
    }

    /// Remove all stops and move the cursor back to 0.
    pub fn empty(&mut self) {
        self.stops.clear();
        self.cursor = 0;
    }

    /// Restore the initial state: no stops, angle 0, linear, no prefix.
    pub fn reset(&mut self) {
        self.empty();
        self.angle = 0.0;
        self.gradient_type = GradientType::Linear;
        self.prefix = None;
    }

    /// The gradient type.
    pub fn gradient_type(&self) -> GradientType {
        self.gradient_type
    }

    /// Set the gradient type.
    pub fn set_type(&mut self, gradient_type: GradientType) {
        self.gradient_type = gradient_type;
    }

    /// Set the gradient type by name, e.g. `"radial"`.
    pub fn set_type_name(&mut self, name: &str) -> Result<()> {
        self.gradient_type = name.parse()?;
        Ok(())
    }

    /// Serialize the gradient.
    ///
    /// With a recognized `prefix` the output is prefixed with it. Otherwise
    /// the output is standard unless the gradient carries its own prefix and
    /// `force_standard` is off. Non-linear gradients cannot be serialized.
    pub fn to_css(&self, prefix: Option<&str>) -> Result<String> {
        serialize::to_css(self, prefix)
    }

    /// The gradient once per recognized prefix.
    pub fn prefixed_strings(&self) -> Result<Vec<String>> {
        self.options
            .prefixes
            .iter()
            .map(|prefix| self.to_css(Some(prefix)))
            .collect()
    }

    /// Every prefixed form followed by the standard form, for emitting
    /// fallback declarations.
    pub fn css_variants(&self) -> Result<Vec<String>> {
        let mut variants = self.prefixed_strings()?;
        variants.push(serialize::to_standard(self)?);
        Ok(variants)
    }

    /// The resolved position of every stop.
    pub fn positions(&self) -> Vec<f64> {
        let positions: Vec<Position> = self.stops.iter().map(|stop| stop.position).collect();
        position::resolve_positions(&positions)
    }

    /// The stops in order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Check whether the gradient has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The cursor. It is not clamped and may point outside the stop list.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// The vendor prefix the gradient was parsed with.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The gradient options.
    pub fn options(&self) -> &GradientOptions {
        &self.options
    }

    fn stop(&self, index: isize) -> Option<&GradientStop> {
        usize::try_from(index).ok().and_then(|at| self.stops.get(at))
    }
}

impl FromStr for Gradient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut gradient = Self::default();
        if gradient.from_string(s) {
            Ok(gradient)
        } else {
            Err(Error::unrecognized_gradient(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorFormat;

    fn gradient(input: &str) -> Gradient {
        input.parse().unwrap()
    }

    #[test]
    fn parse_and_serialize() {
        let g = gradient("linear-gradient(to right, red, blue)");
        assert_eq!(g.angle(), 270.0);
        assert_eq!(g.len(), 2);
        assert_eq!(g.val().unwrap(), "linear-gradient(to right, red, blue)");
    }

    #[test]
    fn positions_are_kept() {
        let g = gradient("linear-gradient(30deg, #ff0000 10%, #0000ff 75%)");
        assert_eq!(g.positions(), vec![0.1, 0.75]);
        assert_eq!(g.val().unwrap(), "linear-gradient(30deg, #f00 10%, #00f 75%)");
    }

    #[test]
    fn boundary_positions_are_cleaned() {
        let g = gradient("linear-gradient(90deg, red 0%, blue 100%)");
        assert_eq!(g.val().unwrap(), "linear-gradient(to left, red, blue)");

        let options = GradientOptions::default().clean_position(false);
        let g = Gradient::parse("linear-gradient(90deg, red 0%, blue 100%)", options);
        assert_eq!(g.val().unwrap(), "linear-gradient(to left, red 0%, blue 100%)");
    }

    #[test]
    fn prefix_handling() {
        let g = gradient("-webkit-linear-gradient(left, red, blue)");
        assert_eq!(g.prefix(), Some("-webkit-"));
        assert_eq!(g.val().unwrap(), "linear-gradient(to right, red, blue)");
        assert_eq!(
            g.to_css(Some("-moz-")).unwrap(),
            "-moz-linear-gradient(left, red, blue)"
        );
        assert_eq!(
            g.to_css(Some("-unknown-")).unwrap(),
            "linear-gradient(to right, red, blue)"
        );

        let options = GradientOptions::default().force_standard(false);
        let g = Gradient::parse("-webkit-linear-gradient(left, red, blue)", options);
        assert_eq!(g.val().unwrap(), "-webkit-linear-gradient(left, red, blue)");
    }

    #[test]
    fn empty_and_single_stop() {
        let mut g = Gradient::default();
        assert_eq!(g.val().unwrap(), "");

        g.append("rgba(255, 0, 0, 1)", Position::Unresolved);
        assert_eq!(g.val().unwrap(), "rgb(255, 0, 0)");

        let options = GradientOptions::default()
            .empty_string("none")
            .degradation_format(Some(ColorFormat::Hex));
        let mut g = Gradient::new(options);
        assert_eq!(g.val().unwrap(), "none");
        g.append("rgb(255, 0, 0)", 0.5);
        assert_eq!(g.val().unwrap(), "#ff0000");
    }

    #[test]
    fn cursor_moves() {
        let mut g = Gradient::default();
        g.append("red", Position::Unresolved);
        g.append("lime", Position::Unresolved);
        g.append("blue", Position::Unresolved);
        assert_eq!(g.cursor(), 2);

        assert!(g.get_at(0).is_some());
        assert_eq!(g.cursor(), 0);
        assert!(g.get_at(7).is_none());
        assert_eq!(g.cursor(), 0);

        g.insert("white", 0.1);
        assert_eq!(g.stops()[0].color.to_string(), "white");

        let removed = g.remove_at(3).unwrap();
        assert_eq!(removed.color.to_string(), "blue");
        assert_eq!(g.cursor(), 2);
        assert_eq!(g.get().unwrap().color.to_string(), "lime");
    }

    #[test]
    fn negative_insert_index() {
        let mut g = Gradient::default();
        g.append("red", Position::Unresolved);
        g.append("blue", Position::Unresolved);
        g.insert_at("white", Position::Unresolved, -1);
        let colors: Vec<String> = g.stops().iter().map(|s| s.color.to_string()).collect();
        assert_eq!(colors, ["red", "white", "blue"]);

        g.insert_at("black", Position::Unresolved, -10);
        assert_eq!(g.stops()[0].color.to_string(), "black");
        assert!(g.get().is_none());
    }

    #[test]
    fn remove_out_of_range() {
        let mut g = Gradient::default();
        g.append("red", Position::Unresolved);
        assert!(g.remove_at(1).is_none());
        assert!(g.remove_at(-1).is_none());
        assert_eq!(g.len(), 1);
        assert!(g.remove().is_some());
        assert!(g.is_empty());
        assert_eq!(g.cursor(), -1);
    }

    #[test]
    fn empty_resets_cursor() {
        let mut g = Gradient::default();
        g.append("red", Position::Unresolved);
        g.append("blue", Position::Unresolved);
        assert!(g.remove_at(0).is_some());
        assert_eq!(g.cursor(), -1);

        g.empty();
        assert_eq!(g.len(), 0);
        assert_eq!(g.cursor(), 0);

        g.insert("lime", "50%");
        assert_eq!(g.cursor(), 0);
        let stop = g.get().unwrap();
        assert_eq!(stop.color.to_string(), "lime");
        assert_eq!(stop.position, Position::At(0.5));

        g.append("navy", Position::Unresolved);
        assert_eq!(g.cursor(), 1);
        g.empty();
        assert!(g.is_empty());
        assert_eq!(g.cursor(), 0);
    }

    #[test]
    fn reset_and_reparse() {
        let mut g = gradient("-o-linear-gradient(30deg, red, blue)");
        assert!(!g.from_string("not a gradient"));
        assert!(g.is_empty());
        assert_eq!(g.angle(), 0.0);
        assert_eq!(g.prefix(), None);
        assert!(g.set_val("linear-gradient(red, blue)"));
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn non_linear_types() {
        let mut g = gradient("radial-gradient(red, blue)");
        assert_eq!(g.gradient_type(), GradientType::Radial);
        assert!(matches!(
            g.val(),
            Err(Error::UnsupportedType(GradientType::Radial))
        ));

        g.set_type_name("LINEAR").unwrap();
        assert_eq!(g.val().unwrap(), "linear-gradient(to bottom, red, blue)");
        assert!(g.set_type_name("conic").is_err());
    }

    #[test]
    fn type_names() {
        assert_eq!("repeating-linear".parse::<GradientType>().unwrap(), GradientType::RepeatingLinear);
        assert_eq!("REPEATING_LINEAR".parse::<GradientType>().unwrap(), GradientType::RepeatingLinear);
        assert_eq!(GradientType::RepeatingLinear.to_string(), "repeating-linear");
    }

    #[test]
    fn forced_color_format() {
        let options = GradientOptions::default().force_color_format(Some(ColorFormat::Rgb));
        let g = Gradient::parse("linear-gradient(#f00, #00f)", options);
        assert_eq!(
            g.val().unwrap(),
            "linear-gradient(to bottom, rgb(255, 0, 0), rgb(0, 0, 255))"
        );
    }

    #[test]
    fn variants() {
        let options = GradientOptions::default().prefixes(["-webkit-", "-moz-"]);
        let g = Gradient::parse("linear-gradient(to right, red, blue)", options);
        assert_eq!(
            g.css_variants().unwrap(),
            vec![
                "-webkit-linear-gradient(left, red, blue)".to_string(),
                "-moz-linear-gradient(left, red, blue)".to_string(),
                "linear-gradient(to right, red, blue)".to_string(),
            ]
        );
    }

    #[test]
    fn angle_setters() {
        let mut g = Gradient::default();
        g.set_angle_degrees(-90.0);
        assert_eq!(g.angle(), 270.0);
        g.set_angle("to top");
        assert_eq!(g.angle(), 180.0);
        g.set_angle("nowhere");
        assert!(g.angle().is_nan());
    }
}
