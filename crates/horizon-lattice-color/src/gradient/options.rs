//! Gradient configuration.

use serde::Deserialize;

use crate::Result;
use crate::color::{ColorFormat, ColorOptions};

/// Vendor prefixes recognized for prefixed output.
pub const DEFAULT_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

/// Options controlling gradient serialization and stop color construction.
///
/// Options can be built in code or deserialized from camelCase JSON. Missing
/// fields take their default values.
///
/// # Example
///
/// ```
/// use horizon_lattice_color::prelude::*;
///
/// let options = GradientOptions::from_json(r#"{"angleUseKeyword": false}"#).unwrap();
/// assert!(!options.angle_use_keyword);
/// assert!(options.force_standard);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientOptions {
    /// Prefixes accepted by [`Gradient::to_css`](super::Gradient::to_css).
    pub prefixes: Vec<String>,
    /// Serialize in standard form even when the gradient was parsed with a
    /// vendor prefix.
    pub force_standard: bool,
    /// Print keyword angles as direction keywords instead of degrees.
    pub angle_use_keyword: bool,
    /// Output for a gradient without stops.
    pub empty_string: String,
    /// Format used to print a gradient with a single stop.
    pub degradation_format: Option<ColorFormat>,
    /// Omit a first stop position of 0% and a last stop position of 100%.
    pub clean_position: bool,
    /// Output format forced onto every stop color.
    pub force_color_format: Option<ColorFormat>,
    /// Options handed to every stop color.
    pub color: ColorOptions,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            force_standard: true,
            angle_use_keyword: true,
            empty_string: String::new(),
            degradation_format: None,
            clean_position: true,
            force_color_format: None,
            color: ColorOptions::for_gradient(),
        }
    }
}

impl GradientOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the recognized vendor prefixes.
    pub fn prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether standard output is forced.
    pub fn force_standard(mut self, enabled: bool) -> Self {
        self.force_standard = enabled;
        self
    }

    /// Set whether keyword angles print as keywords.
    pub fn angle_use_keyword(mut self, enabled: bool) -> Self {
        self.angle_use_keyword = enabled;
        self
    }

    /// Set the output for an empty gradient.
    pub fn empty_string(mut self, value: impl Into<String>) -> Self {
        self.empty_string = value.into();
        self
    }

    /// Set the format used for a single stop gradient.
    pub fn degradation_format(mut self, format: Option<ColorFormat>) -> Self {
        self.degradation_format = format;
        self
    }

    /// Set whether boundary positions are omitted.
    pub fn clean_position(mut self, enabled: bool) -> Self {
        self.clean_position = enabled;
        self
    }

    /// Force an output format onto every stop color.
    pub fn force_color_format(mut self, format: Option<ColorFormat>) -> Self {
        self.force_color_format = format;
        self
    }

    /// Set the options handed to stop colors.
    pub fn color(mut self, options: ColorOptions) -> Self {
        self.color = options;
        self
    }

    /// Check whether a prefix is one of the recognized prefixes.
    pub fn is_known_prefix(&self, prefix: &str) -> bool {
        self.prefixes.iter().any(|p| p == prefix)
    }
}
