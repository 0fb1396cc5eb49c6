//! Color model, colorspace conversion, and textual formats.
//!
//! A [`Color`] keeps its RGB and HSV attributes side by side together with
//! alpha and a remembered output [`ColorFormat`]. Colors are parsed from any
//! format the [`ColorCodec`] recognizes and printed back in their own format,
//! or explicitly in any other.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_color::prelude::*;
//!
//! let mut color = Color::new("rgb(255, 0, 0)");
//! assert_eq!(color.format(), ColorFormat::Rgb);
//! assert_eq!(color.to_hsl(), "hsl(0, 100%, 50%)");
//!
//! color.set(ColorUpdate::hsv(120.0, 1.0, 1.0));
//! assert_eq!(color.to_hex(), "#00ff00");
//!
//! color.set_alpha(0.0);
//! assert_eq!(color.to_string(), "transparent");
//! ```

pub mod codec;
pub mod convert;
pub mod named;
mod options;
mod value;

use std::fmt;
use std::str::FromStr;

pub use codec::{ColorCodec, ColorFormat, FormatDescriptor};
pub use convert::{Hsl, Hsv, Rgb};
pub use options::ColorOptions;
pub use value::{ColorUpdate, ColorValue, UpdateSource};

use crate::{Error, Result};

/// A color value with a remembered output format.
///
/// Each color owns its attributes and options; nothing is shared between
/// instances.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Color {
    value: ColorValue,
    format: ColorFormat,
    options: ColorOptions,
}

impl Color {
    /// Parse a color string with default options.
    ///
    /// Unrecognized input yields the configured invalid value (opaque black).
    pub fn new(input: &str) -> Self {
        Self::with_options(input, None, ColorOptions::default())
    }

    /// Parse a color string and force its output format.
    pub fn with_format(input: &str, format: ColorFormat) -> Self {
        Self::with_options(input, Some(format), ColorOptions::default())
    }

    /// Parse a color string with explicit options.
    ///
    /// When `format` is `None` the output format is the one the input was
    /// written in.
    pub fn with_options(input: &str, format: Option<ColorFormat>, options: ColorOptions) -> Self {
        let mut color = Self {
            options,
            ..Self::default()
        };

        match ColorCodec::standard().parse(input) {
            Some((detected, update)) => {
                color.set_format(format.unwrap_or(detected));
                color.set(update);
            }
            None => {
                tracing::debug!("No color format matched {:?}, using invalid value", input);
                if let Some(format) = format {
                    color.set_format(format);
                }
                let fallback = color.options.invalid_value;
                color.set(fallback);
            }
        }

        color
    }

    /// Build a color directly from attributes, printed as HEX.
    pub fn from_update(update: ColorUpdate) -> Self {
        let mut color = Self::default();
        color.set(update);
        color
    }

    /// The color printed in its current format.
    pub fn val(&self) -> String {
        self.to_string()
    }

    /// Re-parse the color from a string. See [`from_css`](Self::from_css).
    pub fn set_val(&mut self, input: &str) -> bool {
        self.from_css(input)
    }

    /// Get alpha.
    pub fn alpha(&self) -> f64 {
        self.value.a
    }

    /// Set alpha, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_alpha(&mut self, alpha: f64) {
        if alpha.is_nan() {
            return;
        }
        self.value.a = alpha.clamp(0.0, 1.0);
    }

    /// Re-parse the color from a string, keeping the current output format.
    ///
    /// Returns `false` and leaves the color unchanged if no format matches.
    pub fn from_css(&mut self, input: &str) -> bool {
        match ColorCodec::standard().parse(input) {
            Some((_, update)) => {
                self.set(update);
                true
            }
            None => {
                tracing::debug!("No color format matched {:?}", input);
                false
            }
        }
    }

    /// The output format.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Set the output format. `Transparent` is not an output format and is ignored.
    pub fn set_format(&mut self, format: ColorFormat) {
        if format != ColorFormat::Transparent {
            self.format = format;
        }
    }

    /// Set the output format by name (`"rgba"`, `"HEX"`, ...).
    pub fn set_format_name(&mut self, name: &str) -> Result<()> {
        self.set_format(name.parse()?);
        Ok(())
    }

    /// The options this color was built with.
    pub fn options(&self) -> &ColorOptions {
        &self.options
    }

    /// Print as `rgb(r, g, b)`.
    pub fn to_rgb(&self) -> String {
        self.to_format(ColorFormat::Rgb)
    }

    /// Print as `rgba(r, g, b, a)`.
    pub fn to_rgba(&self) -> String {
        self.to_format(ColorFormat::Rgba)
    }

    /// Print as `hsl(h, s%, l%)`.
    pub fn to_hsl(&self) -> String {
        self.to_format(ColorFormat::Hsl)
    }

    /// Print as `hsla(h, s%, l%, a)`.
    pub fn to_hsla(&self) -> String {
        self.to_format(ColorFormat::Hsla)
    }

    /// Print as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        self.to_format(ColorFormat::Hex)
    }

    /// Print in an explicit format, ignoring the remembered one.
    pub fn to_format(&self, format: ColorFormat) -> String {
        if self.options.zero_alpha_as_transparent && self.value.a == 0.0 {
            return ColorCodec::standard().serialize(ColorFormat::Transparent, &self.value);
        }
        ColorCodec::standard().serialize(format, &self.value)
    }

    /// Raw attribute access.
    pub fn get(&self) -> ColorValue {
        self.value
    }

    /// Merge a partial update into the color.
    ///
    /// Every supplied attribute is stored. If the update supplies more RGB
    /// channels than HSV components, HSV is recomputed from RGB; if it supplies
    /// more HSV components, RGB is recomputed from HSV. With equal counts
    /// nothing is recomputed and the unsupplied group keeps its old values.
    ///
    /// Black has no hue, so recomputing HSV from black RGB keeps the stored hue.
    pub fn set(&mut self, update: ColorUpdate) {
        let value = &mut self.value;

        if let Some(r) = update.r {
            value.r = r;
        }
        if let Some(g) = update.g {
            value.g = g;
        }
        if let Some(b) = update.b {
            value.b = b;
        }
        if let Some(h) = update.h {
            value.h = h;
        }
        if let Some(s) = update.s {
            value.s = s;
        }
        if let Some(v) = update.v {
            value.v = v;
        }
        if let Some(a) = update.a {
            value.a = a;
        }

        match update.source() {
            UpdateSource::Rgb => {
                let hsv = convert::rgb_to_hsv(value.rgb());
                if !value.rgb().is_black() {
                    value.h = hsv.h;
                }
                value.s = hsv.s;
                value.v = hsv.v;
            }
            UpdateSource::Hsv => {
                let rgb = convert::hsv_to_rgb(value.hsv());
                value.r = rgb.r;
                value.g = rgb.g;
                value.b = rgb.b;
            }
            UpdateSource::Balanced => {}
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codec = ColorCodec::standard();
        let value = &self.value;

        if value.a == 0.0 {
            return f.write_str(&codec.serialize(ColorFormat::Transparent, value));
        }

        let opaque = value.a == 1.0;
        let format = match self.format {
            ColorFormat::Rgba if self.options.reduce_alpha && opaque => ColorFormat::Rgb,
            ColorFormat::Hsla if self.options.reduce_alpha && opaque => ColorFormat::Hsl,
            format => format,
        };

        if format != ColorFormat::Hex {
            return f.write_str(&codec.serialize(format, value));
        }

        if self.options.hex_use_name
            && opaque
            && let Some(name) = named::name_of(value.rgb())
        {
            return f.write_str(name);
        }

        let hex = codec::to_hex(value);
        if self.options.shorten_hex {
            f.write_str(&codec::shorten_hex(&hex))
        } else {
            f.write_str(&hex)
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (format, update) = ColorCodec::standard()
            .parse(s)
            .ok_or_else(|| Error::unrecognized_color(s))?;

        let mut color = Self::default();
        color.set_format(format);
        color.set(update);
        Ok(color)
    }
}

impl From<ColorUpdate> for Color {
    fn from(update: ColorUpdate) -> Self {
        Self::from_update(update)
    }
}
