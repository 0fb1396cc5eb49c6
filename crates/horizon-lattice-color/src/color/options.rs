//! Color serialization options.

use serde::Deserialize;

use super::value::ColorUpdate;

/// Options controlling how a [`Color`](super::Color) is printed and what it
/// falls back to on unrecognized input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorOptions {
    /// Print HEX colors as a CSS keyword when one exists.
    pub hex_use_name: bool,
    /// Print RGBA/HSLA colors with alpha 1 in their RGB/HSL form.
    pub reduce_alpha: bool,
    /// Print HEX colors in three digit form when possible.
    pub shorten_hex: bool,
    /// Make the explicit `to_*` serializers print `transparent` for alpha 0.
    pub zero_alpha_as_transparent: bool,
    /// Attributes applied when a color is constructed from unrecognized input.
    pub invalid_value: ColorUpdate,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            hex_use_name: false,
            reduce_alpha: false,
            shorten_hex: false,
            zero_alpha_as_transparent: false,
            invalid_value: ColorUpdate::rgba(0, 0, 0, 1.0),
        }
    }
}

impl ColorOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The defaults used for gradient stop colors.
    pub fn for_gradient() -> Self {
        Self {
            reduce_alpha: true,
            shorten_hex: true,
            ..Self::default()
        }
    }

    /// Print HEX colors as keywords when possible.
    pub fn hex_use_name(mut self, enabled: bool) -> Self {
        self.hex_use_name = enabled;
        self
    }

    /// Drop an alpha of 1 from RGBA/HSLA output.
    pub fn reduce_alpha(mut self, enabled: bool) -> Self {
        self.reduce_alpha = enabled;
        self
    }

    /// Shorten HEX output when possible.
    pub fn shorten_hex(mut self, enabled: bool) -> Self {
        self.shorten_hex = enabled;
        self
    }

    /// Print `transparent` from the explicit serializers for alpha 0.
    pub fn zero_alpha_as_transparent(mut self, enabled: bool) -> Self {
        self.zero_alpha_as_transparent = enabled;
        self
    }

    /// Set the fallback attributes for unrecognized input.
    pub fn invalid_value(mut self, value: ColorUpdate) -> Self {
        self.invalid_value = value;
        self
    }
}
