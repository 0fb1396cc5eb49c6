//! CSS color and gradient values for Horizon Lattice.
//!
//! This crate parses, edits and prints the color and gradient values used in
//! stylesheets:
//!
//! - **Colors**: RGB, RGBA, HSL, HSLA, HEX, `transparent` and CSS keywords,
//!   with RGB and HSV kept consistent under partial updates
//! - **Gradients**: linear gradients with vendor prefixes, direction keywords
//!   and automatic stop positions
//!
//! Malformed input never panics. Colors fall back to a configurable invalid
//! value, and gradients come back empty.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_color::prelude::*;
//!
//! let color = Color::new("rgba(255, 0, 0, 0.5)");
//! assert_eq!(color.to_hsla(), "hsla(0, 100%, 50%, 0.5)");
//!
//! let gradient: Gradient = "-webkit-linear-gradient(left, #fff, #000 80%)".parse()?;
//! assert_eq!(gradient.val()?, "linear-gradient(to right, #fff, #000 80%)");
//! # Ok::<(), horizon_lattice_color::Error>(())
//! ```

pub mod color;
pub mod gradient;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{
        Color, ColorCodec, ColorFormat, ColorOptions, ColorUpdate, ColorValue, Hsl, Hsv, Rgb,
        UpdateSource,
    };
    pub use crate::gradient::{Gradient, GradientOptions, GradientStop, GradientType, Position};
    pub use crate::{Error, Result};
}
