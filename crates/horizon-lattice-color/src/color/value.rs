//! Canonical color attributes and partial updates.

use serde::Deserialize;

use super::convert::{Hsv, Rgb};

/// The canonical attributes of a color.
///
/// RGB and HSV are stored side by side and kept consistent by
/// [`Color::set`](super::Color::set).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// HSV saturation (0.0-1.0).
    pub s: f64,
    /// HSV value (0.0-1.0).
    pub v: f64,
    /// Alpha (0.0-1.0).
    pub a: f64,
}

impl Default for ColorValue {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            h: 0.0,
            s: 0.0,
            v: 0.0,
            a: 1.0,
        }
    }
}

impl ColorValue {
    /// The RGB channels.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// The HSV components.
    #[inline]
    pub fn hsv(&self) -> Hsv {
        Hsv {
            h: self.h,
            s: self.s,
            v: self.v,
        }
    }
}

/// Which attribute group of a [`ColorUpdate`] is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    /// More RGB channels than HSV components were supplied; HSV is recomputed.
    Rgb,
    /// More HSV components than RGB channels were supplied; RGB is recomputed.
    Hsv,
    /// Both groups supplied the same number of keys (including none).
    /// Supplied values are stored and nothing is recomputed.
    Balanced,
}

/// A partial set of color attributes.
///
/// Alpha is applied unconditionally and does not count towards either group.
///
/// # Example
///
/// ```
/// use horizon_lattice_color::prelude::{ColorUpdate, UpdateSource};
///
/// let update = ColorUpdate::hsv(120.0, 1.0, 1.0);
/// assert_eq!(update.source(), UpdateSource::Hsv);
///
/// let update = ColorUpdate::default().with_red(10).with_hue(40.0);
/// assert_eq!(update.source(), UpdateSource::Balanced);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ColorUpdate {
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
    pub h: Option<f64>,
    pub s: Option<f64>,
    pub v: Option<f64>,
    pub a: Option<f64>,
}

impl ColorUpdate {
    /// An update of the three RGB channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            ..Self::default()
        }
    }

    /// An update of the three RGB channels and alpha.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::rgb(r, g, b).with_alpha(a)
    }

    /// An update of the three HSV components.
    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: Some(h),
            s: Some(s),
            v: Some(v),
            ..Self::default()
        }
    }

    /// An update of the three HSV components and alpha.
    pub fn hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self::hsv(h, s, v).with_alpha(a)
    }

    /// Set the red channel.
    pub fn with_red(mut self, r: u8) -> Self {
        self.r = Some(r);
        self
    }

    /// Set the green channel.
    pub fn with_green(mut self, g: u8) -> Self {
        self.g = Some(g);
        self
    }

    /// Set the blue channel.
    pub fn with_blue(mut self, b: u8) -> Self {
        self.b = Some(b);
        self
    }

    /// Set the hue.
    pub fn with_hue(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    /// Set the HSV saturation.
    pub fn with_saturation(mut self, s: f64) -> Self {
        self.s = Some(s);
        self
    }

    /// Set the HSV value.
    pub fn with_value(mut self, v: f64) -> Self {
        self.v = Some(v);
        self
    }

    /// Set alpha.
    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }

    /// Number of supplied RGB channels.
    pub fn rgb_count(&self) -> usize {
        [self.r, self.g, self.b].iter().filter(|c| c.is_some()).count()
    }

    /// Number of supplied HSV components.
    pub fn hsv_count(&self) -> usize {
        [self.h, self.s, self.v].iter().filter(|c| c.is_some()).count()
    }

    /// Decide which group is authoritative.
    pub fn source(&self) -> UpdateSource {
        use std::cmp::Ordering;

        match self.rgb_count().cmp(&self.hsv_count()) {
            Ordering::Greater => UpdateSource::Rgb,
            Ordering::Less => UpdateSource::Hsv,
            Ordering::Equal => UpdateSource::Balanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_does_not_count() {
        let update = ColorUpdate::default().with_alpha(0.5);
        assert_eq!(update.rgb_count(), 0);
        assert_eq!(update.hsv_count(), 0);
        assert_eq!(update.source(), UpdateSource::Balanced);
    }

    #[test]
    fn majority_wins() {
        let update = ColorUpdate::rgb(1, 2, 3).with_hue(90.0);
        assert_eq!(update.source(), UpdateSource::Rgb);

        let update = ColorUpdate::hsv(90.0, 0.5, 0.5).with_red(10).with_green(20);
        assert_eq!(update.source(), UpdateSource::Hsv);
    }

    #[test]
    fn deserialize_partial_map() {
        let update: ColorUpdate = serde_json::from_str(r#"{"h": 120, "s": 1, "v": 1}"#).unwrap();
        assert_eq!(update, ColorUpdate::hsv(120.0, 1.0, 1.0));
    }
}
