//! Numeric colorspace conversion between RGB, HSL, and HSV.
//!
//! RGB channels are 8-bit integers. Hue is in degrees, and saturation,
//! lightness, and value are fractions in `[0, 1]`.

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB triple.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Check whether all three channels are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    fn unit(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

/// A color in the HSL model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Lightness (0.0-1.0).
    pub l: f64,
}

/// A color in the HSV model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Value (0.0-1.0).
    pub v: f64,
}

/// Convert HSL to RGB.
///
/// Channels are rounded to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let Hsl { s, l, .. } = hsl;

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    Rgb {
        r: hue_to_rgb(m1, m2, h + 1.0 / 3.0),
        g: hue_to_rgb(m1, m2, h),
        b: hue_to_rgb(m1, m2, h - 1.0 / 3.0),
    }
}

/// Interpolate one channel between `m1` and `m2` for a hue in turns.
///
/// The hue is wrapped once into `[0, 1]` before the sextant lookup.
pub fn hue_to_rgb(m1: f64, m2: f64, h: f64) -> u8 {
    let h = if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    };

    let v = if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    };

    to_channel(v)
}

/// Convert RGB to HSL.
///
/// The hue is not rounded; serializers round it when printing.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;
    let add = max + min;
    let l = add * 0.5;

    let h = if min == max {
        0.0
    } else if r == max {
        60.0 * (g - b) / diff + 360.0
    } else if g == max {
        60.0 * (b - r) / diff + 120.0
    } else {
        60.0 * (r - g) / diff + 240.0
    };

    let s = if diff == 0.0 {
        0.0
    } else if l <= 0.5 {
        diff / add
    } else {
        diff / (2.0 - add)
    };

    Hsl { h: h % 360.0, s, l }
}

/// Convert RGB to HSV.
///
/// The hue is rounded to whole degrees.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let s = if max == 0.0 { 0.0 } else { diff / max };

    let h = if max == min {
        0.0
    } else {
        let sector = if max == r {
            (g - b) / diff + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };
        sector / 6.0
    };

    Hsv {
        h: (h * 360.0).round() % 360.0,
        s,
        v: max,
    }
}

/// Offsets of `(c, x, 0)` per 60 degree sector, as indices into `[c, x, 0]`.
const HSV_SECTORS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [1, 0, 2],
    [2, 0, 1],
    [2, 1, 0],
    [1, 2, 0],
    [0, 2, 1],
];

/// Convert HSV to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h.rem_euclid(360.0) / 60.0;
    let c = hsv.v * hsv.s;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = hsv.v - c;

    let parts = [c, x, 0.0];
    let [ri, gi, bi] = HSV_SECTORS[(h as usize).min(5)];

    Rgb {
        r: to_channel(m + parts[ri]),
        g: to_channel(m + parts[gi]),
        b: to_channel(m + parts[bi]),
    }
}

#[inline]
fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
