//! Conversions between sRGB, linear RGB, CIE XYZ, CIE L*a*b* and MSH.
//!
//! All conversions are closed-form and total; nothing is clamped in
//! the middle of the pipeline.  Use [`Srgba::check`] or
//! [`Srgba::clamp`] on the result.

use std::fmt;
use rgb::{RGBA8, RGBA16};

use crate::RGBColor;
use crate::error::{Error, Result};

/// Converts a linear RGB component to an sRGB component.
pub fn linear_to_s(v: f64) -> f64 {
    if v > 0.0031308 { 1.055 * v.powf(1. / 2.4) - 0.055 }
    else { 12.92 * v }
}

/// Converts an sRGB component to a linear RGB component.
pub fn s_to_linear(v: f64) -> f64 {
    if v > 0.04045 { ((v + 0.055) / 1.055).powf(2.4) }
    else { v / 12.92 }
}

/// A physically linear RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A color in the sRGB color space with a straight (not
/// premultiplied) alpha channel.  All components are in \[0, 1\] for
/// displayable colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Srgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// A color in the CIE XYZ color space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A color in the CIE L*a*b* color space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lab {
    /// The lightness in the range 0. to 100.
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// A color in the Magnitude-Saturation-Hue color space, the polar
/// form of [`Lab`] used by diverging color maps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Msh {
    pub m: f64,
    /// Saturation angle in radians.
    pub s: f64,
    /// Hue angle in radians.
    pub h: f64,
}

// Reference white point D65.
const XN: f64 = 0.95047;
const YN: f64 = 1.0;
const ZN: f64 = 1.08883;

const LAB_EPS: f64 = 0.008856;
const LAB_K: f64 = 7.787;
const LAB_C: f64 = 16. / 116.;

impl LinearRgb {
    /// Converts to CIE XYZ.
    pub fn xyz(&self) -> Xyz {
        Xyz { x: 0.4124 * self.r + 0.3576 * self.g + 0.1805 * self.b,
              y: 0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b,
              z: 0.0193 * self.r + 0.1192 * self.g + 0.9505 * self.b }
    }

    /// Gamma-encodes the color and attaches the opacity `alpha` ∈
    /// \[0, 1\].
    pub fn srgba(&self, alpha: f64) -> Srgba {
        Srgba { r: linear_to_s(self.r),
                g: linear_to_s(self.g),
                b: linear_to_s(self.b),
                a: alpha }
    }
}

impl Xyz {
    /// Converts to physically linear RGB.
    pub fn linear_rgb(&self) -> LinearRgb {
        LinearRgb { r: self.x * 3.2406 + self.y * -1.5372 + self.z * -0.4986,
                    g: self.x * -0.9689 + self.y * 1.8758 + self.z * 0.0415,
                    b: self.x * 0.0557 + self.y * -0.204 + self.z * 1.057 }
    }

    /// Converts to CIE L*a*b*.
    pub fn lab(&self) -> Lab {
        fn f(v: f64) -> f64 {
            if v > LAB_EPS { v.powf(1. / 3.) } else { LAB_K * v + LAB_C }
        }
        let fx = f(self.x / XN);
        let fy = f(self.y / YN);
        let fz = f(self.z / ZN);
        Lab { l: 116. * fy - 16.,
              a: 500. * (fx - fy),
              b: 200. * (fy - fz) }
    }
}

impl Lab {
    /// Converts to CIE XYZ.
    pub fn xyz(&self) -> Xyz {
        const YLIM: f64 = LAB_K * LAB_EPS + LAB_C;
        fn f1(v: f64) -> f64 {
            if v > YLIM { v * v * v } else { (v - LAB_C) / LAB_K }
        }
        let fy = (self.l + 16.) / 116.;
        Xyz { x: XN * f1(self.a / 500. + fy),
              y: YN * f1(fy),
              z: ZN * f1(fy - self.b / 200.) }
    }

    /// Converts to MSH.  A black color (`m == 0`) has an undefined
    /// saturation.
    pub fn msh(&self) -> Msh {
        let m = (self.l * self.l + self.a * self.a + self.b * self.b).sqrt();
        Msh { m, s: (self.l / m).acos(), h: self.b.atan2(self.a) }
    }

    /// Converts to sRGB with opacity `alpha`.
    pub fn srgba(&self, alpha: f64) -> Srgba {
        self.xyz().linear_rgb().srgba(alpha)
    }

    /// Linear interpolation between `self` (`t = 0`) and `c` (`t = 1`).
    pub(crate) fn lerp(&self, c: &Lab, t: f64) -> Lab {
        Lab { l: t * (c.l - self.l) + self.l,
              a: t * (c.a - self.a) + self.a,
              b: t * (c.b - self.b) + self.b }
    }
}

impl Msh {
    /// Converts to CIE L*a*b*.
    pub fn lab(&self) -> Lab {
        let (sin_s, cos_s) = self.s.sin_cos();
        Lab { l: self.m * cos_s,
              a: self.m * sin_s * self.h.cos(),
              b: self.m * sin_s * self.h.sin() }
    }

    /// Converts any color to MSH.
    pub fn from_color<C: RGBColor + ?Sized>(c: &C) -> Msh {
        Srgba::from_color(c).lab().msh()
    }

    /// Returns how much the hue must turn while the magnitude rises
    /// from `self.m` to `converge_m`.  The sign follows the hue, so a
    /// hue of exactly 0 gives NaN.
    pub fn hue_twist(&self, converge_m: f64) -> f64 {
        let sign_h = self.h / self.h.abs();
        sign_h * self.s * (converge_m * converge_m - self.m * self.m).sqrt()
            / (self.m * self.s.sin())
    }
}

impl Srgba {
    /// Un-premultiplies a color given by its 16-bit channels.
    ///
    /// A fully transparent color is divided by a zero alpha and gives
    /// non-finite channels.
    pub fn from_color<C: RGBColor + ?Sized>(c: &C) -> Srgba {
        let RGBA16{ r, g, b, a } = c.rgba16();
        let alpha = a as f64 / 65535.;
        Srgba { r: r as f64 / alpha / 65535.,
                g: g as f64 / alpha / 65535.,
                b: b as f64 / alpha / 65535.,
                a: alpha }
    }

    /// Removes the gamma encoding.  Alpha is dropped.
    pub fn linear_rgb(&self) -> LinearRgb {
        LinearRgb { r: s_to_linear(self.r),
                    g: s_to_linear(self.g),
                    b: s_to_linear(self.b) }
    }

    /// Converts to CIE L*a*b*.  Alpha is dropped.
    pub fn lab(&self) -> Lab { self.linear_rgb().xyz().lab() }

    /// Returns an error if any channel is outside \[0, 1\].
    pub fn check(&self) -> Result<()> {
        let in_range = |v: f64| (0. ..= 1.).contains(&v);
        if in_range(self.r) && in_range(self.g) && in_range(self.b)
            && in_range(self.a) {
            Ok(())
        } else {
            Err(Error::OutOfGamut { color: *self })
        }
    }

    /// Forces all channels into \[0, 1\].
    pub fn clamp(&mut self) {
        self.r = self.r.clamp(0., 1.);
        self.g = self.g.clamp(0., 1.);
        self.b = self.b.clamp(0., 1.);
        self.a = self.a.clamp(0., 1.);
    }

    /// Rounds to straight 8-bit channels, saturating out of range
    /// values.
    pub fn to_rgba8(&self) -> RGBA8 {
        let q = |v: f64| (v * 255.).round().clamp(0., 255.) as u8;
        RGBA8 { r: q(self.r), g: q(self.g), b: q(self.b), a: q(self.a) }
    }
}

impl fmt::Display for Srgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r:{}, g:{}, b:{}, a:{}", self.r, self.g, self.b, self.a)
    }
}

impl RGBColor for Srgba {
    /// Premultiplies the channels by alpha.
    fn rgba16(&self) -> RGBA16 {
        RGBA16 { r: (self.r * self.a * 65535.) as u16,
                 g: (self.g * self.a * 65535.) as u16,
                 b: (self.b * self.a * 65535.) as u16,
                 a: (self.a * 65535.) as u16 }
    }
}
