//! Perceptual color maps for pseudocoloring scalar fields.
//!
//! - [`DivergingMsh`]: interpolates between two hues through an
//!   achromatic midpoint in the MSH color space.
//! - [`Luminance`]: interpolates through control colors in CIE
//!   L*a*b* so that the lightness is a linear function of the scalar.
//!
//! Both implement [`ColorMap`] and produce [`Srgba`] colors, which can
//! be sampled into a discrete [`Palette`].  Ready-made maps are listed
//! in [`Preset`].
//!
//! The color maps are described at
//! <http://www.kennethmoreland.com/color-advice/> and in “Diverging
//! Color Maps for Scientific Visualization”, K. Moreland, ISVC 2009.
//!
//! ```
//! use color_moreland::{ColorMap, DivergingMsh};
//! let mut map = DivergingMsh::smooth_blue_red();
//! map.set_max(1.);
//! let c = map.at(0.5).unwrap().to_rgba8();
//! assert_eq!((c.r, c.g, c.b), (221, 221, 221));
//! ```

use rgb::{RGB8, RGB16, RGBA8, RGBA16};

pub mod convert;
mod diverging;
mod error;
mod luminance;
mod palettes;

pub use convert::{Lab, LinearRgb, Msh, Srgba, Xyz};
pub use diverging::{DivergingConfig, DivergingMsh};
pub use error::{Error, Result};
pub use luminance::{Luminance, LuminanceConfig};
pub use palettes::{Preset, PaletteType};

/// Specifies the methods an RGB color encoding must provide to be
/// used as a control color or produced as an output color.
pub trait RGBColor {
    /// Return the red, green, blue and alpha components of the color
    /// in \[0, 65535\], with red, green and blue premultiplied by
    /// alpha.
    fn rgba16(&self) -> RGBA16;

    /// Return the color in the MSH color space.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_moreland::RGBColor;
    /// let blue = RGB8::new(0, 0, 255).msh();
    /// assert!(blue.h < 0.);
    /// ```
    fn msh(&self) -> Msh { Msh::from_color(self) }
}

impl RGBColor for RGB8 {
    #[inline]
    fn rgba16(&self) -> RGBA16 {
        RGBA16 { r: self.r as u16 * 0x101, g: self.g as u16 * 0x101,
                 b: self.b as u16 * 0x101, a: 0xffff }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn rgba16(&self) -> RGBA16 {
        RGBA16 { r: self.r, g: self.g, b: self.b, a: 0xffff }
    }
}

/// 8-bit colors carry a straight alpha.
impl RGBColor for RGBA8 {
    fn rgba16(&self) -> RGBA16 {
        let a = self.a as u32;
        let premul = |v: u8| ((v as u32 * 0x101) * a / 0xff) as u16;
        RGBA16 { r: premul(self.r), g: premul(self.g), b: premul(self.b),
                 a: (a * 0x101) as u16 }
    }
}

/// 16-bit colors carry a straight alpha.
impl RGBColor for RGBA16 {
    fn rgba16(&self) -> RGBA16 {
        let a = self.a as u32;
        let premul = |v: u16| (v as u32 * a / 0xffff) as u16;
        RGBA16 { r: premul(self.r), g: premul(self.g), b: premul(self.b),
                 a: self.a }
    }
}

/// A mapping from scalars in a configurable domain to colors.
///
/// Both [`DivergingMsh`] and [`Luminance`] implement it; they share no
/// state, only this protocol.
pub trait ColorMap {
    /// Returns the color corresponding to `scalar`.
    fn at(&self, scalar: f64) -> Result<Srgba>;

    /// Sets the lower bound of the scalar domain.
    fn set_min(&mut self, v: f64);

    /// Sets the upper bound of the scalar domain.
    fn set_max(&mut self, v: f64);

    /// Lower bound of the scalar domain.
    fn min(&self) -> f64;

    /// Upper bound of the scalar domain.
    fn max(&self) -> f64;

    /// Samples `n` colors evenly spaced over the domain (both bounds
    /// included).  An unconfigured domain defaults to \[0, 1\].
    fn try_palette(&self, n: usize) -> Result<Palette>;

    /// Same as [`ColorMap::try_palette`].
    ///
    /// # Panics
    ///
    /// A palette with a missing color is useless, so this panics if
    /// any of the samples fails.
    fn palette(&self, n: usize) -> Palette {
        match self.try_palette(n) {
            Ok(p) => p,
            Err(e) => panic!("color-moreland: cannot sample palette: {e}"),
        }
    }

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn samples(&self, a: f64, b: f64, n: usize) -> Samples<'_, Self>
    where Self: Sized {
        Samples::new(self, a, b, n)
    }
}

/// An iterator yielding `f64` in a given range together with the
/// colors they map to.
///
/// Created by [`ColorMap::samples`].
pub struct Samples<'a, M: ?Sized> {
    map: &'a M,
    a: f64,
    b: f64,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<'a, M> Samples<'a, M> where M: ColorMap + ?Sized {
    fn new(map: &'a M, mut a: f64, mut b: f64, n: usize) -> Self {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Samples { map, a, b, flast: 0., last: 0, i: 1, j: 0 } // Empty
        } else {
            Samples { map, a, b, flast: (n - 1) as f64, last: n - 1,
                      i: 0, j: n - 1 }
        }
    }

    /// Return the scalar of the position `k` (assuming it is in the
    /// range `0 ..= self.last`).  The bounds are returned exactly.
    fn scalar(&self, k: usize) -> f64 {
        if k == 0 {
            self.a
        } else if k == self.last {
            self.b
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_finite() {
                x
            } else {
                // Overflow of the weighted sum (inf or inf - inf).
                let t = beta / self.flast;
                (1. - t) * self.a + t * self.b
            }
        }
    }

    fn item(&self, k: usize) -> (f64, Result<Srgba>) {
        let x = self.scalar(k);
        (x, self.map.at(x))
    }
}

impl<'a, M> Iterator for Samples<'a, M> where M: ColorMap + ?Sized {
    type Item = (f64, Result<Srgba>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.item(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, M> ExactSizeIterator for Samples<'a, M>
where M: ColorMap + ?Sized {
    fn len(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<'a, M> DoubleEndedIterator for Samples<'a, M>
where M: ColorMap + ?Sized {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.item(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}


/// A discrete sequence of colors sampled from a [`ColorMap`].
///
/// Palettes are immutable once generated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    colors: Vec<Srgba>,
}

impl Palette {
    /// Samples `n` colors of `map` over \[`a`, `b`\], failing on the
    /// first color that cannot be produced.
    pub(crate) fn sample<M>(map: &M, a: f64, b: f64, n: usize) -> Result<Self>
    where M: ColorMap {
        let colors = map.samples(a, b, n).map(|(_, c)| c)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(n, min = a, max = b, "sampled palette");
        Ok(Palette { colors })
    }

    /// Returns the colors of the palette.
    pub fn colors(&self) -> &[Srgba] { &self.colors }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Srgba> { self.colors.iter() }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Srgba;
    type IntoIter = std::slice::Iter<'a, Srgba>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}
