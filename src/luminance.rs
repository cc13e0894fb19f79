//! Color maps with a lightness linear in the represented value.

use crate::{ColorMap, Palette, RGBColor};
use crate::convert::{Lab, Srgba};
use crate::error::{Error, Result};
use crate::palettes;

/// Parameters of a [`Luminance`] color map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LuminanceConfig {
    /// Opacity of the returned colors, in \[0, 1\].  Default: 1.
    pub alpha: f64,
    /// Upper bound of the scalar domain.  Default: 0, which leaves
    /// the map unusable until it is set.
    pub max: f64,
}

impl Default for LuminanceConfig {
    fn default() -> Self { LuminanceConfig { alpha: 1., max: 0. } }
}

/// A color map interpolating between control colors in CIE L*a*b*
/// such that the luminance of a color is a linear function of the
/// value it represents.
///
/// The lower bound of the domain is always 0: it maps to the darkest
/// control color.
#[derive(Clone, Debug, PartialEq)]
pub struct Luminance {
    colors: Vec<Lab>,
    scalars: Vec<f64>, // Invariant: increasing, first is 0., last is 1.
    config: LuminanceConfig,
}

impl Luminance {
    /// Creates a color map from `control_colors`, ordered from the
    /// darkest to the lightest, with the default [`LuminanceConfig`].
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_moreland::{ColorMap, Luminance};
    /// let mut map = Luminance::new(&[RGB8::new(0, 0, 0),
    ///                                RGB8::new(255, 255, 255)]).unwrap();
    /// map.set_max(10.);
    /// let grey = map.at(5.).unwrap().to_rgba8();
    /// assert_eq!((grey.r, grey.g, grey.b), (119, 119, 119));
    /// ```
    pub fn new<C: RGBColor>(control_colors: &[C]) -> Result<Self> {
        Self::with_config(control_colors, LuminanceConfig::default())
    }

    /// Creates a color map from `control_colors` with the given
    /// parameters.  Fails if there is no control color or if their
    /// luminance is not strictly increasing.
    pub fn with_config<C: RGBColor>(control_colors: &[C],
                                    config: LuminanceConfig) -> Result<Self> {
        if control_colors.is_empty() {
            return Err(Error::NoControlColors)
        }
        let mut colors: Vec<Lab> = Vec::with_capacity(control_colors.len());
        for (index, c) in control_colors.iter().enumerate() {
            let lab = Srgba::from_color(c).lab();
            if let Some(prev) = colors.last() {
                if lab.l <= prev.l {
                    return Err(Error::NonMonotonicLuminance {
                        index, l: lab.l, prev: prev.l })
                }
            }
            colors.push(lab);
        }
        // Increasing, so the extremes are at both ends.
        let lmin = colors[0].l;
        let lmax = colors[colors.len() - 1].l;
        let range = lmax - lmin;
        let mut scalars: Vec<f64> =
            colors.iter().map(|c| (c.l - lmin) / range).collect();
        // Avoid floating point errors at the bounds.
        let last = scalars.len() - 1;
        scalars[0] = 0.;
        scalars[last] = 1.;
        tracing::debug!(n = colors.len(), lmin, lmax,
                        "built luminance color map");
        Ok(Luminance { colors, scalars, config })
    }

    fn from_data(d: &palettes::ty::LuminanceData) -> Self {
        Luminance { colors: d.colors.clone(), scalars: d.scalars.clone(),
                    config: LuminanceConfig::default() }
    }

    pub fn config(&self) -> &LuminanceConfig { &self.config }

    pub fn set_alpha(&mut self, alpha: f64) { self.config.alpha = alpha }

    /// The control colors, from the darkest to the lightest.
    pub fn control_colors(&self) -> &[Lab] { &self.colors }

    /// The normalized positions of the control colors in \[0, 1\].
    pub fn scalars(&self) -> &[f64] { &self.scalars }

    /// Color map based on the colors of black body radiation, from
    /// black through red and yellow to white.
    pub fn black_body() -> Self { Self::from_data(&palettes::BLACK_BODY) }

    /// [`Luminance::black_body`] with some blue and purple hues at the
    /// lower end.  Similar to the default colors used in gnuplot.
    pub fn extended_black_body() -> Self {
        Self::from_data(&palettes::EXTENDED_BLACK_BODY)
    }

    /// The colors of Kindlmann, Reinhard and Creem, “Face-based
    /// luminance matching for perceptual colormap generation”, VIS
    /// 2002: a rainbow with a monotonic luminance.
    pub fn kindlmann() -> Self { Self::from_data(&palettes::KINDLMANN) }

    /// [`Luminance::kindlmann`] with more hues, looping more than 360°
    /// around the hue circle.
    pub fn extended_kindlmann() -> Self {
        Self::from_data(&palettes::EXTENDED_KINDLMANN)
    }
}

impl ColorMap for Luminance {
    fn at(&self, scalar: f64) -> Result<Srgba> {
        let LuminanceConfig { alpha, max } = self.config;
        if max == 0. {
            return Err(Error::DegenerateDomain { min: 0., max })
        }
        let t = scalar / max;
        if !(0. ..= 1.).contains(&t) {
            return Err(Error::OutOfRange { value: t, max })
        }
        let i = self.scalars.partition_point(|&s| s < t);
        if i == 0 {
            return Ok(self.colors[0].srgba(alpha))
        }
        let (s0, s1) = (self.scalars[i - 1], self.scalars[i]);
        let frac = (t - s0) / (s1 - s0);
        let mut c = self.colors[i - 1].lerp(&self.colors[i], frac)
            .srgba(alpha);
        c.clamp();
        Ok(c)
    }

    /// # Panics
    ///
    /// Always: the minimum of a luminance color map is fixed at 0.
    fn set_min(&mut self, _: f64) {
        panic!("color-moreland: Luminance minimum value cannot be \
                changed from zero")
    }

    fn set_max(&mut self, v: f64) { self.config.max = v }

    fn min(&self) -> f64 { 0. }

    fn max(&self) -> f64 { self.config.max }

    fn try_palette(&self, n: usize) -> Result<Palette> {
        let mut p = self.clone();
        if p.config.max == 0. {
            p.config.max = 1.;
        }
        Palette::sample(&p, 0., p.config.max, n)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::{RGB8, RGBA8, RGBA16};

    // The precision of a u8 expressed as a u16.
    const TOLERANCE: f64 = 1. / 256. * 65535.;

    fn assert_rgb(i: usize, c: &Srgba, want: RGB8) {
        let RGBA16{ r, g, b, .. } = c.rgba16();
        let w = want.rgba16();
        for (have, want, name) in [(r, w.r, "R"), (g, w.g, "G"), (b, w.b, "B")] {
            assert!((have as f64 - want as f64).abs() <= TOLERANCE,
                    "color {i} {name}: have {have}, want {want}");
        }
    }

    fn rgb8(c: &[[u8; 3]]) -> Vec<RGB8> {
        c.iter().map(|&[r, g, b]| RGB8::new(r, g, b)).collect()
    }

    fn black_body_colors() -> Vec<RGB8> {
        rgb8(&[[0, 0, 0], [178, 34, 34], [227, 105, 5], [238, 210, 20],
               [255, 255, 255]])
    }

    fn extended_black_body_colors() -> Vec<RGB8> {
        rgb8(&[[0, 0, 0], [0, 24, 168], [99, 0, 228], [220, 20, 60],
               [255, 117, 56], [238, 210, 20], [255, 255, 255]])
    }

    fn kindlmann_colors() -> Vec<RGB8> {
        rgb8(&[[0, 0, 0], [46, 4, 76], [63, 7, 145], [8, 66, 165],
               [5, 106, 106], [7, 137, 169], [8, 168, 26], [84, 194, 9],
               [196, 206, 10], [252, 220, 197], [255, 255, 255]])
    }

    fn extended_kindlmann_colors() -> Vec<RGB8> {
        rgb8(&[[0, 0, 0], [44, 5, 103], [3, 67, 67], [5, 103, 13],
               [117, 124, 6], [246, 104, 74], [250, 149, 241],
               [232, 212, 253], [255, 255, 255]])
    }

    #[test]
    fn create_matches_presets() {
        let tests = [
            ("black body", black_body_colors(), Luminance::black_body()),
            ("extended black body", extended_black_body_colors(),
             Luminance::extended_black_body()),
            ("Kindlmann", kindlmann_colors(), Luminance::kindlmann()),
            ("extended Kindlmann", extended_kindlmann_colors(),
             Luminance::extended_kindlmann()),
        ];
        for (name, colors, want) in tests {
            let have = Luminance::new(&colors).unwrap();
            assert_eq!(have.config(), want.config());
            assert_eq!(have.scalars().len(), want.scalars().len());
            for (s, w) in have.scalars().iter().zip(want.scalars()) {
                assert!((s - w).abs() < 1e-12, "{name}: scalar {s} ≉ {w}");
            }
            // The tables were computed against a slightly different
            // white point, which only moves a* and b*.
            for (c, w) in have.control_colors().iter()
                .zip(want.control_colors()) {
                assert!((c.l - w.l).abs() < 1e-9, "{name}: {c:?} ≉ {w:?}");
                assert!((c.a - w.a).abs() < 0.05, "{name}: {c:?} ≉ {w:?}");
                assert!((c.b - w.b).abs() < 0.05, "{name}: {c:?} ≉ {w:?}");
            }
        }
    }

    #[test]
    fn non_monotonic() {
        let colors = rgb8(&[[0, 0, 0], [128, 128, 128], [128, 128, 128]]);
        match Luminance::new(&colors) {
            Err(Error::NonMonotonicLuminance { index, l, prev }) => {
                assert_eq!(index, 2);
                assert_eq!(l, prev);
            }
            other => panic!("expected a construction error, got {other:?}"),
        }
        let colors = rgb8(&[[255, 255, 255], [0, 0, 0]]);
        assert!(matches!(Luminance::new(&colors),
                         Err(Error::NonMonotonicLuminance { index: 1, .. })));
        assert_eq!(Luminance::new::<RGB8>(&[]), Err(Error::NoControlColors));
    }

    #[test]
    fn single_control_color() {
        let mut map = Luminance::new(&[RGB8::new(10, 20, 30)]).unwrap();
        assert_eq!(map.scalars(), &[1.]);
        map.set_max(1.);
        assert_eq!(map.at(0.3).unwrap(), map.control_colors()[0].srgba(1.));
    }

    #[test]
    fn black_body_control_points() {
        let mut map = Luminance::black_body();
        map.set_max(1.);
        let scalars = map.scalars().to_vec();
        for (i, (s, want)) in scalars.iter().zip(black_body_colors())
            .enumerate() {
            assert_rgb(i, &map.at(*s).unwrap(), want);
        }
    }

    #[test]
    fn extended_black_body() {
        let mut map = Luminance::extended_black_body();
        map.set_max(1.);
        let scalars = [0., 0.21873483862751875, 0.34506542513775906,
                       0.4702980511087303, 0.6517482203230537,
                       0.8413253643355525, 1.];
        for (i, (s, want)) in scalars.into_iter()
            .zip(extended_black_body_colors()).enumerate() {
            assert_rgb(i, &map.at(s).unwrap(), want);
        }
    }

    #[test]
    fn black_body_palette() {
        let p = Luminance::black_body().palette(5);
        let want = rgb8(&[[0, 0, 0], [112, 30, 25], [206, 77, 25],
                          [236, 174, 13], [255, 255, 255]]);
        assert_eq!(p.len(), 5);
        for (i, (c, w)) in p.iter().zip(want).enumerate() {
            assert_rgb(i, c, w);
        }
    }

    #[test]
    fn domain_checks() {
        let mut map = Luminance::kindlmann();
        assert_eq!(map.at(0.5), Err(Error::DegenerateDomain { min: 0., max: 0. }));
        map.set_max(2.);
        assert_eq!((map.min(), map.max()), (0., 2.));
        assert_eq!(map.at(3.), Err(Error::OutOfRange { value: 1.5, max: 2. }));
        assert!(matches!(map.at(-0.1), Err(Error::OutOfRange { .. })));
        assert!(matches!(map.at(f64::NAN), Err(Error::OutOfRange { .. })));
        // Scaled by `max`.
        let mut unit = Luminance::kindlmann();
        unit.set_max(1.);
        assert_eq!(map.at(1.), unit.at(0.5));
    }

    #[test]
    fn bounds_map_to_extreme_colors() {
        for mut map in [Luminance::black_body(), Luminance::kindlmann(),
                        Luminance::extended_kindlmann()] {
            map.set_max(4.);
            let first = map.control_colors()[0].srgba(1.);
            let mut last = map.control_colors().last().unwrap().srgba(1.);
            last.clamp();
            assert_eq!(map.at(0.).unwrap(), first);
            let top = map.at(4.).unwrap();
            for (x, y) in [(top.r, last.r), (top.g, last.g), (top.b, last.b)] {
                assert!((x - y).abs() < 1e-12, "{top:?} ≉ {last:?}");
            }
            let p = map.palette(9);
            assert_eq!(p.colors()[0], map.at(0.).unwrap());
            assert_eq!(p.colors()[8], map.at(4.).unwrap());
        }
    }

    #[test]
    fn alpha_is_applied() {
        let mut map = Luminance::with_config(
            &[RGBA8::new(0, 0, 0, 255), RGBA8::new(255, 255, 255, 255)],
            LuminanceConfig { alpha: 0.5, max: 1. }).unwrap();
        assert_eq!(map.at(0.5).unwrap().a, 0.5);
        map.set_alpha(1.);
        assert_eq!(map.at(0.5).unwrap().a, 1.);
    }

    #[test]
    #[should_panic(expected = "cannot be changed from zero")]
    fn set_min_panics() {
        Luminance::black_body().set_min(1.);
    }
}
