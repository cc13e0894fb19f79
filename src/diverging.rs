//! Smooth diverging color maps interpolated in MSH space.

use crate::{ColorMap, Palette};
use crate::convert::{Msh, Srgba};
use crate::error::{Error, Result};
use crate::palettes;

/// Parameters of a [`DivergingMsh`] color map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DivergingConfig {
    /// MSH magnitude of the convergence point.  Default: 88.
    pub converge_m: f64,
    /// Position in (0, 1) where the two halves converge.  Default: 0.5.
    pub converge_point: f64,
    /// Opacity of the returned colors, in \[0, 1\].  Default: 1.
    pub alpha: f64,
    /// Lower bound of the scalar domain.  Default: 0.
    pub min: f64,
    /// Upper bound of the scalar domain.  Default: 0, which leaves
    /// the map unusable until it is set.
    pub max: f64,
}

impl Default for DivergingConfig {
    fn default() -> Self {
        DivergingConfig { converge_m: 88., converge_point: 0.5, alpha: 1.,
                          min: 0., max: 0. }
    }
}

/// A diverging color map going from `start` to `end` through an
/// achromatic color, as described in “Diverging Color Maps for
/// Scientific Visualization”, K. Moreland, ISVC 2009.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DivergingMsh {
    start: Msh,
    end: Msh,
    config: DivergingConfig,
}

impl DivergingMsh {
    /// Creates a color map from `start` to `end` with the default
    /// [`DivergingConfig`].
    pub fn new(start: Msh, end: Msh) -> Self {
        DivergingMsh { start, end, config: DivergingConfig::default() }
    }

    /// Creates a color map from `start` to `end` with the given
    /// parameters.  Fails if the convergence point is not in (0, 1).
    pub fn with_config(start: Msh, end: Msh, config: DivergingConfig)
                       -> Result<Self> {
        if !(config.converge_point > 0. && config.converge_point < 1.) {
            return Err(Error::ConvergePoint(config.converge_point))
        }
        Ok(DivergingMsh { start, end, config })
    }

    pub fn config(&self) -> &DivergingConfig { &self.config }

    pub fn start(&self) -> Msh { self.start }

    pub fn end(&self) -> Msh { self.end }

    pub fn set_alpha(&mut self, alpha: f64) { self.config.alpha = alpha }

    pub fn set_converge_m(&mut self, m: f64) { self.config.converge_m = m }

    /// Returns the MSH color at `t` ∈ \[0, 1\].  Exactly at the
    /// convergence point the color is achromatic and its hue is 0.
    pub fn interpolate(&self, t: f64) -> Msh {
        let DivergingConfig { converge_m, converge_point: cp, .. } =
            self.config;
        let start = &self.start;
        let end = &self.end;
        if t < cp {
            let interp = t / cp;
            return Msh { m: (converge_m - start.m) * interp + start.m,
                         s: start.s * (1. - interp),
                         h: start.h + start.hue_twist(converge_m) * interp }
        }
        let interp1 = (t - 1.) / (cp - 1.);
        let interp2 = t / cp - 1.;
        let h = if t > cp { end.h + end.hue_twist(converge_m) * interp1 }
                else { 0. };
        Msh { m: (converge_m - end.m) * interp1 + end.m,
              s: end.s * interp2,
              h }
    }

    fn from_data(d: &palettes::ty::DivergingData) -> Self {
        DivergingMsh::new(d.start, d.end)
    }

    /// Smooth diverging color map ranging from blue to red.
    pub fn smooth_blue_red() -> Self {
        Self::from_data(&palettes::SMOOTH_BLUE_RED)
    }

    /// Smooth diverging color map ranging from purple to orange.
    pub fn smooth_purple_orange() -> Self {
        Self::from_data(&palettes::SMOOTH_PURPLE_ORANGE)
    }

    /// Smooth diverging color map ranging from green to purple.
    pub fn smooth_green_purple() -> Self {
        Self::from_data(&palettes::SMOOTH_GREEN_PURPLE)
    }

    /// Smooth diverging color map ranging from blue to tan.
    pub fn smooth_blue_tan() -> Self {
        Self::from_data(&palettes::SMOOTH_BLUE_TAN)
    }

    /// Smooth diverging color map ranging from green to red.
    pub fn smooth_green_red() -> Self {
        Self::from_data(&palettes::SMOOTH_GREEN_RED)
    }
}

impl ColorMap for DivergingMsh {
    /// Returns the color at `scalar`.  The scalar is normalized as
    /// `(scalar - min) / max`.  A color with channels outside \[0, 1\]
    /// is returned inside [`Error::OutOfGamut`].
    fn at(&self, scalar: f64) -> Result<Srgba> {
        let DivergingConfig { min, max, alpha, .. } = self.config;
        if min == max {
            return Err(Error::DegenerateDomain { min, max })
        }
        let t = (scalar - min) / max;
        let c = self.interpolate(t).lab().srgba(alpha);
        if let Err(e) = c.check() {
            tracing::trace!(scalar, %c, "diverging color out of gamut");
            return Err(e)
        }
        Ok(c)
    }

    fn set_min(&mut self, v: f64) { self.config.min = v }

    fn set_max(&mut self, v: f64) { self.config.max = v }

    fn min(&self) -> f64 { self.config.min }

    fn max(&self) -> f64 { self.config.max }

    fn try_palette(&self, n: usize) -> Result<Palette> {
        let mut p = *self;
        if p.config.min == 0. && p.config.max == 0. {
            p.config.max = 1.;
        }
        Palette::sample(&p, p.config.min, p.config.max, n)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rgb::{RGBA8, RGBA16};
    use crate::RGBColor;

    const BLUE: Msh = Msh { m: 80., s: 1.08, h: -1.1 };
    const RED: Msh = Msh { m: 80., s: 1.08, h: 0.5 };

    // The precision of a u8 expressed as a u16.
    const TOLERANCE: f64 = 1. / 256. * 65535.;

    fn assert_rgb(i: usize, c: &Srgba, want: [u8; 3]) {
        let RGBA16{ r, g, b, a } = c.rgba16();
        let w = RGBA8::new(want[0], want[1], want[2], 255).rgba16();
        for (have, want, name) in [(r, w.r, "R"), (g, w.g, "G"), (b, w.b, "B")] {
            assert!((have as f64 - want as f64).abs() <= TOLERANCE,
                    "{i} {name}: want {want} but have {have}");
        }
        assert_eq!(a, w.a);
    }

    fn map(converge_point: f64) -> DivergingMsh {
        let config = DivergingConfig { converge_point,
                                       ..DivergingConfig::default() };
        DivergingMsh::with_config(BLUE, RED, config).unwrap()
    }

    #[test]
    fn interpolate() {
        let tests = [
            (0.5, 0.125, Msh { m: 82., s: 0.81, h: -1.2402896406131008 }),
            (0.5, 0.75, Msh { m: 84., s: 0.54, h: 0.7805792812262012 }),
            (0.75, 0.7499999999999999,
             Msh { m: 88., s: 1.1990408665951691e-16, h: -1.6611585624524023 }),
            (0.75, 0.7500000000000001,
             Msh { m: 88., s: 2.3980817331903383e-16, h: 1.0611585624524023 }),
        ];
        for (i, (cp, t, want)) in tests.into_iter().enumerate() {
            let have = map(cp).interpolate(t);
            for (x, y) in [(have.m, want.m), (have.s, want.s), (have.h, want.h)] {
                assert!((x - y).abs() <= 1e-13,
                        "test {i}: expected {want:?}; got {have:?}");
            }
        }
    }

    #[test]
    fn convergence_point_is_achromatic() {
        for cp in [0.5, 0.75] {
            assert_eq!(map(cp).interpolate(cp), Msh { m: 88., s: 0., h: 0. });
        }
    }

    #[test]
    fn at() {
        let mut p = DivergingMsh::new(BLUE, RED);
        p.set_max(1.);
        let c = p.at(0.125).unwrap();
        assert_rgb(0, &c, [98, 130, 234]);
    }

    #[test]
    fn degenerate_domain() {
        let mut p = DivergingMsh::smooth_blue_red();
        assert_eq!(p.at(0.3), Err(Error::DegenerateDomain { min: 0., max: 0. }));
        p.set_min(2.);
        p.set_max(2.);
        assert_eq!((p.min(), p.max()), (2., 2.));
        assert!(matches!(p.at(2.), Err(Error::DegenerateDomain { .. })));
    }

    #[test]
    fn normalization_divides_by_max() {
        let mut p = DivergingMsh::smooth_blue_red();
        p.set_min(1.);
        p.set_max(2.);
        let mut q = DivergingMsh::smooth_blue_red();
        q.set_max(1.);
        // (1.5 - 1) / 2 = 0.25
        assert_eq!(p.at(1.5), q.at(0.25));
    }

    #[test]
    fn out_of_gamut_keeps_color() {
        let mut p = DivergingMsh::smooth_blue_red();
        p.set_max(1.);
        match p.at(-1.) {
            Err(Error::OutOfGamut { color }) => assert!(color.check().is_err()),
            other => panic!("expected an out of gamut color, got {other:?}"),
        }
    }

    #[test]
    fn invalid_converge_point() {
        for cp in [0., 1., -0.5, f64::NAN] {
            let config = DivergingConfig { converge_point: cp,
                                           ..DivergingConfig::default() };
            assert!(matches!(DivergingMsh::with_config(BLUE, RED, config),
                             Err(Error::ConvergePoint(_))));
        }
    }

    #[test]
    fn smooth_blue_red() {
        let want = [
            [59, 76, 192], [68, 90, 204], [77, 104, 215], [87, 117, 225],
            [98, 130, 234], [108, 142, 241], [119, 154, 247], [130, 165, 251],
            [141, 176, 254], [152, 185, 255], [163, 194, 255], [174, 201, 253],
            [184, 208, 249], [194, 213, 244], [204, 217, 238], [213, 219, 230],
            [221, 221, 221], [229, 216, 209], [236, 211, 197], [241, 204, 185],
            [245, 196, 173], [247, 187, 160], [247, 177, 148], [247, 166, 135],
            [244, 154, 123], [241, 141, 111], [236, 127, 99], [229, 112, 88],
            [222, 96, 77], [213, 80, 66], [203, 62, 56], [192, 40, 47],
            [180, 4, 38],
        ];
        let p = DivergingMsh::smooth_blue_red().palette(33);
        assert_eq!(p.len(), want.len());
        for (i, (c, w)) in p.iter().zip(want).enumerate() {
            assert_rgb(i, c, w);
        }
    }

    fn frac_to_byte(v: f64) -> u8 { (v * 255. + 0.5) as u8 }

    #[test]
    fn smooth_cool_warm() {
        let tests = [
            ([0.230, 0.299, 0.754], DivergingMsh::smooth_blue_red(),
             [0.706, 0.016, 0.150]),
            ([0.436, 0.308, 0.631], DivergingMsh::smooth_purple_orange(),
             [0.759, 0.334, 0.046]),
            ([0.085, 0.532, 0.201], DivergingMsh::smooth_green_purple(),
             [0.436, 0.308, 0.631]),
            ([0.217, 0.525, 0.910], DivergingMsh::smooth_blue_tan(),
             [0.677, 0.492, 0.093]),
            ([0.085, 0.532, 0.201], DivergingMsh::smooth_green_red(),
             [0.758, 0.214, 0.233]),
        ];
        let mid = [0.865, 0.865, 0.865];
        for (i, (start, map, end)) in tests.into_iter().enumerate() {
            let p = map.palette(3);
            for (c, want) in p.iter().zip([start, mid, end]) {
                assert_rgb(i, c, want.map(frac_to_byte));
            }
        }
    }

    #[test]
    fn palette_bounds() {
        let mut p = DivergingMsh::smooth_blue_tan();
        p.set_min(1.);
        p.set_max(3.);
        let pal = p.palette(7);
        assert_eq!(pal.len(), 7);
        assert_eq!(pal.colors()[0], p.at(1.).unwrap());
        assert_eq!(pal.colors()[6], p.at(3.).unwrap());
    }

    #[test]
    #[should_panic]
    fn palette_failure_is_fatal() {
        let mut p = DivergingMsh::smooth_blue_red();
        p.set_min(-1.);
        p.set_max(1.);
        p.palette(5);
    }

    #[test]
    fn try_palette_reports_failure() {
        let mut p = DivergingMsh::smooth_blue_red();
        p.set_min(-1.);
        p.set_max(1.);
        assert!(matches!(p.try_palette(5), Err(Error::OutOfGamut { .. })));
    }

    proptest! {
        #[test]
        fn achromatic_convergence(
            m0 in 40f64..87., s0 in 0.1f64..1.4, h0 in -3f64..3.,
            m1 in 40f64..87., s1 in 0.1f64..1.4, h1 in -3f64..3.,
            cp in 0.05f64..0.95) {
            let config = DivergingConfig { converge_point: cp,
                                           ..DivergingConfig::default() };
            let p = DivergingMsh::with_config(Msh { m: m0, s: s0, h: h0 },
                                              Msh { m: m1, s: s1, h: h1 },
                                              config).unwrap();
            let c = p.interpolate(cp);
            prop_assert_eq!(c.s, 0.);
            prop_assert_eq!(c.h, 0.);
            prop_assert!((c.m - 88.).abs() < 1e-12);
        }
    }
}
