// Control colors are taken from http://www.kennethmoreland.com/color-advice/
// with the luminance adjusted to be perceptually linear.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;
pub use ty::PaletteType;

use crate::{ColorMap, DivergingMsh, Luminance};
use crate::convert::{Lab, Msh};

// Diverging color maps

pub(crate) const SMOOTH_BLUE_RED: DivergingData = DivergingData {
    start: Msh { m: 80., s: 1.08, h: -1.1 },
    end: Msh { m: 80., s: 1.08, h: 0.5 },
};

pub(crate) const SMOOTH_PURPLE_ORANGE: DivergingData = DivergingData {
    start: Msh { m: 64.97539711, s: 0.899434815, h: -0.899431964 },
    end: Msh { m: 85.00850996, s: 0.949730284, h: 0.950636521 },
};

pub(crate) const SMOOTH_GREEN_PURPLE: DivergingData = DivergingData {
    start: Msh { m: 78.04105346, s: 0.885011982, h: 2.499491379 },
    end: Msh { m: 64.97539711, s: 0.899434815, h: -0.899431964 },
};

pub(crate) const SMOOTH_BLUE_TAN: DivergingData = DivergingData {
    start: Msh { m: 79.94788321, s: 0.798754784, h: -1.401313221 },
    end: Msh { m: 80.07193125, s: 0.799798811, h: 1.401089787 },
};

pub(crate) const SMOOTH_GREEN_RED: DivergingData = DivergingData {
    start: Msh { m: 78.04105346, s: 0.885011982, h: 2.499491379 },
    end: Msh { m: 76.96722122, s: 0.949483656, h: 0.499492043 },
};

// Luminance color maps

lazy_static! {
  pub(crate) static ref BLACK_BODY: LuminanceData = {
  LuminanceData {
    colors: vec![
      Lab{l: 0., a: 0., b: 0.},
      Lab{l: 39.112572747719774, a: 55.92470934659227, b: 37.65159714510402},
      Lab{l: 58.45705480680232, a: 43.34389690857626, b: 65.95409116544081},
      Lab{l: 84.13253643355525, a: -6.459770854468639, b: 82.41994470228775},
      Lab{l: 100., a: 0., b: 0.},
    ],
    scalars: vec![0., 0.39112572747719776, 0.5845705480680232,
                  0.8413253643355525, 1.],
  }
  };
}

lazy_static! {
  pub(crate) static ref EXTENDED_BLACK_BODY: LuminanceData = {
  LuminanceData {
    colors: vec![
      Lab{l: 0., a: 0., b: 0.},
      Lab{l: 21.873483862751876, a: 50.19882295659109, b: -74.66982659778306},
      Lab{l: 34.506542513775905, a: 75.41302687474061, b: -88.73807072507786},
      Lab{l: 47.02980511087303, a: 70.93217189227919, b: 33.59880053746508},
      Lab{l: 65.17482203230537, a: 49.14591409658836, b: 56.86480950937553},
      Lab{l: 84.13253643355525, a: -6.459770854468639, b: 82.41994470228775},
      Lab{l: 100., a: 0., b: 0.},
    ],
    scalars: vec![0., 0.21873483862751875, 0.34506542513775906,
                  0.4702980511087303, 0.6517482203230537,
                  0.8413253643355525, 1.],
  }
  };
}

lazy_static! {
  pub(crate) static ref KINDLMANN: LuminanceData = {
  LuminanceData {
    colors: vec![
      Lab{l: 0., a: 0., b: 0.},
      Lab{l: 10.479520542426698, a: 34.05557958902206, b: -34.21934877170809},
      Lab{l: 21.03011379005111, a: 52.30473571100955, b: -61.852601228346536},
      Lab{l: 31.03098927978494, a: 23.814976212074402, b: -57.73419358300511},
      Lab{l: 40.21480513626115, a: -24.858012706049536, b: -7.322176588219942},
      Lab{l: 52.73108089333358, a: -19.064976357731634, b: -25.558178073848147},
      Lab{l: 60.007326812392634, a: -61.75624590074585, b: 56.43522875191319},
      Lab{l: 69.81578343076002, a: -58.33353084882392, b: 68.37457857626646},
      Lab{l: 79.55703752324776, a: -22.50477758899383, b: 78.57946686200843},
      Lab{l: 89.818961593653, a: 7.586705160677109, b: 15.375961528833981},
      Lab{l: 100., a: 0., b: 0.},
    ],
    scalars: vec![0., 0.10479520542426699, 0.2103011379005111,
                  0.3103098927978494, 0.4021480513626115,
                  0.5273108089333358, 0.6000732681239264,
                  0.6981578343076003, 0.7955703752324775,
                  0.89818961593653, 1.],
  }
  };
}

lazy_static! {
  pub(crate) static ref EXTENDED_KINDLMANN: LuminanceData = {
  LuminanceData {
    colors: vec![
      Lab{l: 0., a: 0., b: 0.},
      Lab{l: 13.371291966477482, a: 40.39368469479174, b: -47.73239449160565},
      Lab{l: 25.072421338587574, a: -18.01441053740843, b: -5.313556572210176},
      Lab{l: 37.411516363056116, a: -43.058336774976055, b: 39.30203907343062},
      Lab{l: 49.75026355291354, a: -15.774050138318895, b: 53.507917567416094},
      Lab{l: 61.643756252245225, a: 52.67703578954919, b: 43.82595336046358},
      Lab{l: 74.93187540089825, a: 50.92061741619164, b: -30.235411697966242},
      Lab{l: 87.64732748562544, a: 14.355163639545697, b: -17.471161313826332},
      Lab{l: 100., a: 0., b: 0.},
    ],
    scalars: vec![0., 0.13371291966477483, 0.25072421338587575,
                  0.37411516363056113, 0.4975026355291354,
                  0.6164375625224523, 0.7493187540089825,
                  0.8764732748562544, 1.],
  }
  };
}


/// The ready-made color maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Based on the colors of black body radiation, from black through
    /// red and yellow to white.
    BlackBody,
    /// [`Preset::BlackBody`] with blue and purple hues at the lower
    /// end, similar to the default colors of gnuplot.
    ExtendedBlackBody,
    /// The rainbow color map of Kindlmann, Reinhard and Creem (VIS
    /// 2002) with a monotonic luminance.
    Kindlmann,
    /// [`Preset::Kindlmann`] looping more than 360° around the hues.
    ExtendedKindlmann,
    SmoothBlueRed,
    SmoothPurpleOrange,
    SmoothGreenPurple,
    SmoothBlueTan,
    SmoothGreenRed,
}

impl Preset {
    /// All the presets, sequential ones first.
    pub const ALL: [Preset; 9] = [
        Preset::BlackBody, Preset::ExtendedBlackBody, Preset::Kindlmann,
        Preset::ExtendedKindlmann, Preset::SmoothBlueRed,
        Preset::SmoothPurpleOrange, Preset::SmoothGreenPurple,
        Preset::SmoothBlueTan, Preset::SmoothGreenRed];

    pub fn name(&self) -> &'static str {
        use Preset::*;
        match self {
            BlackBody => "black body",
            ExtendedBlackBody => "extended black body",
            Kindlmann => "Kindlmann",
            ExtendedKindlmann => "extended Kindlmann",
            SmoothBlueRed => "smooth blue-red",
            SmoothPurpleOrange => "smooth purple-orange",
            SmoothGreenPurple => "smooth green-purple",
            SmoothBlueTan => "smooth blue-tan",
            SmoothGreenRed => "smooth green-red",
        }
    }

    /// Says whether the preset is a `Seq`uential (luminance) or
    /// `Div`ergent color map.
    pub fn typ(&self) -> PaletteType {
        use Preset::*;
        match self {
            BlackBody | ExtendedBlackBody | Kindlmann | ExtendedKindlmann =>
                PaletteType::Seq,
            _ => PaletteType::Div,
        }
    }

    /// Returns a fresh, unconfigured color map for the preset.
    pub fn color_map(&self) -> Box<dyn ColorMap + Send + Sync> {
        use Preset::*;
        match self {
            BlackBody => Box::new(Luminance::black_body()),
            ExtendedBlackBody => Box::new(Luminance::extended_black_body()),
            Kindlmann => Box::new(Luminance::kindlmann()),
            ExtendedKindlmann => Box::new(Luminance::extended_kindlmann()),
            SmoothBlueRed => Box::new(DivergingMsh::smooth_blue_red()),
            SmoothPurpleOrange => Box::new(DivergingMsh::smooth_purple_orange()),
            SmoothGreenPurple => Box::new(DivergingMsh::smooth_green_purple()),
            SmoothBlueTan => Box::new(DivergingMsh::smooth_blue_tan()),
            SmoothGreenRed => Box::new(DivergingMsh::smooth_green_red()),
        }
    }
}
