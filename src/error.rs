//! Color map errors.

use thiserror::Error;

use crate::convert::Srgba;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A control color is not strictly lighter than its predecessor.
    #[error("luminance of color {index} ({l}) is not greater than that of \
             the previous color ({prev})")]
    NonMonotonicLuminance { index: usize, l: f64, prev: f64 },
    /// A luminance color map was given no control color.
    #[error("a luminance color map needs at least one control color")]
    NoControlColors,
    /// The convergence point of a diverging map is not in (0, 1).
    #[error("convergence point {0} is not in (0, 1)")]
    ConvergePoint(f64),
    /// The scalar domain is empty: `min == max` for a diverging map,
    /// `max == 0` for a luminance map.
    #[error("degenerate scalar domain [{min}, {max}]")]
    DegenerateDomain { min: f64, max: f64 },
    /// The normalized scalar of a luminance map is not in \[0, 1\].
    #[error("interpolation value ({value}) out of range [0, {max}]")]
    OutOfRange { value: f64, max: f64 },
    /// The computed color has a channel outside \[0, 1\].  The color is
    /// still available to callers who want it anyway.
    #[error("color out of gamut: {color}")]
    OutOfGamut { color: Srgba },
}

pub type Result<T> = std::result::Result<T, Error>;
