use crate::convert::{Lab, Msh};

/// End points of a diverging color map.
pub(crate) struct DivergingData {
    pub(crate) start: Msh,
    pub(crate) end: Msh,
}

/// Control colors of a luminance color map.
pub(crate) struct LuminanceData {
    pub(crate) colors: Vec<Lab>, // Invariant: strictly increasing `l`
    pub(crate) scalars: Vec<f64>, // Invariant: same length, 0. ..= 1.
}

/// Type of color map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  The lightness grows linearly with the data
    /// value, from dark colors for low values to light colors for
    /// high values.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data range.
    /// The critical value in the middle is an achromatic light gray
    /// and low and high extremes are emphasized with saturated colors
    /// that have contrasting hues.
    Div,
}
