use lyon::tessellation::{FillRule};

/// The minimum tolerance to use when tessellating shapes
pub const MIN_TOLERANCE: f32 = 0.0001;

/// The maximum tolerance to use when tessellating shapes
pub const MAX_TOLERANCE: f32 = 1000.0;

///
/// Rule used to decide which parts of a self-intersecting shape are filled
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WindingRule {
    /// A region is filled if the outline crosses it an odd number of times
    EvenOdd,

    /// A region is filled if the outline winds around it at all
    NonZero,
}

///
/// Options for the shape tessellator
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TessellateOptions {
    /// How self-intersecting shapes are filled
    pub winding_rule:   WindingRule,

    /// Maximum distance between the outline and the mesh (clamped between MIN_TOLERANCE and MAX_TOLERANCE)
    pub tolerance:      f32,
}

impl Default for TessellateOptions {
    fn default() -> TessellateOptions {
        TessellateOptions {
            winding_rule:   WindingRule::EvenOdd,
            tolerance:      lyon::tessellation::FillOptions::DEFAULT_TOLERANCE,
        }
    }
}

impl TessellateOptions {
    ///
    /// The tolerance to actually use
    ///
    pub fn clamped_tolerance(&self) -> f32 {
        f32::max(MIN_TOLERANCE, f32::min(MAX_TOLERANCE, self.tolerance))
    }
}

impl Into<FillRule> for WindingRule {
    fn into(self) -> FillRule {
        match self {
            WindingRule::EvenOdd    => FillRule::EvenOdd,
            WindingRule::NonZero    => FillRule::NonZero,
        }
    }
}
