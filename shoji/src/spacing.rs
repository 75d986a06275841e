use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Pixel padding inserted by the layout engine
pub struct Spacing {
    /// Gap between tiled windows (default: 20)
    pub inner_gap: i32,
    /// Gap between tiled windows and the screen edges (default: 20)
    pub outer_gap: i32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            inner_gap: 20,
            outer_gap: 20,
        }
    }
}
