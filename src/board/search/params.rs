use crate::board::types::Color;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies below the root; 0 is treated as 1.
    pub max_depth: u32,
    /// Side the root moves for.
    pub engine_color: Color,
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            ..Self::default()
        }
    }

    pub(crate) fn effective_depth(&self) -> u32 {
        self.max_depth.max(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 3,
            engine_color: Color::Black,
        }
    }
}
