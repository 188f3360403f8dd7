//! Fixed slice colors and legend styling for pie output.

use serde::{Deserialize, Serialize};

/// Slice colors, cycled by position.
pub const PALETTE: [&str; 6] = [
    "#6366f1", "#ef4444", "#f59e0b", "#10b981", "#8b5cf6", "#ec4899",
];

/// Palette slot for the slice at `index`. Cycles, never clamps.
pub fn color_index(index: usize) -> usize {
    index % PALETTE.len()
}

pub fn color_for(index: usize) -> &'static str {
    PALETTE[color_index(index)]
}

/// Legend text styling attached to every slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegendStyle {
    pub font_color: String,
    pub font_size: u32,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            font_color: "#fff".to_string(),
            font_size: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_position() {
        assert_eq!(color_index(0), 0);
        assert_eq!(color_index(5), 5);
        assert_eq!(color_index(6), 0);
        assert_eq!(color_index(13), 1);
        assert_eq!(color_for(7), "#ef4444");
    }

    #[test]
    fn legend_defaults() {
        let legend = LegendStyle::default();
        assert_eq!(legend.font_color, "#fff");
        assert_eq!(legend.font_size, 14);
    }
}
