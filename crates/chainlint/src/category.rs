//! Canonical modifier categories
//!
//! The ordering convention is encoded directly in the declaration order of
//! [`Category`]: a well-ordered chain establishes layout constraints first,
//! then draws from the outside in (shadow, clip, background, border), then
//! pads, then wires up behavior, and attaches semantics last. Comparing two
//! categories with `Ord` compares their canonical positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical position of a modifier within a chain.
///
/// # Example
///
/// ```
/// use chainlint::Category;
///
/// assert!(Category::Layout < Category::Background);
/// assert!(Category::Padding < Category::Interaction);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Size and layout constraints: `size`, `fill_max_width`, `weight`
    Layout,

    /// Placement relative to the parent: `offset`, `align`, `z_index`
    Position,

    /// Geometric and visual transforms: `scale`, `rotate`, `alpha`
    Transform,

    /// Drop shadows, drawn outside the clip shape: `shadow`
    Shadow,

    /// Shape clipping: `clip`, `clip_to_bounds`
    Clip,

    /// Background fills, drawn inside the clip: `background`
    Background,

    /// Border strokes, drawn over the background: `border`
    Border,

    /// Inner spacing between the border and the content: `padding`
    Padding,

    /// Input handling: `clickable`, `scrollable`, `pointer_input`
    Interaction,

    /// Accessibility and test metadata: `semantics`, `test_tag`
    Semantics,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 10] = [
        Category::Layout,
        Category::Position,
        Category::Transform,
        Category::Shadow,
        Category::Clip,
        Category::Background,
        Category::Border,
        Category::Padding,
        Category::Interaction,
        Category::Semantics,
    ];

    /// Human-readable name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Position => "position",
            Category::Transform => "transform",
            Category::Shadow => "shadow",
            Category::Clip => "clip",
            Category::Background => "background",
            Category::Border => "border",
            Category::Padding => "padding",
            Category::Interaction => "interaction",
            Category::Semantics => "semantics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
