//! Terminal viewport dimensions.

use derive_new::new;
use ratatui::layout::Rect;

/// Width and height of the drawable terminal area, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, new)]
pub struct Viewport {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl Viewport {
    /// The viewport as a rect anchored at the origin.
    pub fn area(self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}
