use std::fmt;

use crate::cell::{CELL_COUNT, Cell};

/// A sticker color. Each cell owns one color at rest; `Neutral` is reserved
/// for renderers that need to blank out a hidden or diagnostic cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Orange,
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Pink,
    Coffee,
    Neutral,
}

impl Color {
    /// The colors of the cells at rest, in cell order.
    pub const PALETTE: [Self; CELL_COUNT] = {
        use Color::*;
        [Orange, Red, Green, Blue, Yellow, White, Pink, Coffee]
    };

    pub fn of_cell(cell: Cell) -> Color {
        Self::PALETTE[cell.index()]
    }

    /// Which cell owns this color when the puzzle is solved.
    pub fn home_cell(self) -> Option<Cell> {
        Self::PALETTE
            .iter()
            .position(|&color| color == self)
            .and_then(Cell::from_index)
    }

    /// A stable lowercase name, used as the key for texture lookups.
    pub fn name(self) -> &'static str {
        match self {
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::Pink => "pink",
            Color::Coffee => "coffee",
            Color::Neutral => "nil",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn palette_is_distinct_and_excludes_neutral() {
        assert!(Color::PALETTE.iter().all_unique());
        assert!(!Color::PALETTE.contains(&Color::Neutral));
    }

    #[test]
    fn home_cells() {
        for cell in Cell::ALL {
            assert_eq!(Color::of_cell(cell).home_cell(), Some(cell));
        }
        assert_eq!(Color::Neutral.home_cell(), None);
        assert_eq!(Color::of_cell(Cell::XMinus), Color::Orange);
        assert_eq!(Color::of_cell(Cell::WPlus).name(), "coffee");
    }
}
