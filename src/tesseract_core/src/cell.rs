use std::{fmt, str::FromStr};

use thiserror::Error;

pub const CELL_COUNT: usize = 8;
pub const FACELETS_PER_CELL: usize = 21;
pub const SLOT_COUNT: usize = CELL_COUNT * FACELETS_PER_CELL;
pub const CENTER_FACELET: usize = 20;

/// One of the eight cells of the puzzle, in slot order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    XMinus,
    XPlus,
    YMinus,
    YPlus,
    ZMinus,
    ZPlus,
    WMinus,
    WPlus,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown cell `{0}`, expected one of X-, X+, Y-, Y+, Z-, Z+, W-, W+")]
pub struct UnknownCell(pub String);

impl Cell {
    pub const ALL: [Self; CELL_COUNT] = {
        use Cell::*;
        let v = [XMinus, XPlus, YMinus, YPlus, ZMinus, ZPlus, WMinus, WPlus];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Cell> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Cell::XMinus => "X-",
            Cell::XPlus => "X+",
            Cell::YMinus => "Y-",
            Cell::YPlus => "Y+",
            Cell::ZMinus => "Z-",
            Cell::ZPlus => "Z+",
            Cell::WMinus => "W-",
            Cell::WPlus => "W+",
        }
    }

    /// W− and W+ are the poles; every twist turns part of both.
    pub fn is_pole(self) -> bool {
        matches!(self, Cell::WMinus | Cell::WPlus)
    }

    pub fn is_plus(self) -> bool {
        self as usize % 2 == 1
    }

    /// The cell on the opposite side of the same axis.
    pub fn antipode(self) -> Cell {
        Self::ALL[self as usize ^ 1]
    }

    /// The slots owned by this cell, in facelet order.
    pub fn slots(self) -> std::ops::Range<usize> {
        let start = self as usize * FACELETS_PER_CELL;
        start..start + FACELETS_PER_CELL
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cell {
    type Err = UnknownCell;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Cell::ALL
            .into_iter()
            .find(|cell| cell.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCell(s.to_owned()))
    }
}

/// The slot index of a facelet. Usable in constant tables.
pub const fn slot(cell: Cell, facelet: usize) -> usize {
    assert!(facelet < FACELETS_PER_CELL);
    cell as usize * FACELETS_PER_CELL + facelet
}

/// Split a slot index back into its cell and facelet.
pub fn split_slot(slot: usize) -> Option<(Cell, usize)> {
    let cell = Cell::from_index(slot / FACELETS_PER_CELL)?;
    Some((cell, slot % FACELETS_PER_CELL))
}

/// The kind of position a facelet occupies within its cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceletClass {
    /// Facelets 0–11, in groups 0–3, 4–7 and 8–11.
    Edge { group: usize },
    /// Facelets 12–19, in groups 12–15 and 16–19.
    Corner { group: usize },
    Center,
}

impl FaceletClass {
    pub fn of(facelet: usize) -> Option<FaceletClass> {
        match facelet {
            0..=11 => Some(FaceletClass::Edge { group: facelet / 4 }),
            12..=19 => Some(FaceletClass::Corner {
                group: (facelet - 12) / 4,
            }),
            CENTER_FACELET => Some(FaceletClass::Center),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for cell in Cell::ALL {
            assert_eq!(cell.label().parse::<Cell>(), Ok(cell));
        }
        assert_eq!(" w+ ".parse::<Cell>(), Ok(Cell::WPlus));
        assert_eq!("V+".parse::<Cell>(), Err(UnknownCell("V+".to_owned())));
    }

    #[test]
    fn antipodes_pair_up() {
        for cell in Cell::ALL {
            assert_ne!(cell, cell.antipode());
            assert_eq!(cell.antipode().antipode(), cell);
            assert_eq!(&cell.label()[..1], &cell.antipode().label()[..1]);
            assert_ne!(cell.is_plus(), cell.antipode().is_plus());
        }
        assert_eq!(Cell::ALL.iter().filter(|cell| cell.is_pole()).count(), 2);
    }

    #[test]
    fn slots_split() {
        assert_eq!(slot(Cell::XMinus, 0), 0);
        assert_eq!(slot(Cell::WPlus, CENTER_FACELET), SLOT_COUNT - 1);
        for cell in Cell::ALL {
            for s in cell.slots() {
                let (back, facelet) = split_slot(s).unwrap();
                assert_eq!(back, cell);
                assert_eq!(slot(cell, facelet), s);
            }
        }
        assert_eq!(split_slot(SLOT_COUNT), None);
    }

    #[test]
    fn facelet_classes() {
        let edges = (0..FACELETS_PER_CELL)
            .filter(|&f| matches!(FaceletClass::of(f), Some(FaceletClass::Edge { .. })))
            .count();
        let corners = (0..FACELETS_PER_CELL)
            .filter(|&f| matches!(FaceletClass::of(f), Some(FaceletClass::Corner { .. })))
            .count();

        assert_eq!(edges, 12);
        assert_eq!(corners, 8);
        assert_eq!(FaceletClass::of(7), Some(FaceletClass::Edge { group: 1 }));
        assert_eq!(FaceletClass::of(16), Some(FaceletClass::Corner { group: 1 }));
        assert_eq!(FaceletClass::of(20), Some(FaceletClass::Center));
        assert_eq!(FaceletClass::of(21), None);
    }
}
