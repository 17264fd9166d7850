use std::{fmt, str::FromStr, sync::LazyLock};

use log::trace;

use crate::{PuzzleError, cell::SLOT_COUNT, permutation::Permutation, tables};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveFamily {
    /// Turns the whole puzzle a quarter turn; order 4.
    Rotation,
    /// Turns one vertex a third of a turn; order 3.
    Twist,
}

impl MoveFamily {
    pub fn declared_order(self) -> usize {
        match self {
            MoveFamily::Rotation => 4,
            MoveFamily::Twist => 3,
        }
    }
}

pub const MOVE_COUNT: usize = 7;

/// The identifier of a move, written `X`, `Y`, `Z` for rotations and `0`
/// through `3` for twists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveId {
    X,
    Y,
    Z,
    Twist0,
    Twist1,
    Twist2,
    Twist3,
}

impl MoveId {
    pub const ALL: [Self; MOVE_COUNT] = {
        use MoveId::*;
        let v = [X, Y, Z, Twist0, Twist1, Twist2, Twist3];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn name(self) -> &'static str {
        match self {
            MoveId::X => "X",
            MoveId::Y => "Y",
            MoveId::Z => "Z",
            MoveId::Twist0 => "0",
            MoveId::Twist1 => "1",
            MoveId::Twist2 => "2",
            MoveId::Twist3 => "3",
        }
    }

    pub fn family(self) -> MoveFamily {
        match self {
            MoveId::X | MoveId::Y | MoveId::Z => MoveFamily::Rotation,
            MoveId::Twist0 | MoveId::Twist1 | MoveId::Twist2 | MoveId::Twist3 => {
                MoveFamily::Twist
            }
        }
    }

    fn cycles(self) -> &'static [&'static [usize]] {
        match self {
            MoveId::X => tables::ROTATE_X,
            MoveId::Y => tables::ROTATE_Y,
            MoveId::Z => tables::ROTATE_Z,
            MoveId::Twist0 => tables::TWIST_0,
            MoveId::Twist1 => tables::TWIST_1,
            MoveId::Twist2 => tables::TWIST_2,
            MoveId::Twist3 => tables::TWIST_3,
        }
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoveId {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(MoveId::X),
            "Y" => Ok(MoveId::Y),
            "Z" => Ok(MoveId::Z),
            "0" => Ok(MoveId::Twist0),
            "1" => Ok(MoveId::Twist1),
            "2" => Ok(MoveId::Twist2),
            "3" => Ok(MoveId::Twist3),
            _ => Err(PuzzleError::UnknownMove(s.to_owned())),
        }
    }
}

/// A named permutation of the 168 slots.
#[derive(Debug, Clone)]
pub struct Move {
    id: MoveId,
    permutation: Permutation,
    order: usize,
}

impl Move {
    fn new(id: MoveId) -> Move {
        let cycles = id.cycles().iter().map(|cycle| cycle.to_vec()).collect();
        let permutation = Permutation::from_cycles(SLOT_COUNT, cycles);
        let order = permutation.order();

        assert_eq!(
            order,
            id.family().declared_order(),
            "move {id} has the wrong order"
        );
        trace!(
            "Built move {id}: cycles={} order={order}",
            permutation.cycles().len()
        );

        Move {
            id,
            permutation,
            order,
        }
    }

    pub fn id(&self) -> MoveId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn family(&self) -> MoveFamily {
        self.id.family()
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// The number of applications that return to the starting state.
    pub fn order(&self) -> usize {
        self.order
    }
}

/// Every move of the puzzle, indexed by `MoveId`.
#[derive(Debug)]
pub struct MoveTable {
    moves: [Move; MOVE_COUNT],
}

impl MoveTable {
    fn build() -> MoveTable {
        MoveTable {
            moves: MoveId::ALL.map(Move::new),
        }
    }

    pub fn get(&self, id: MoveId) -> &Move {
        &self.moves[id as usize]
    }

    /// Look up a move by its written identifier.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnknownMove` if no move has that identifier.
    pub fn find(&self, name: &str) -> Result<&Move, PuzzleError> {
        Ok(self.get(name.parse()?))
    }

    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

pub static MOVE_TABLE: LazyLock<MoveTable> = LazyLock::new(MoveTable::build);

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, mem};

    use itertools::Itertools;

    use super::*;
    use crate::cell::{CENTER_FACELET, Cell, FACELETS_PER_CELL, FaceletClass, slot, split_slot};

    fn moved_cells(id: MoveId) -> HashSet<Cell> {
        MOVE_TABLE
            .get(id)
            .permutation()
            .cycles()
            .iter()
            .flatten()
            .map(|&s| split_slot(s).unwrap().0)
            .collect()
    }

    #[test_log::test]
    fn names_parse_back() {
        for id in MoveId::ALL {
            assert_eq!(id.name().parse::<MoveId>(), Ok(id));
            assert_eq!(MOVE_TABLE.find(id.name()).unwrap().id(), id);
        }
        assert_eq!(
            "4".parse::<MoveId>(),
            Err(PuzzleError::UnknownMove("4".to_owned()))
        );
        assert!(MOVE_TABLE.find("x").is_err());
        assert!(MOVE_TABLE.find("").is_err());
    }

    #[test_log::test]
    fn orders_match_families() {
        for id in MoveId::ALL {
            let move_ = MOVE_TABLE.get(id);
            assert_eq!(move_.order(), id.family().declared_order());
            assert!(move_.permutation().exponentiate(move_.order()).is_identity());
            for k in 1..move_.order() {
                assert!(!move_.permutation().exponentiate(k).is_identity());
            }
        }
    }

    #[test_log::test]
    fn rotations_cycle_whole_blocks() {
        let blocks = [
            (MoveId::X, [Cell::ZPlus, Cell::WMinus, Cell::ZMinus, Cell::WPlus]),
            (MoveId::Y, [Cell::XPlus, Cell::WMinus, Cell::XMinus, Cell::WPlus]),
            (MoveId::Z, [Cell::YPlus, Cell::WMinus, Cell::YMinus, Cell::WPlus]),
        ];

        for (id, cycle) in blocks {
            let mapping = MOVE_TABLE.get(id).permutation().mapping();

            for (from, to) in cycle.iter().circular_tuple_windows() {
                for facelet in 0..FACELETS_PER_CELL {
                    assert_eq!(mapping[slot(*from, facelet)], slot(*to, facelet));
                }
            }

            for cell in Cell::ALL.into_iter().filter(|cell| !cycle.contains(cell)) {
                // Cells that stay put only turn in place, and never their center
                let center = slot(cell, CENTER_FACELET);
                assert_eq!(mapping[center], center);
                for s in cell.slots() {
                    assert_eq!(split_slot(mapping[s]).unwrap().0, cell);
                }
            }

            assert_eq!(moved_cells(id).len(), 8);
        }
    }

    #[test_log::test]
    fn moves_keep_facelet_classes() {
        let class_of = |s: usize| FaceletClass::of(split_slot(s).unwrap().1).unwrap();

        for move_ in MOVE_TABLE.moves() {
            for (from, &to) in move_.permutation().mapping().iter().enumerate() {
                let (from, to) = (class_of(from), class_of(to));
                match move_.family() {
                    // Rotations keep every facelet in its own group
                    MoveFamily::Rotation => assert_eq!(from, to, "{}", move_.name()),
                    MoveFamily::Twist => {
                        assert_eq!(mem::discriminant(&from), mem::discriminant(&to));
                    }
                }
            }
        }
    }

    #[test_log::test]
    fn twists_touch_one_vertex() {
        for id in MoveId::ALL
            .into_iter()
            .filter(|id| id.family() == MoveFamily::Twist)
        {
            let permutation = MOVE_TABLE.get(id).permutation();
            let cycles = permutation.cycles();
            assert_eq!(cycles.len(), 15);
            assert!(cycles.iter().all(|cycle| cycle.len() == 3));

            let cells = moved_cells(id);
            assert_eq!(cells.len(), 5);
            assert!(cells.contains(&Cell::WMinus));
            assert!(cells.contains(&Cell::WPlus));
            // One cell from each side pair
            for axis in [Cell::XMinus, Cell::YMinus, Cell::ZMinus] {
                assert!(cells.contains(&axis) ^ cells.contains(&axis.antipode()));
            }

            let pole_slots = cycles
                .iter()
                .flatten()
                .filter(|&&s| split_slot(s).unwrap().0.is_pole())
                .count();
            assert_eq!(pole_slots, 6);
        }
    }

    #[test_log::test]
    fn twists_are_distinct() {
        let twists = MoveId::ALL
            .into_iter()
            .filter(|id| id.family() == MoveFamily::Twist)
            .map(|id| MOVE_TABLE.get(id).permutation().mapping().to_vec())
            .collect_vec();

        assert!(twists.iter().all_unique());
    }
}
