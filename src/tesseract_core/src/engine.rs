use log::{debug, trace};

use crate::{
    PuzzleError,
    moves::{MOVE_TABLE, MoveId, MoveTable},
    state::FaceletState,
};

/// Applies moves from a `MoveTable` to facelet states. Holds no state of its
/// own beyond the table.
#[derive(Clone, Copy, Debug)]
pub struct MoveEngine {
    table: &'static MoveTable,
}

impl Default for MoveEngine {
    fn default() -> Self {
        MoveEngine::new(&MOVE_TABLE)
    }
}

impl MoveEngine {
    pub fn new(table: &'static MoveTable) -> MoveEngine {
        MoveEngine { table }
    }

    pub fn table(&self) -> &'static MoveTable {
        self.table
    }

    /// Apply a move once.
    pub fn apply(&self, state: &mut FaceletState, id: MoveId) {
        trace!("Applying move {id}");
        state.permute(self.table.get(id).permutation());
    }

    /// Apply a move given by its written identifier.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnknownMove` without touching `state` if the
    /// identifier does not name a move.
    pub fn apply_named(
        &self,
        state: &mut FaceletState,
        name: &str,
    ) -> Result<MoveId, PuzzleError> {
        let id = name.parse()?;
        self.apply(state, id);
        Ok(id)
    }

    /// Undo one application of a move by applying it `order - 1` more times.
    pub fn apply_inverse(&self, state: &mut FaceletState, id: MoveId) {
        let order = self.order(id);
        debug!("Inverting move {id} by {} further applications", order - 1);

        for _ in 1..order {
            self.apply(state, id);
        }
    }

    /// How many applications of the move return to the starting state.
    pub fn order(&self, id: MoveId) -> usize {
        self.table.get(id).order()
    }

    pub fn apply_sequence(&self, state: &mut FaceletState, ids: &[MoveId]) {
        for &id in ids {
            self.apply(state, id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cell::Cell, palette::Color};

    #[test_log::test]
    fn unknown_names_leave_the_state_alone() {
        let engine = MoveEngine::default();
        let mut state = FaceletState::solved();

        assert_eq!(
            engine.apply_named(&mut state, "W"),
            Err(PuzzleError::UnknownMove("W".to_owned()))
        );
        assert_eq!(state, FaceletState::solved());

        assert_eq!(engine.apply_named(&mut state, "Z"), Ok(MoveId::Z));
        assert_ne!(state, FaceletState::solved());
    }

    #[test_log::test]
    fn z_rotation_sends_y_plus_to_w_minus() {
        let engine = MoveEngine::default();
        let mut state = FaceletState::solved();

        engine.apply(&mut state, MoveId::Z);

        assert!(state.is_uniform(Cell::WMinus));
        assert_eq!(state.color_of(Cell::WMinus, 0), Some(Color::of_cell(Cell::YPlus)));
        assert_eq!(state.color_of(Cell::YMinus, 20), Some(Color::of_cell(Cell::WMinus)));
        assert_eq!(state.color_of(Cell::WPlus, 20), Some(Color::of_cell(Cell::YMinus)));
        assert_eq!(state.color_of(Cell::YPlus, 20), Some(Color::of_cell(Cell::WPlus)));
        // X and Z cells turn in place, so they stay one color when solved
        for cell in [Cell::XMinus, Cell::XPlus, Cell::ZMinus, Cell::ZPlus] {
            assert!(state.is_uniform(cell));
            assert_eq!(state.color_of(cell, 5), Some(Color::of_cell(cell)));
        }
    }

    #[test_log::test]
    fn twist_cycles_the_vertex_centers() {
        let engine = MoveEngine::default();
        let mut state = FaceletState::solved();

        engine.apply(&mut state, MoveId::Twist0);

        assert_eq!(state.color_of(Cell::YPlus, 20), Some(Color::of_cell(Cell::XPlus)));
        assert_eq!(state.color_of(Cell::ZPlus, 20), Some(Color::of_cell(Cell::YPlus)));
        assert_eq!(state.color_of(Cell::XPlus, 20), Some(Color::of_cell(Cell::ZPlus)));
        // The poles only trade facelets among themselves
        assert!(state.is_uniform(Cell::WMinus));
        assert!(state.is_uniform(Cell::WPlus));
        assert!(!state.is_uniform(Cell::XPlus));
        assert!(state.is_uniform(Cell::XMinus));
    }

    #[test_log::test]
    fn inverse_reverses_each_move() {
        let engine = MoveEngine::default();
        let mut rng = fastrand::Rng::with_seed(0x7e55);
        let start = FaceletState::scrambled(&mut rng);

        for id in MoveId::ALL {
            let mut state = start.clone();
            engine.apply(&mut state, id);
            engine.apply_inverse(&mut state, id);
            assert_eq!(state, start, "move {id}");
        }
    }

    #[test_log::test]
    fn sequences_apply_in_order() {
        let engine = MoveEngine::default();
        let mut by_sequence = FaceletState::solved();
        let mut one_by_one = FaceletState::solved();

        engine.apply_sequence(&mut by_sequence, &[MoveId::X, MoveId::Twist2, MoveId::Y]);
        engine.apply(&mut one_by_one, MoveId::X);
        engine.apply(&mut one_by_one, MoveId::Twist2);
        engine.apply(&mut one_by_one, MoveId::Y);

        assert_eq!(by_sequence, one_by_one);
    }
}
