use itertools::Itertools;
use log::{debug, info};

use crate::{
    PuzzleError,
    cell::Cell,
    engine::MoveEngine,
    history::HistoryStack,
    moves::MoveId,
    palette::Color,
    state::FaceletState,
};

/// Owns the puzzle state and its history, and is the only thing that mutates
/// them. Renderers borrow the state through `state` or `color_of`.
#[derive(Clone, Debug)]
pub struct PuzzleController {
    engine: MoveEngine,
    state: FaceletState,
    history: HistoryStack,
}

impl Default for PuzzleController {
    fn default() -> Self {
        PuzzleController::new()
    }
}

impl PuzzleController {
    /// Create a controller in the solved state.
    pub fn new() -> PuzzleController {
        PuzzleController::with_engine(MoveEngine::default())
    }

    pub fn with_engine(engine: MoveEngine) -> PuzzleController {
        let mut controller = PuzzleController {
            engine,
            state: FaceletState::solved(),
            history: HistoryStack::new(),
        };
        controller.reset();
        controller
    }

    /// Return every cell to its own color and forget the history.
    pub fn reset(&mut self) -> &FaceletState {
        self.state = FaceletState::solved();
        self.history.clear();
        debug!("Reset to the solved state");

        &self.state
    }

    /// Paint every facelet an independent random palette color and forget the
    /// history.
    pub fn scramble(&mut self, rng: &mut fastrand::Rng) -> &FaceletState {
        self.state = FaceletState::scrambled(rng);
        self.history.clear();
        debug!("Scrambled the puzzle");

        &self.state
    }

    pub fn scramble_with_seed(&mut self, seed: u64) -> &FaceletState {
        info!("Scrambling with seed {seed}");
        self.scramble(&mut fastrand::Rng::with_seed(seed))
    }

    /// Apply a move and record it.
    pub fn perform(&mut self, id: MoveId) {
        self.engine.apply(&mut self.state, id);
        self.history.push(id);
        debug!("Performed move {id}, {} in history", self.history.len());
    }

    /// Apply a move given by its written identifier and record it.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnknownMove` if `name` does not name a move.
    /// Nothing is applied or recorded in that case.
    pub fn perform_move(&mut self, name: &str) -> Result<MoveId, PuzzleError> {
        let id = name.trim().parse()?;
        self.perform(id);

        Ok(id)
    }

    /// Apply a whitespace-separated list of moves. Every identifier is checked
    /// before the first move is applied.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnknownMove` for the first identifier that does
    /// not name a move, without applying any of them.
    pub fn perform_sequence(&mut self, moves: &str) -> Result<Vec<MoveId>, PuzzleError> {
        let ids: Vec<MoveId> = moves
            .split_whitespace()
            .map(str::parse::<MoveId>)
            .try_collect()?;

        for &id in &ids {
            self.engine.apply(&mut self.state, id);
            self.history.push(id);
        }
        debug!("Performed sequence {}", ids.iter().join(" "));

        Ok(ids)
    }

    /// Reverse the most recent move. Returns the move that was undone, or
    /// `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<MoveId> {
        self.history.undo(&self.engine, &mut self.state)
    }

    /// Like `undo`, but reports an empty history as an error.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::EmptyHistory` if no move has been performed since
    /// the last reset or scramble.
    pub fn try_undo(&mut self) -> Result<MoveId, PuzzleError> {
        self.undo().ok_or(PuzzleError::EmptyHistory)
    }

    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    pub fn color_of(&self, cell: Cell, facelet: usize) -> Option<Color> {
        self.state.color_of(cell, facelet)
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn engine(&self) -> &MoveEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn starts_solved() {
        let controller = PuzzleController::new();

        assert_eq!(controller.state(), &FaceletState::solved());
        assert!(controller.history().is_empty());
        assert_eq!(controller.color_of(Cell::YMinus, 20), Some(Color::Green));
    }

    #[test_log::test]
    fn unknown_moves_change_nothing() {
        let mut controller = PuzzleController::new();
        controller.perform(MoveId::X);
        let before = controller.state().clone();

        assert_eq!(
            controller.perform_move("Q"),
            Err(PuzzleError::UnknownMove("Q".to_owned()))
        );
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.history().moves(), &[MoveId::X]);
    }

    #[test_log::test]
    fn sequences_are_all_or_nothing() {
        let mut controller = PuzzleController::new();

        assert_eq!(
            controller.perform_sequence("X 0 5 Y"),
            Err(PuzzleError::UnknownMove("5".to_owned()))
        );
        assert_eq!(controller.state(), &FaceletState::solved());
        assert!(controller.history().is_empty());

        let ids = controller.perform_sequence("  X 0\tY ").unwrap();
        assert_eq!(ids, vec![MoveId::X, MoveId::Twist0, MoveId::Y]);
        assert_eq!(controller.history().moves(), ids.as_slice());
    }

    #[test_log::test]
    fn reset_and_scramble_clear_history() {
        let mut controller = PuzzleController::new();
        controller.perform_sequence("X Y 1").unwrap();

        controller.scramble_with_seed(3);
        assert!(controller.history().is_empty());
        assert_eq!(controller.undo(), None);

        controller.perform_move("2").unwrap();
        controller.reset();
        assert!(controller.history().is_empty());
        assert_eq!(controller.state(), &FaceletState::solved());
    }

    #[test_log::test]
    fn try_undo_reports_empty_history() {
        let mut controller = PuzzleController::new();

        assert_eq!(controller.try_undo(), Err(PuzzleError::EmptyHistory));
        controller.perform(MoveId::Twist1);
        assert_eq!(controller.try_undo(), Ok(MoveId::Twist1));
        assert_eq!(controller.state(), &FaceletState::solved());
    }
}
