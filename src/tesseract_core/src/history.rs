use log::debug;

use crate::{engine::MoveEngine, moves::MoveId, state::FaceletState};

/// The moves applied since the last reset, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryStack {
    moves: Vec<MoveId>,
}

impl HistoryStack {
    pub fn new() -> HistoryStack {
        HistoryStack::default()
    }

    pub fn push(&mut self, id: MoveId) {
        self.moves.push(id);
    }

    pub fn pop_last(&mut self) -> Option<MoveId> {
        self.moves.pop()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn moves(&self) -> &[MoveId] {
        &self.moves
    }

    /// Pop the most recent move and apply its inverse to `state`. Does nothing
    /// and returns `None` if the history is empty.
    pub fn undo(&mut self, engine: &MoveEngine, state: &mut FaceletState) -> Option<MoveId> {
        let Some(id) = self.pop_last() else {
            debug!("Nothing to undo");
            return None;
        };

        engine.apply_inverse(state, id);
        debug!("Undid move {id}, {} left in history", self.moves.len());

        Some(id)
    }
}
