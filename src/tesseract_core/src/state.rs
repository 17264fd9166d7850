use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    cell::{Cell, FACELETS_PER_CELL, SLOT_COUNT, slot},
    palette::Color,
    permutation::Permutation,
};

/// The color of every facelet, indexed by slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceletState {
    colors: [Color; SLOT_COUNT],
}

impl FaceletState {
    /// Every cell filled with its own color.
    pub fn solved() -> FaceletState {
        FaceletState {
            colors: std::array::from_fn(|s| Color::PALETTE[s / FACELETS_PER_CELL]),
        }
    }

    /// Every facelet given an independent, uniformly chosen palette color.
    /// The result is generally not reachable from `solved` by legal moves.
    pub fn scrambled(rng: &mut fastrand::Rng) -> FaceletState {
        FaceletState {
            colors: std::array::from_fn(|_| {
                Color::PALETTE[rng.usize(..Color::PALETTE.len())]
            }),
        }
    }

    /// The color showing at `facelet` of `cell`, or `None` past the last
    /// facelet of a cell.
    pub fn color_of(&self, cell: Cell, facelet: usize) -> Option<Color> {
        (facelet < FACELETS_PER_CELL).then(|| self.colors[slot(cell, facelet)])
    }

    pub fn cell_colors(&self, cell: Cell) -> &[Color] {
        &self.colors[cell.slots()]
    }

    pub fn colors(&self) -> &[Color; SLOT_COUNT] {
        &self.colors
    }

    /// How many facelets show each color.
    pub fn color_counts(&self) -> HashMap<Color, usize> {
        self.colors.iter().copied().counts()
    }

    /// Whether every facelet of `cell` shows the same color.
    pub fn is_uniform(&self, cell: Cell) -> bool {
        self.cell_colors(cell).iter().all_equal()
    }

    /// Move every color along `permutation`. The next state is built aside
    /// and swapped in whole.
    pub(crate) fn permute(&mut self, permutation: &Permutation) {
        let mut next = self.colors;
        permutation.permute_into(&self.colors, &mut next);
        self.colors = next;
    }
}

impl Default for FaceletState {
    fn default() -> Self {
        FaceletState::solved()
    }
}
