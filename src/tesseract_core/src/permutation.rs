use std::{iter, sync::OnceLock};

use itertools::Itertools;

use crate::math::cycle_period;

/// A permutation of slot indices. `mapping()[i]` is the slot that the content
/// of slot `i` moves to.
#[derive(Clone, Debug)]
pub struct Permutation {
    facelet_count: usize,
    // Whichever of these is missing is derived from the other on demand
    mapping: OnceLock<Vec<usize>>,
    cycles: OnceLock<Vec<Vec<usize>>>,
}

impl PartialEq for Permutation {
    fn eq(&self, other: &Self) -> bool {
        self.mapping() == other.mapping()
    }
}

impl Eq for Permutation {}

impl Permutation {
    pub fn identity(facelet_count: usize) -> Permutation {
        Permutation::from_mapping((0..facelet_count).collect())
    }

    /// Build a permutation from disjoint cycles. Within a cycle, the content
    /// of each slot moves to the next slot, and the last wraps to the first.
    ///
    /// # Panics
    ///
    /// Panics if a slot is out of range or appears in more than one cycle.
    pub fn from_cycles(facelet_count: usize, mut cycles: Vec<Vec<usize>>) -> Permutation {
        cycles.retain(|v| v.len() > 1);

        let mut covered = vec![false; facelet_count];
        for &facelet in cycles.iter().flatten() {
            assert!(
                facelet < facelet_count,
                "slot {facelet} is out of range for {facelet_count} slots"
            );
            assert!(!covered[facelet], "slot {facelet} appears in two cycles");
            covered[facelet] = true;
        }

        Permutation {
            facelet_count,
            mapping: OnceLock::new(),
            cycles: OnceLock::from(cycles),
        }
    }

    pub fn facelet_count(&self) -> usize {
        self.facelet_count
    }

    pub fn mapping(&self) -> &[usize] {
        self.mapping.get_or_init(|| {
            let Some(cycles) = self.cycles.get() else {
                unreachable!("a permutation always holds its mapping or its cycles");
            };

            let mut mapping = (0..self.facelet_count).collect_vec();
            for (&from, &to) in cycles
                .iter()
                .flat_map(|cycle| cycle.iter().circular_tuple_windows())
            {
                mapping[from] = to;
            }
            mapping
        })
    }

    /// The disjoint cycles of the permutation, each starting at its smallest
    /// slot. Fixed slots are left out.
    pub fn cycles(&self) -> &[Vec<usize>] {
        self.cycles.get_or_init(|| {
            let mapping = self.mapping();
            let mut seen = vec![false; self.facelet_count];

            (0..self.facelet_count)
                .filter_map(|start| {
                    if seen[start] || mapping[start] == start {
                        return None;
                    }

                    let cycle = iter::successors(Some(start), |&slot| {
                        Some(mapping[slot]).filter(|&next| next != start)
                    })
                    .collect_vec();
                    for &slot in &cycle {
                        seen[slot] = true;
                    }
                    Some(cycle)
                })
                .collect()
        })
    }

    fn from_mapping(mapping: Vec<usize>) -> Permutation {
        Permutation {
            facelet_count: mapping.len(),
            mapping: OnceLock::from(mapping),
            cycles: OnceLock::new(),
        }
    }

    /// Compose `other` after `self` in place.
    pub fn compose(&mut self, other: &Permutation) {
        assert_eq!(self.facelet_count, other.facelet_count);

        let then = other.mapping();
        let composed = self.mapping().iter().map(|&slot| then[slot]).collect();
        *self = Permutation::from_mapping(composed);
    }

    #[must_use]
    pub fn inverse(&self) -> Permutation {
        let mut inverse = vec![0; self.facelet_count];

        for (from, &to) in self.mapping().iter().enumerate() {
            inverse[to] = from;
        }

        Permutation::from_mapping(inverse)
    }

    /// The permutation applied `exponent` times.
    #[must_use]
    pub fn exponentiate(&self, exponent: usize) -> Permutation {
        let mut mapping = (0..self.facelet_count).collect::<Vec<_>>();

        for cycle in self.cycles() {
            let shift = exponent % cycle.len();
            for (i, &facelet) in cycle.iter().enumerate() {
                mapping[facelet] = cycle[(i + shift) % cycle.len()];
            }
        }

        Permutation::from_mapping(mapping)
    }

    /// The smallest positive number of applications that gives the identity.
    pub fn order(&self) -> usize {
        cycle_period(self.cycles().iter().map(Vec::len))
    }

    pub fn is_identity(&self) -> bool {
        self.mapping().iter().enumerate().all(|(i, &v)| i == v)
    }

    /// Move every value of `src` to its image in `dst`.
    ///
    /// # Panics
    ///
    /// Panics if either slice is not exactly `facelet_count` long.
    pub fn permute_into<T: Copy>(&self, src: &[T], dst: &mut [T]) {
        assert_eq!(src.len(), self.facelet_count);
        assert_eq!(dst.len(), self.facelet_count);

        for (from, &to) in self.mapping().iter().enumerate() {
            dst[to] = src[from];
        }
    }
}
