//! Cycle lists for every move, as slot indices.
//!
//! Rotations move four cells as whole blocks and turn the remaining four in
//! place. Twists turn the corner shared by one cell of each side pair, along
//! with a matching part of both poles.

use crate::cell::{Cell::*, slot};

pub(crate) static ROTATE_X: &[&[usize]] = &[
    // Z+ -> W- -> Z- -> W+
    &[slot(ZPlus, 0), slot(WMinus, 0), slot(ZMinus, 0), slot(WPlus, 0)],
    &[slot(ZPlus, 1), slot(WMinus, 1), slot(ZMinus, 1), slot(WPlus, 1)],
    &[slot(ZPlus, 2), slot(WMinus, 2), slot(ZMinus, 2), slot(WPlus, 2)],
    &[slot(ZPlus, 3), slot(WMinus, 3), slot(ZMinus, 3), slot(WPlus, 3)],
    &[slot(ZPlus, 4), slot(WMinus, 4), slot(ZMinus, 4), slot(WPlus, 4)],
    &[slot(ZPlus, 5), slot(WMinus, 5), slot(ZMinus, 5), slot(WPlus, 5)],
    &[slot(ZPlus, 6), slot(WMinus, 6), slot(ZMinus, 6), slot(WPlus, 6)],
    &[slot(ZPlus, 7), slot(WMinus, 7), slot(ZMinus, 7), slot(WPlus, 7)],
    &[slot(ZPlus, 8), slot(WMinus, 8), slot(ZMinus, 8), slot(WPlus, 8)],
    &[slot(ZPlus, 9), slot(WMinus, 9), slot(ZMinus, 9), slot(WPlus, 9)],
    &[slot(ZPlus, 10), slot(WMinus, 10), slot(ZMinus, 10), slot(WPlus, 10)],
    &[slot(ZPlus, 11), slot(WMinus, 11), slot(ZMinus, 11), slot(WPlus, 11)],
    &[slot(ZPlus, 12), slot(WMinus, 12), slot(ZMinus, 12), slot(WPlus, 12)],
    &[slot(ZPlus, 13), slot(WMinus, 13), slot(ZMinus, 13), slot(WPlus, 13)],
    &[slot(ZPlus, 14), slot(WMinus, 14), slot(ZMinus, 14), slot(WPlus, 14)],
    &[slot(ZPlus, 15), slot(WMinus, 15), slot(ZMinus, 15), slot(WPlus, 15)],
    &[slot(ZPlus, 16), slot(WMinus, 16), slot(ZMinus, 16), slot(WPlus, 16)],
    &[slot(ZPlus, 17), slot(WMinus, 17), slot(ZMinus, 17), slot(WPlus, 17)],
    &[slot(ZPlus, 18), slot(WMinus, 18), slot(ZMinus, 18), slot(WPlus, 18)],
    &[slot(ZPlus, 19), slot(WMinus, 19), slot(ZMinus, 19), slot(WPlus, 19)],
    &[slot(ZPlus, 20), slot(WMinus, 20), slot(ZMinus, 20), slot(WPlus, 20)],
    // X-
    &[slot(XMinus, 3), slot(XMinus, 2), slot(XMinus, 1), slot(XMinus, 0)],
    &[slot(XMinus, 7), slot(XMinus, 6), slot(XMinus, 5), slot(XMinus, 4)],
    &[slot(XMinus, 11), slot(XMinus, 10), slot(XMinus, 9), slot(XMinus, 8)],
    &[slot(XMinus, 15), slot(XMinus, 14), slot(XMinus, 13), slot(XMinus, 12)],
    &[slot(XMinus, 16), slot(XMinus, 17), slot(XMinus, 18), slot(XMinus, 19)],
    // X+
    &[slot(XPlus, 0), slot(XPlus, 1), slot(XPlus, 2), slot(XPlus, 3)],
    &[slot(XPlus, 4), slot(XPlus, 5), slot(XPlus, 6), slot(XPlus, 7)],
    &[slot(XPlus, 8), slot(XPlus, 9), slot(XPlus, 10), slot(XPlus, 11)],
    &[slot(XPlus, 12), slot(XPlus, 13), slot(XPlus, 14), slot(XPlus, 15)],
    &[slot(XPlus, 19), slot(XPlus, 18), slot(XPlus, 17), slot(XPlus, 16)],
    // Y-
    &[slot(YMinus, 3), slot(YMinus, 2), slot(YMinus, 1), slot(YMinus, 0)],
    &[slot(YMinus, 7), slot(YMinus, 6), slot(YMinus, 5), slot(YMinus, 4)],
    &[slot(YMinus, 11), slot(YMinus, 10), slot(YMinus, 9), slot(YMinus, 8)],
    &[slot(YMinus, 15), slot(YMinus, 14), slot(YMinus, 13), slot(YMinus, 12)],
    &[slot(YMinus, 16), slot(YMinus, 17), slot(YMinus, 18), slot(YMinus, 19)],
    // Y+
    &[slot(YPlus, 0), slot(YPlus, 1), slot(YPlus, 2), slot(YPlus, 3)],
    &[slot(YPlus, 4), slot(YPlus, 5), slot(YPlus, 6), slot(YPlus, 7)],
    &[slot(YPlus, 8), slot(YPlus, 9), slot(YPlus, 10), slot(YPlus, 11)],
    &[slot(YPlus, 12), slot(YPlus, 13), slot(YPlus, 14), slot(YPlus, 15)],
    &[slot(YPlus, 19), slot(YPlus, 18), slot(YPlus, 17), slot(YPlus, 16)],
];

pub(crate) static ROTATE_Y: &[&[usize]] = &[
    // X+ -> W- -> X- -> W+
    &[slot(XPlus, 0), slot(WMinus, 0), slot(XMinus, 0), slot(WPlus, 0)],
    &[slot(XPlus, 1), slot(WMinus, 1), slot(XMinus, 1), slot(WPlus, 1)],
    &[slot(XPlus, 2), slot(WMinus, 2), slot(XMinus, 2), slot(WPlus, 2)],
    &[slot(XPlus, 3), slot(WMinus, 3), slot(XMinus, 3), slot(WPlus, 3)],
    &[slot(XPlus, 4), slot(WMinus, 4), slot(XMinus, 4), slot(WPlus, 4)],
    &[slot(XPlus, 5), slot(WMinus, 5), slot(XMinus, 5), slot(WPlus, 5)],
    &[slot(XPlus, 6), slot(WMinus, 6), slot(XMinus, 6), slot(WPlus, 6)],
    &[slot(XPlus, 7), slot(WMinus, 7), slot(XMinus, 7), slot(WPlus, 7)],
    &[slot(XPlus, 8), slot(WMinus, 8), slot(XMinus, 8), slot(WPlus, 8)],
    &[slot(XPlus, 9), slot(WMinus, 9), slot(XMinus, 9), slot(WPlus, 9)],
    &[slot(XPlus, 10), slot(WMinus, 10), slot(XMinus, 10), slot(WPlus, 10)],
    &[slot(XPlus, 11), slot(WMinus, 11), slot(XMinus, 11), slot(WPlus, 11)],
    &[slot(XPlus, 12), slot(WMinus, 12), slot(XMinus, 12), slot(WPlus, 12)],
    &[slot(XPlus, 13), slot(WMinus, 13), slot(XMinus, 13), slot(WPlus, 13)],
    &[slot(XPlus, 14), slot(WMinus, 14), slot(XMinus, 14), slot(WPlus, 14)],
    &[slot(XPlus, 15), slot(WMinus, 15), slot(XMinus, 15), slot(WPlus, 15)],
    &[slot(XPlus, 16), slot(WMinus, 16), slot(XMinus, 16), slot(WPlus, 16)],
    &[slot(XPlus, 17), slot(WMinus, 17), slot(XMinus, 17), slot(WPlus, 17)],
    &[slot(XPlus, 18), slot(WMinus, 18), slot(XMinus, 18), slot(WPlus, 18)],
    &[slot(XPlus, 19), slot(WMinus, 19), slot(XMinus, 19), slot(WPlus, 19)],
    &[slot(XPlus, 20), slot(WMinus, 20), slot(XMinus, 20), slot(WPlus, 20)],
    // Y-
    &[slot(YMinus, 3), slot(YMinus, 2), slot(YMinus, 1), slot(YMinus, 0)],
    &[slot(YMinus, 7), slot(YMinus, 6), slot(YMinus, 5), slot(YMinus, 4)],
    &[slot(YMinus, 11), slot(YMinus, 10), slot(YMinus, 9), slot(YMinus, 8)],
    &[slot(YMinus, 15), slot(YMinus, 14), slot(YMinus, 13), slot(YMinus, 12)],
    &[slot(YMinus, 16), slot(YMinus, 17), slot(YMinus, 18), slot(YMinus, 19)],
    // Y+
    &[slot(YPlus, 0), slot(YPlus, 1), slot(YPlus, 2), slot(YPlus, 3)],
    &[slot(YPlus, 4), slot(YPlus, 5), slot(YPlus, 6), slot(YPlus, 7)],
    &[slot(YPlus, 8), slot(YPlus, 9), slot(YPlus, 10), slot(YPlus, 11)],
    &[slot(YPlus, 12), slot(YPlus, 13), slot(YPlus, 14), slot(YPlus, 15)],
    &[slot(YPlus, 19), slot(YPlus, 18), slot(YPlus, 17), slot(YPlus, 16)],
    // Z-
    &[slot(ZMinus, 3), slot(ZMinus, 2), slot(ZMinus, 1), slot(ZMinus, 0)],
    &[slot(ZMinus, 7), slot(ZMinus, 6), slot(ZMinus, 5), slot(ZMinus, 4)],
    &[slot(ZMinus, 11), slot(ZMinus, 10), slot(ZMinus, 9), slot(ZMinus, 8)],
    &[slot(ZMinus, 15), slot(ZMinus, 14), slot(ZMinus, 13), slot(ZMinus, 12)],
    &[slot(ZMinus, 16), slot(ZMinus, 17), slot(ZMinus, 18), slot(ZMinus, 19)],
    // Z+
    &[slot(ZPlus, 0), slot(ZPlus, 1), slot(ZPlus, 2), slot(ZPlus, 3)],
    &[slot(ZPlus, 4), slot(ZPlus, 5), slot(ZPlus, 6), slot(ZPlus, 7)],
    &[slot(ZPlus, 8), slot(ZPlus, 9), slot(ZPlus, 10), slot(ZPlus, 11)],
    &[slot(ZPlus, 12), slot(ZPlus, 13), slot(ZPlus, 14), slot(ZPlus, 15)],
    &[slot(ZPlus, 19), slot(ZPlus, 18), slot(ZPlus, 17), slot(ZPlus, 16)],
];

pub(crate) static ROTATE_Z: &[&[usize]] = &[
    // Y+ -> W- -> Y- -> W+
    &[slot(YPlus, 0), slot(WMinus, 0), slot(YMinus, 0), slot(WPlus, 0)],
    &[slot(YPlus, 1), slot(WMinus, 1), slot(YMinus, 1), slot(WPlus, 1)],
    &[slot(YPlus, 2), slot(WMinus, 2), slot(YMinus, 2), slot(WPlus, 2)],
    &[slot(YPlus, 3), slot(WMinus, 3), slot(YMinus, 3), slot(WPlus, 3)],
    &[slot(YPlus, 4), slot(WMinus, 4), slot(YMinus, 4), slot(WPlus, 4)],
    &[slot(YPlus, 5), slot(WMinus, 5), slot(YMinus, 5), slot(WPlus, 5)],
    &[slot(YPlus, 6), slot(WMinus, 6), slot(YMinus, 6), slot(WPlus, 6)],
    &[slot(YPlus, 7), slot(WMinus, 7), slot(YMinus, 7), slot(WPlus, 7)],
    &[slot(YPlus, 8), slot(WMinus, 8), slot(YMinus, 8), slot(WPlus, 8)],
    &[slot(YPlus, 9), slot(WMinus, 9), slot(YMinus, 9), slot(WPlus, 9)],
    &[slot(YPlus, 10), slot(WMinus, 10), slot(YMinus, 10), slot(WPlus, 10)],
    &[slot(YPlus, 11), slot(WMinus, 11), slot(YMinus, 11), slot(WPlus, 11)],
    &[slot(YPlus, 12), slot(WMinus, 12), slot(YMinus, 12), slot(WPlus, 12)],
    &[slot(YPlus, 13), slot(WMinus, 13), slot(YMinus, 13), slot(WPlus, 13)],
    &[slot(YPlus, 14), slot(WMinus, 14), slot(YMinus, 14), slot(WPlus, 14)],
    &[slot(YPlus, 15), slot(WMinus, 15), slot(YMinus, 15), slot(WPlus, 15)],
    &[slot(YPlus, 16), slot(WMinus, 16), slot(YMinus, 16), slot(WPlus, 16)],
    &[slot(YPlus, 17), slot(WMinus, 17), slot(YMinus, 17), slot(WPlus, 17)],
    &[slot(YPlus, 18), slot(WMinus, 18), slot(YMinus, 18), slot(WPlus, 18)],
    &[slot(YPlus, 19), slot(WMinus, 19), slot(YMinus, 19), slot(WPlus, 19)],
    &[slot(YPlus, 20), slot(WMinus, 20), slot(YMinus, 20), slot(WPlus, 20)],
    // X-
    &[slot(XMinus, 3), slot(XMinus, 2), slot(XMinus, 1), slot(XMinus, 0)],
    &[slot(XMinus, 7), slot(XMinus, 6), slot(XMinus, 5), slot(XMinus, 4)],
    &[slot(XMinus, 11), slot(XMinus, 10), slot(XMinus, 9), slot(XMinus, 8)],
    &[slot(XMinus, 15), slot(XMinus, 14), slot(XMinus, 13), slot(XMinus, 12)],
    &[slot(XMinus, 16), slot(XMinus, 17), slot(XMinus, 18), slot(XMinus, 19)],
    // X+
    &[slot(XPlus, 0), slot(XPlus, 1), slot(XPlus, 2), slot(XPlus, 3)],
    &[slot(XPlus, 4), slot(XPlus, 5), slot(XPlus, 6), slot(XPlus, 7)],
    &[slot(XPlus, 8), slot(XPlus, 9), slot(XPlus, 10), slot(XPlus, 11)],
    &[slot(XPlus, 12), slot(XPlus, 13), slot(XPlus, 14), slot(XPlus, 15)],
    &[slot(XPlus, 19), slot(XPlus, 18), slot(XPlus, 17), slot(XPlus, 16)],
    // Z-
    &[slot(ZMinus, 3), slot(ZMinus, 2), slot(ZMinus, 1), slot(ZMinus, 0)],
    &[slot(ZMinus, 7), slot(ZMinus, 6), slot(ZMinus, 5), slot(ZMinus, 4)],
    &[slot(ZMinus, 11), slot(ZMinus, 10), slot(ZMinus, 9), slot(ZMinus, 8)],
    &[slot(ZMinus, 15), slot(ZMinus, 14), slot(ZMinus, 13), slot(ZMinus, 12)],
    &[slot(ZMinus, 16), slot(ZMinus, 17), slot(ZMinus, 18), slot(ZMinus, 19)],
    // Z+
    &[slot(ZPlus, 0), slot(ZPlus, 1), slot(ZPlus, 2), slot(ZPlus, 3)],
    &[slot(ZPlus, 4), slot(ZPlus, 5), slot(ZPlus, 6), slot(ZPlus, 7)],
    &[slot(ZPlus, 8), slot(ZPlus, 9), slot(ZPlus, 10), slot(ZPlus, 11)],
    &[slot(ZPlus, 12), slot(ZPlus, 13), slot(ZPlus, 14), slot(ZPlus, 15)],
    &[slot(ZPlus, 19), slot(ZPlus, 18), slot(ZPlus, 17), slot(ZPlus, 16)],
];

pub(crate) static TWIST_0: &[&[usize]] = &[
    // X+ -> Y+ -> Z+
    &[slot(XPlus, 20), slot(YPlus, 20), slot(ZPlus, 20)],
    &[slot(XPlus, 12), slot(YPlus, 12), slot(ZPlus, 12)],
    &[slot(XPlus, 13), slot(YPlus, 13), slot(ZPlus, 13)],
    &[slot(XPlus, 14), slot(YPlus, 14), slot(ZPlus, 14)],
    &[slot(XPlus, 15), slot(YPlus, 15), slot(ZPlus, 15)],
    &[slot(XPlus, 4), slot(YPlus, 8), slot(ZPlus, 5)],
    &[slot(XPlus, 5), slot(YPlus, 9), slot(ZPlus, 6)],
    &[slot(XPlus, 6), slot(YPlus, 10), slot(ZPlus, 7)],
    &[slot(XPlus, 7), slot(YPlus, 11), slot(ZPlus, 8)],
    &[slot(XPlus, 8), slot(YPlus, 4), slot(ZPlus, 9)],
    &[slot(XPlus, 9), slot(YPlus, 5), slot(ZPlus, 10)],
    &[slot(XPlus, 10), slot(YPlus, 6), slot(ZPlus, 11)],
    &[slot(XPlus, 11), slot(YPlus, 7), slot(ZPlus, 4)],
    // poles
    &[slot(WMinus, 0), slot(WMinus, 4), slot(WMinus, 8)],
    &[slot(WPlus, 0), slot(WPlus, 8), slot(WPlus, 4)],
];

pub(crate) static TWIST_1: &[&[usize]] = &[
    // X+ -> Y- -> Z-
    &[slot(XPlus, 20), slot(YMinus, 20), slot(ZMinus, 20)],
    &[slot(XPlus, 16), slot(YMinus, 17), slot(ZMinus, 18)],
    &[slot(XPlus, 17), slot(YMinus, 18), slot(ZMinus, 19)],
    &[slot(XPlus, 18), slot(YMinus, 19), slot(ZMinus, 16)],
    &[slot(XPlus, 19), slot(YMinus, 16), slot(ZMinus, 17)],
    &[slot(XPlus, 0), slot(YMinus, 8), slot(ZMinus, 2)],
    &[slot(XPlus, 1), slot(YMinus, 9), slot(ZMinus, 3)],
    &[slot(XPlus, 2), slot(YMinus, 10), slot(ZMinus, 8)],
    &[slot(XPlus, 3), slot(YMinus, 11), slot(ZMinus, 9)],
    &[slot(XPlus, 8), slot(YMinus, 0), slot(ZMinus, 10)],
    &[slot(XPlus, 9), slot(YMinus, 1), slot(ZMinus, 11)],
    &[slot(XPlus, 10), slot(YMinus, 2), slot(ZMinus, 0)],
    &[slot(XPlus, 11), slot(YMinus, 3), slot(ZMinus, 1)],
    // poles
    &[slot(WMinus, 1), slot(WMinus, 5), slot(WMinus, 9)],
    &[slot(WPlus, 1), slot(WPlus, 9), slot(WPlus, 5)],
];

pub(crate) static TWIST_2: &[&[usize]] = &[
    // X- -> Y+ -> Z-
    &[slot(XMinus, 20), slot(YPlus, 20), slot(ZMinus, 20)],
    &[slot(XMinus, 12), slot(YPlus, 14), slot(ZMinus, 12)],
    &[slot(XMinus, 13), slot(YPlus, 15), slot(ZMinus, 13)],
    &[slot(XMinus, 14), slot(YPlus, 12), slot(ZMinus, 14)],
    &[slot(XMinus, 15), slot(YPlus, 13), slot(ZMinus, 15)],
    &[slot(XMinus, 0), slot(YPlus, 4), slot(ZMinus, 3)],
    &[slot(XMinus, 1), slot(YPlus, 5), slot(ZMinus, 4)],
    &[slot(XMinus, 2), slot(YPlus, 6), slot(ZMinus, 5)],
    &[slot(XMinus, 3), slot(YPlus, 7), slot(ZMinus, 6)],
    &[slot(XMinus, 4), slot(YPlus, 0), slot(ZMinus, 7)],
    &[slot(XMinus, 5), slot(YPlus, 1), slot(ZMinus, 0)],
    &[slot(XMinus, 6), slot(YPlus, 2), slot(ZMinus, 1)],
    &[slot(XMinus, 7), slot(YPlus, 3), slot(ZMinus, 2)],
    // poles
    &[slot(WMinus, 2), slot(WMinus, 6), slot(WMinus, 10)],
    &[slot(WPlus, 2), slot(WPlus, 10), slot(WPlus, 6)],
];

pub(crate) static TWIST_3: &[&[usize]] = &[
    // X- -> Y- -> Z+
    &[slot(XMinus, 20), slot(YMinus, 20), slot(ZPlus, 20)],
    &[slot(XMinus, 16), slot(YMinus, 19), slot(ZPlus, 18)],
    &[slot(XMinus, 17), slot(YMinus, 16), slot(ZPlus, 19)],
    &[slot(XMinus, 18), slot(YMinus, 17), slot(ZPlus, 16)],
    &[slot(XMinus, 19), slot(YMinus, 18), slot(ZPlus, 17)],
    &[slot(XMinus, 4), slot(YMinus, 8), slot(ZPlus, 8)],
    &[slot(XMinus, 5), slot(YMinus, 9), slot(ZPlus, 9)],
    &[slot(XMinus, 6), slot(YMinus, 10), slot(ZPlus, 10)],
    &[slot(XMinus, 7), slot(YMinus, 11), slot(ZPlus, 11)],
    &[slot(XMinus, 8), slot(YMinus, 4), slot(ZPlus, 4)],
    &[slot(XMinus, 9), slot(YMinus, 5), slot(ZPlus, 5)],
    &[slot(XMinus, 10), slot(YMinus, 6), slot(ZPlus, 6)],
    &[slot(XMinus, 11), slot(YMinus, 7), slot(ZPlus, 7)],
    // poles
    &[slot(WMinus, 3), slot(WMinus, 7), slot(WMinus, 11)],
    &[slot(WPlus, 3), slot(WPlus, 11), slot(WPlus, 7)],
];
