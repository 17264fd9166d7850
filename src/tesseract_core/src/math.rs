fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// How many applications it takes for cycles of the given lengths to all
/// return to their start at once. No cycles means a period of one.
///
/// # Panics
///
/// Panics on a zero length.
pub fn cycle_period(lengths: impl IntoIterator<Item = usize>) -> usize {
    lengths.into_iter().fold(1, |period, len| {
        assert_ne!(len, 0, "a cycle has at least one slot");
        period / gcd(period, len) * len
    })
}
