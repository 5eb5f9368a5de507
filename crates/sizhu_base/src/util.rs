//! Shared cyclic-index helpers.

/// Resolve a raw cyclic value to a 1-based ordinal in `1..=length`.
///
/// Values congruent to 0 modulo `length` map to `length` (the last element),
/// not to 0. Negative inputs wrap with Euclidean modulo, so `-1` maps to
/// `length - 1`.
///
/// # Panics
/// Panics if `length` is 0.
pub fn wrap_index(raw: i64, length: u8) -> u8 {
    assert!(length > 0, "cycle length must be positive");
    let r = raw.rem_euclid(i64::from(length)) as u8;
    if r == 0 { length } else { r }
}
