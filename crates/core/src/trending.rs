//! The trending flag and its single state transition.
//!
//! Stored as an integer. Only `0` and `1` are valid; the schema enforces that
//! with a CHECK constraint.

/// Stored value for a bike shown in the featured list.
pub const TRENDING: i64 = 1;

/// Stored value for a regular bike.
pub const NOT_TRENDING: i64 = 0;

/// The value a toggle writes back given the currently stored value.
pub fn toggled(current: i64) -> i64 {
    if current == TRENDING {
        NOT_TRENDING
    } else {
        TRENDING
    }
}

/// Whether a stored flag means "trending".
pub fn is_trending(flag: i64) -> bool {
    flag == TRENDING
}
