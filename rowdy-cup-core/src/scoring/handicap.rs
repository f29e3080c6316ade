//! Handicap math: index to course handicap, format allowance, and
//! strokes received against the match's scratch reference.

/// Course handicap from a handicap index and course figures.
///
/// A slope of zero falls back to the rounded index so a half-configured
/// course still produces a number instead of dividing into nonsense.
/// Negative ("plus") indices pass straight through the formula.
#[must_use]
pub fn course_handicap(
    handicap_index: f64,
    slope_rating: f64,
    course_rating: f64,
    course_par: i32,
) -> i32 {
    if slope_rating == 0.0 {
        return round_to_i32(handicap_index);
    }
    round_to_i32(handicap_index * (slope_rating / 113.0) + (course_rating - f64::from(course_par)))
}

/// Course handicap scaled by the format allowance (e.g. 90 for best ball).
#[must_use]
pub fn playing_handicap(course_handicap: i32, allowance_pct: f64) -> i32 {
    round_to_i32(f64::from(course_handicap) * allowance_pct / 100.0)
}

/// Whole strokes relative to the lowest playing handicap in the group.
/// The scratch reference is per match group, so the same player can get
/// a different count in a different pairing.
#[must_use]
pub fn strokes_received(playing_handicap: i32, lowest_in_group: i32) -> i32 {
    (playing_handicap - lowest_in_group).max(0)
}

/// Strokes received for every member of a comparison group, in input order.
#[must_use]
pub fn group_strokes_received(playing_handicaps: &[i32]) -> Vec<i32> {
    let lowest = playing_handicaps.iter().copied().min().unwrap_or(0);
    playing_handicaps
        .iter()
        .map(|ph| strokes_received(*ph, lowest))
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}
