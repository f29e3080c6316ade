//! Gross-to-net conversion.

/// Net score for an entered gross. No floor: with enough strokes a net
/// of zero or below is correct arithmetic, not an error.
#[must_use]
pub fn net_score(gross: i32, strokes: i32) -> i32 {
    gross - strokes
}

/// Absent gross stays absent; net is never materialized for an
/// unscored hole.
#[must_use]
pub fn net_score_opt(gross: Option<i32>, strokes: i32) -> Option<i32> {
    gross.map(|g| net_score(g, strokes))
}
