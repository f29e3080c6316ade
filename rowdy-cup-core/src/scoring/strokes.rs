//! Per-hole stroke allocation from strokes received and hole difficulty
//! rank.

pub const HOLES_PER_ROUND: i32 = 18;

/// Number of strokes a player gets on one hole.
///
/// Strokes go to the hardest-ranked holes first: with `n` strokes
/// received (n < 18) the player strokes on exactly the holes ranked
/// `1..=n`. At 18 and above every hole gets a stroke per full loop of
/// 18, and the leftover `n % 18` strokes land on the hardest holes
/// again as seconds. Invalid ranks never match a stroke.
#[must_use]
pub fn strokes_on_hole(strokes_received: i32, hole_handicap_rank: i32) -> i32 {
    if strokes_received <= 0 || !(1..=HOLES_PER_ROUND).contains(&hole_handicap_rank) {
        return 0;
    }
    if strokes_received >= HOLES_PER_ROUND {
        let full_loops = strokes_received / HOLES_PER_ROUND;
        let extra = strokes_received % HOLES_PER_ROUND;
        return full_loops + i32::from(hole_handicap_rank <= extra);
    }
    i32::from(hole_handicap_rank <= strokes_received)
}

#[must_use]
pub fn gets_stroke_on_hole(strokes_received: i32, hole_handicap_rank: i32) -> bool {
    strokes_on_hole(strokes_received, hole_handicap_rank) > 0
}
