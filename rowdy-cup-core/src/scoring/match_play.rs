//! Match-play status: the running "X UP"/"AS" tally and the "X & Y"
//! closeout notation.
//!
//! The engine keeps no state. Every render refolds the per-hole results
//! into three counters and recomputes the status from those.

use crate::model::{HoleResult, MatchStatus, MatchWinner};
use serde::{Deserialize, Serialize};

pub const HOLES_PER_MATCH: i64 = 18;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    Ongoing,
    ClosedOut,
    FinishedAt18,
}

/// Fold hole results into (side A wins, side B wins, holes played).
/// Halved holes count as played for neither side; undetermined holes
/// count for nothing.
#[must_use]
pub fn count_results(results: &[HoleResult]) -> (u32, u32, u32) {
    let mut side_a_wins = 0;
    let mut side_b_wins = 0;
    let mut holes_played = 0;
    for result in results {
        match result {
            HoleResult::SideA => {
                side_a_wins += 1;
                holes_played += 1;
            }
            HoleResult::SideB => {
                side_b_wins += 1;
                holes_played += 1;
            }
            HoleResult::Halved => holes_played += 1,
            HoleResult::Undetermined => {}
        }
    }
    (side_a_wins, side_b_wins, holes_played)
}

/// Current status from the three counters. Pure; inputs are trusted to
/// be consistent with the holes actually scored.
#[must_use]
pub fn match_play_status(side_a_wins: u32, side_b_wins: u32, holes_played: u32) -> MatchStatus {
    let diff = i64::from(side_a_wins) - i64::from(side_b_wins);
    let remaining = HOLES_PER_MATCH - i64::from(holes_played);

    // The 18-holes-played branch comes before the closeout check, so a
    // match that goes the distance never renders "X & 0".
    if remaining == 0 {
        // A win decided on the 18th always reads "1 UP" on the board,
        // whatever the real margin. Longstanding scoreboard behavior.
        return match diff.signum() {
            0 => MatchStatus {
                side_a: "AS".to_string(),
                side_b: "AS".to_string(),
                over: true,
                winner: Some(MatchWinner::Tie),
            },
            1 => MatchStatus {
                side_a: "1 UP".to_string(),
                side_b: "1 DN".to_string(),
                over: true,
                winner: Some(MatchWinner::SideA),
            },
            _ => MatchStatus {
                side_a: "1 DN".to_string(),
                side_b: "1 UP".to_string(),
                over: true,
                winner: Some(MatchWinner::SideB),
            },
        };
    }

    // Closed out early: the trailing side cannot catch up. Strictly
    // greater; dormie (diff == remaining) still plays on.
    if diff.abs() > remaining {
        let label = format!("{} & {}", diff.abs(), remaining);
        let winner = if diff > 0 {
            MatchWinner::SideA
        } else {
            MatchWinner::SideB
        };
        return MatchStatus {
            side_a: label.clone(),
            side_b: label,
            over: true,
            winner: Some(winner),
        };
    }

    match diff.signum() {
        0 => MatchStatus {
            side_a: "AS".to_string(),
            side_b: "AS".to_string(),
            over: false,
            winner: None,
        },
        1 => MatchStatus {
            side_a: format!("{diff} UP"),
            side_b: format!("{diff} DN"),
            over: false,
            winner: None,
        },
        _ => MatchStatus {
            side_a: format!("{} DN", diff.abs()),
            side_b: format!("{} UP", diff.abs()),
            over: false,
            winner: None,
        },
    }
}

#[must_use]
pub fn match_state(side_a_wins: u32, side_b_wins: u32, holes_played: u32) -> MatchState {
    let diff = i64::from(side_a_wins) - i64::from(side_b_wins);
    let remaining = HOLES_PER_MATCH - i64::from(holes_played);
    if remaining == 0 {
        MatchState::FinishedAt18
    } else if diff.abs() > remaining {
        MatchState::ClosedOut
    } else {
        MatchState::Ongoing
    }
}
