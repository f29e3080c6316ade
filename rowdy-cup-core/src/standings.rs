//! Ryder-Cup style team points: a concluded match is worth one point to
//! the winner, a half point each on a tie. Derived fresh from match
//! statuses on every read.

use serde::{Deserialize, Serialize};

use crate::model::{MatchScorecard, MatchWinner, Team};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamStanding {
    pub team_id: i64,
    pub team_name: String,
    pub points: f64,
    pub matches_won: u32,
    pub matches_tied: u32,
    pub matches_ongoing: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Standings {
    pub teams: Vec<TeamStanding>,
}

#[must_use]
pub fn compute_standings(teams: &[Team], cards: &[MatchScorecard]) -> Standings {
    let mut rows: Vec<TeamStanding> = teams
        .iter()
        .map(|team| TeamStanding {
            team_id: team.team_id,
            team_name: team.name.clone(),
            points: 0.0,
            matches_won: 0,
            matches_tied: 0,
            matches_ongoing: 0,
        })
        .collect();

    for card in cards {
        match card.status.winner {
            Some(MatchWinner::SideA) => award_win(&mut rows, card.side_a.team_id),
            Some(MatchWinner::SideB) => award_win(&mut rows, card.side_b.team_id),
            Some(MatchWinner::Tie) => {
                award_tie(&mut rows, card.side_a.team_id);
                award_tie(&mut rows, card.side_b.team_id);
            }
            None => {
                mark_ongoing(&mut rows, card.side_a.team_id);
                mark_ongoing(&mut rows, card.side_b.team_id);
            }
        }
    }

    rows.sort_by(|a, b| {
        b.points
            .partial_cmp(&a.points)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.team_name.cmp(&b.team_name))
    });

    Standings { teams: rows }
}

/// Points rendered the way golfers write them: 6, 6½, ½.
#[must_use]
pub fn format_points(points: f64) -> String {
    let whole = points.trunc();
    let has_half = (points - whole).abs() >= 0.25;
    #[allow(clippy::cast_possible_truncation)]
    let whole = whole as i64;
    match (whole, has_half) {
        (0, true) => "\u{bd}".to_string(),
        (w, true) => format!("{w}\u{bd}"),
        (w, false) => w.to_string(),
    }
}

fn award_win(rows: &mut [TeamStanding], team_id: i64) {
    if let Some(row) = rows.iter_mut().find(|r| r.team_id == team_id) {
        row.points += 1.0;
        row.matches_won += 1;
    }
}

fn award_tie(rows: &mut [TeamStanding], team_id: i64) {
    if let Some(row) = rows.iter_mut().find(|r| r.team_id == team_id) {
        row.points += 0.5;
        row.matches_tied += 1;
    }
}

fn mark_ongoing(rows: &mut [TeamStanding], team_id: i64) {
    if let Some(row) = rows.iter_mut().find(|r| r.team_id == team_id) {
        row.matches_ongoing += 1;
    }
}
