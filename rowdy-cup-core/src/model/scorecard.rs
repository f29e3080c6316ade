use serde::{Deserialize, Serialize};

use crate::model::types::{CourseHole, MatchFormat};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HoleResult {
    SideA,
    SideB,
    Halved,
    /// At least one side has no comparable score yet. Does not count
    /// toward holes played.
    Undetermined,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchWinner {
    SideA,
    SideB,
    Tie,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatchStatus {
    pub side_a: String,
    pub side_b: String,
    pub over: bool,
    pub winner: Option<MatchWinner>,
}

/// One player's cell on one hole of the card.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct HoleCell {
    pub gross: Option<i32>,
    pub net: Option<i32>,
    pub strokes: i32,
    pub contributing: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerCard {
    pub player_id: i64,
    pub player_name: String,
    pub course_handicap: i32,
    pub playing_handicap: i32,
    pub strokes_received: i32,
    /// Indexed by hole, 18 entries.
    pub holes: Vec<HoleCell>,
    /// Gross sums over entered holes only.
    pub front_gross: i32,
    pub back_gross: i32,
    pub total_gross: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SideCard {
    pub team_id: i64,
    pub team_name: String,
    pub players: Vec<PlayerCard>,
    /// Team net per hole (best ball, or the lone net in singles).
    pub net_by_hole: Vec<Option<i32>>,
    pub front_net: i32,
    pub back_net: i32,
    pub total_net: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchScorecard {
    pub match_id: i64,
    pub round_number: i32,
    pub format: MatchFormat,
    pub holes: Vec<CourseHole>,
    pub side_a: SideCard,
    pub side_b: SideCard,
    pub results: Vec<HoleResult>,
    pub status: MatchStatus,
}
