use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub player_id: i64,
    pub team_id: i64,
    pub name: String,
    pub handicap_index: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct CourseHole {
    pub hole_number: i32,
    pub par: i32,
    /// 1 = hardest. Ranks outside 1-18 never receive a stroke.
    pub handicap_rank: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub course_id: i64,
    pub name: String,
    pub slope_rating: f64,
    pub course_rating: f64,
    pub par: i32,
    pub holes: Vec<CourseHole>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    BestBall,
    Singles,
}

impl MatchFormat {
    /// Handicap allowance for the format, as a percentage of course handicap.
    #[must_use]
    pub fn allowance_pct(self) -> f64 {
        match self {
            Self::BestBall => 90.0,
            Self::Singles => 100.0,
        }
    }

    #[must_use]
    pub fn from_db_text(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "singles" => Self::Singles,
            _ => Self::BestBall,
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::BestBall => "best_ball",
            Self::Singles => "singles",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Match {
    pub match_id: i64,
    pub round_number: i32,
    pub course_id: i64,
    pub format: MatchFormat,
    pub team_a_id: i64,
    pub team_b_id: i64,
    /// Roster order is slot order; the contributing-score tie-break
    /// follows it.
    pub side_a: Vec<Player>,
    pub side_b: Vec<Player>,
}

/// One entered gross score. A missing row means the hole has not been
/// scored yet; there is no zero sentinel.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct HoleScore {
    pub player_id: i64,
    pub hole_number: i32,
    pub gross: i32,
}
