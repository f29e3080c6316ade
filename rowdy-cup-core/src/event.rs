//! Event taxonomy carried over the push channel. The core only names
//! the kinds; the server decides transport and framing.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreEvent {
    ScoreUpdated {
        match_id: i64,
        player_id: i64,
        hole_number: i32,
    },
    MatchStatusUpdated {
        match_id: i64,
    },
    StandingsUpdated,
}
