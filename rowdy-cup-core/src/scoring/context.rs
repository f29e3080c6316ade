use ahash::RandomState;
use std::collections::HashMap;

use crate::error::CoreError;
use crate::model::{Course, MatchScorecard};
use crate::scoring::scorecard::assemble_scorecard;
use crate::standings::{Standings, compute_standings};
use crate::storage::Storage;

/// Load one match and derive its full scorecard view.
///
/// # Errors
/// Returns an error if any storage lookup fails.
pub async fn load_match_scorecard(
    storage: &dyn Storage,
    match_id: i64,
) -> Result<MatchScorecard, CoreError> {
    let golf_match = storage.get_match(match_id).await?;
    let course = storage.get_course(golf_match.course_id).await?;
    let scores = storage.get_hole_scores(match_id).await?;
    let teams = storage.get_teams().await?;
    Ok(assemble_scorecard(&golf_match, &course, &scores, &teams))
}

/// Derive scorecards for every match, reusing course lookups.
///
/// # Errors
/// Returns an error if any storage lookup fails.
pub async fn load_all_scorecards(storage: &dyn Storage) -> Result<Vec<MatchScorecard>, CoreError> {
    let matches = storage.get_matches().await?;
    let teams = storage.get_teams().await?;

    let mut courses: HashMap<i64, Course, RandomState> = HashMap::default();
    let mut cards = Vec::with_capacity(matches.len());
    for golf_match in &matches {
        if !courses.contains_key(&golf_match.course_id) {
            let course = storage.get_course(golf_match.course_id).await?;
            courses.insert(golf_match.course_id, course);
        }
        let course = &courses[&golf_match.course_id];
        let scores = storage.get_hole_scores(golf_match.match_id).await?;
        cards.push(assemble_scorecard(golf_match, course, &scores, &teams));
    }
    Ok(cards)
}

/// Current team standings across all matches.
///
/// # Errors
/// Returns an error if any storage lookup fails.
pub async fn load_standings(storage: &dyn Storage) -> Result<Standings, CoreError> {
    let teams = storage.get_teams().await?;
    let cards = load_all_scorecards(storage).await?;
    Ok(compute_standings(&teams, &cards))
}
