use serde_json::Value;
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{ConfigAndPool, RowValues};

use crate::storage::queries::execute_write;

fn val_i64(value: &Value, key: &str) -> Result<i64, SqlMiddlewareDbError> {
    value[key]
        .as_i64()
        .ok_or_else(|| SqlMiddlewareDbError::Other(format!("seed json: {key} must be an integer")))
}

fn val_f64(value: &Value, key: &str) -> Result<f64, SqlMiddlewareDbError> {
    value[key]
        .as_f64()
        .ok_or_else(|| SqlMiddlewareDbError::Other(format!("seed json: {key} must be a number")))
}

fn val_str<'a>(value: &'a Value, key: &str) -> Result<&'a str, SqlMiddlewareDbError> {
    value[key]
        .as_str()
        .ok_or_else(|| SqlMiddlewareDbError::Other(format!("seed json: {key} must be a string")))
}

fn val_array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value[key].as_array().map_or(&[], Vec::as_slice)
}

/// Load teams, players, courses and matches from the seed file. Existing
/// rows are left alone so re-running startup with the same file is safe.
///
/// # Errors
///
/// Will return `Err` if the json is malformed or a database write fails
pub async fn db_prefill(
    json: &Value,
    config_and_pool: &ConfigAndPool,
) -> Result<(), SqlMiddlewareDbError> {
    prefill_teams(json, config_and_pool).await?;
    prefill_players(json, config_and_pool).await?;
    prefill_courses(json, config_and_pool).await?;
    prefill_matches(json, config_and_pool).await?;
    Ok(())
}

async fn prefill_teams(
    json: &Value,
    config_and_pool: &ConfigAndPool,
) -> Result<(), SqlMiddlewareDbError> {
    for team in val_array(json, "teams") {
        execute_write(
            config_and_pool,
            "INSERT INTO team (team_id, name) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            "INSERT INTO team (team_id, name) VALUES (?1, ?2) ON CONFLICT DO NOTHING",
            vec![
                RowValues::Int(val_i64(team, "team_id")?),
                RowValues::Text(val_str(team, "name")?.to_string()),
            ],
        )
        .await?;
    }
    Ok(())
}

async fn prefill_players(
    json: &Value,
    config_and_pool: &ConfigAndPool,
) -> Result<(), SqlMiddlewareDbError> {
    for player in val_array(json, "players") {
        execute_write(
            config_and_pool,
            "INSERT INTO player (player_id, team_id, name, handicap_index) \
             VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING",
            "INSERT INTO player (player_id, team_id, name, handicap_index) \
             VALUES (?1, ?2, ?3, ?4) ON CONFLICT DO NOTHING",
            vec![
                RowValues::Int(val_i64(player, "player_id")?),
                RowValues::Int(val_i64(player, "team_id")?),
                RowValues::Text(val_str(player, "name")?.to_string()),
                RowValues::Float(val_f64(player, "handicap_index")?),
            ],
        )
        .await?;
    }
    Ok(())
}

async fn prefill_courses(
    json: &Value,
    config_and_pool: &ConfigAndPool,
) -> Result<(), SqlMiddlewareDbError> {
    for course in val_array(json, "courses") {
        let course_id = val_i64(course, "course_id")?;
        execute_write(
            config_and_pool,
            "INSERT INTO course (course_id, name, slope_rating, course_rating, par) \
             VALUES ($1, $2, $3, $4, $5) ON CONFLICT DO NOTHING",
            "INSERT INTO course (course_id, name, slope_rating, course_rating, par) \
             VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT DO NOTHING",
            vec![
                RowValues::Int(course_id),
                RowValues::Text(val_str(course, "name")?.to_string()),
                RowValues::Float(val_f64(course, "slope_rating")?),
                RowValues::Float(val_f64(course, "course_rating")?),
                RowValues::Int(val_i64(course, "par")?),
            ],
        )
        .await?;

        for hole in val_array(course, "holes") {
            execute_write(
                config_and_pool,
                "INSERT INTO course_hole (course_id, hole_number, par, handicap_rank) \
                 VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING",
                "INSERT INTO course_hole (course_id, hole_number, par, handicap_rank) \
                 VALUES (?1, ?2, ?3, ?4) ON CONFLICT DO NOTHING",
                vec![
                    RowValues::Int(course_id),
                    RowValues::Int(val_i64(hole, "hole_number")?),
                    RowValues::Int(val_i64(hole, "par")?),
                    RowValues::Int(val_i64(hole, "handicap_rank")?),
                ],
            )
            .await?;
        }
    }
    Ok(())
}

async fn prefill_matches(
    json: &Value,
    config_and_pool: &ConfigAndPool,
) -> Result<(), SqlMiddlewareDbError> {
    for cup_match in val_array(json, "matches") {
        let match_id = val_i64(cup_match, "match_id")?;
        execute_write(
            config_and_pool,
            "INSERT INTO cup_match (match_id, round_number, course_id, format, team_a_id, team_b_id) \
             VALUES ($1, $2, $3, $4, $5, $6) ON CONFLICT DO NOTHING",
            "INSERT INTO cup_match (match_id, round_number, course_id, format, team_a_id, team_b_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) ON CONFLICT DO NOTHING",
            vec![
                RowValues::Int(match_id),
                RowValues::Int(val_i64(cup_match, "round_number")?),
                RowValues::Int(val_i64(cup_match, "course_id")?),
                RowValues::Text(val_str(cup_match, "format")?.to_string()),
                RowValues::Int(val_i64(cup_match, "team_a_id")?),
                RowValues::Int(val_i64(cup_match, "team_b_id")?),
            ],
        )
        .await?;

        for (side, key) in [("A", "side_a"), ("B", "side_b")] {
            for (slot, player_id) in val_array(cup_match, key).iter().enumerate() {
                let player_id = player_id.as_i64().ok_or_else(|| {
                    SqlMiddlewareDbError::Other(format!(
                        "seed json: {key} entries must be player ids"
                    ))
                })?;
                execute_write(
                    config_and_pool,
                    "INSERT INTO match_player (match_id, player_id, side, slot) \
                     VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING",
                    "INSERT INTO match_player (match_id, player_id, side, slot) \
                     VALUES (?1, ?2, ?3, ?4) ON CONFLICT DO NOTHING",
                    vec![
                        RowValues::Int(match_id),
                        RowValues::Int(player_id),
                        RowValues::Text(side.to_string()),
                        RowValues::Int(slot as i64),
                    ],
                )
                .await?;
            }
        }
    }
    Ok(())
}
