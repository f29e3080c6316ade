use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    let files = file.split(';');
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Could not read '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("'{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the seed file format
/// format we expect is this:
/// { "teams": [{"team_id": <int>, "name": "value"}, ...]
/// , "players": [{"player_id": <int>, "team_id": <int>, "name": "Firstname Lastname", "handicap_index": <float>}, ...]
/// , "courses": [{"course_id": <int>, "name": "value", "slope_rating": <float>, "course_rating": <float>, "par": <int>,
///     "holes": [{"hole_number": <int>, "par": <int>, "handicap_rank": <int>}, ...]}, ...]
/// , "matches": [{"match_id": <int>, "round_number": <int>, "course_id": <int>, "format": "best_ball"|"singles",
///     "team_a_id": <int>, "team_b_id": <int>, "side_a": [<player_id>, ...], "side_b": [<player_id>, ...]}, ...]
/// }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(obj) = json.as_object() else {
        return Err("The json file is not in the correct format.".to_string());
    };

    let expected_keys = ["teams", "players", "courses", "matches"];
    for key in obj.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "The json file is not in the correct format. Expected keys: {expected_keys:?}"
            ));
        }
    }
    for key in expected_keys {
        if !json[key].is_array() {
            return Err(format!(
                "The json key {key} is not in the correct format. Expected an array."
            ));
        }
    }

    for team in json["teams"].as_array().into_iter().flatten() {
        if !team["team_id"].is_number() || !team["name"].is_string() {
            return Err(
                "The json key teams is not in the correct format. Expected objects with keys team_id and name.".to_string()
            );
        }
    }

    for player in json["players"].as_array().into_iter().flatten() {
        if !player["player_id"].is_number()
            || !player["team_id"].is_number()
            || !player["name"].is_string()
            || !player["handicap_index"].is_number()
        {
            return Err(
                "The json key players is not in the correct format. Expected objects with keys player_id, team_id, name and handicap_index.".to_string()
            );
        }
    }

    for course in json["courses"].as_array().into_iter().flatten() {
        if !course["course_id"].is_number()
            || !course["name"].is_string()
            || !course["slope_rating"].is_number()
            || !course["course_rating"].is_number()
            || !course["par"].is_number()
            || !course["holes"].is_array()
        {
            return Err(
                "The json key courses is not in the correct format. Expected objects with keys course_id, name, slope_rating, course_rating, par and holes.".to_string()
            );
        }
        for hole in course["holes"].as_array().into_iter().flatten() {
            if !hole["hole_number"].is_number()
                || !hole["par"].is_number()
                || !hole["handicap_rank"].is_number()
            {
                return Err(
                    "The json key holes is not in the correct format. Expected objects with keys hole_number, par and handicap_rank.".to_string()
                );
            }
        }
    }

    for cup_match in json["matches"].as_array().into_iter().flatten() {
        if !cup_match["match_id"].is_number()
            || !cup_match["round_number"].is_number()
            || !cup_match["course_id"].is_number()
            || !cup_match["format"].is_string()
            || !cup_match["team_a_id"].is_number()
            || !cup_match["team_b_id"].is_number()
            || !cup_match["side_a"].is_array()
            || !cup_match["side_b"].is_array()
        {
            return Err(
                "The json key matches is not in the correct format. Expected objects with keys match_id, round_number, course_id, format, team_a_id, team_b_id, side_a and side_b.".to_string()
            );
        }
    }

    Ok(())
}
