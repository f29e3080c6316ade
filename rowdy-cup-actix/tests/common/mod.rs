use serde_json::json;
use sql_middleware::middleware::{ConfigAndPool, SqliteOptions};

use rowdy_cup_actix::db_prefill::db_prefill;
use rowdy_cup_actix::storage::{SqlStorage, create_tables};

/// Build an in-memory sqlite pool, create the schema and seed a small
/// two-team cup: a best-ball match (id 1) and a singles match (id 2) on
/// a flat course where every hole is a par 4 and rank equals hole number.
pub async fn seeded_storage(db_name: &str) -> (SqlStorage, ConfigAndPool) {
    let connection_string = format!("file:{db_name}?mode=memory&cache=shared");
    let config_and_pool = ConfigAndPool::new_sqlite(SqliteOptions::new(connection_string))
        .await
        .unwrap();

    create_tables(&config_and_pool).await.unwrap();

    let holes: Vec<_> = (1..=18)
        .map(|n| json!({"hole_number": n, "par": 4, "handicap_rank": n}))
        .collect();
    let seed = json!({
        "teams": [
            {"team_id": 1, "name": "Aces"},
            {"team_id": 2, "name": "Birdies"}
        ],
        "players": [
            {"player_id": 1, "team_id": 1, "name": "Al", "handicap_index": 0.0},
            {"player_id": 2, "team_id": 1, "name": "Andy", "handicap_index": 10.0},
            {"player_id": 3, "team_id": 2, "name": "Bob", "handicap_index": 2.0},
            {"player_id": 4, "team_id": 2, "name": "Bill", "handicap_index": 20.0}
        ],
        "courses": [
            {"course_id": 1, "name": "Sand Hollow", "slope_rating": 113.0,
             "course_rating": 72.0, "par": 72, "holes": holes}
        ],
        "matches": [
            {"match_id": 1, "round_number": 1, "course_id": 1, "format": "best_ball",
             "team_a_id": 1, "team_b_id": 2, "side_a": [1, 2], "side_b": [3, 4]},
            {"match_id": 2, "round_number": 3, "course_id": 1, "format": "singles",
             "team_a_id": 1, "team_b_id": 2, "side_a": [2], "side_b": [3]}
        ]
    });
    db_prefill(&seed, &config_and_pool).await.unwrap();

    (SqlStorage::new(config_and_pool.clone()), config_and_pool)
}
