use sql_middleware::middleware::{
    ConfigAndPool, ConversionMode, MiddlewarePool, MiddlewarePoolConnection, ResultSet,
};
use sql_middleware::middleware::{QueryAndParams as QueryAndParams2, RowValues as RowValues2};
use sql_middleware::{
    PostgresParams, SqlMiddlewareDbError, SqliteParamsExecute, SqliteParamsQuery,
    convert_sql_params, postgres_build_result_set, sqlite_build_result_set,
};

use rowdy_cup_core::model::{Course, CourseHole, HoleScore, Match, MatchFormat, Player, Team};

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn execute_batch_sql(
    config_and_pool: &ConfigAndPool,
    query: &str,
) -> Result<(), SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    match conn {
        MiddlewarePoolConnection::Postgres(mut xx) => {
            let tx = xx.transaction().await?;
            tx.batch_execute(query).await?;
            tx.commit().await?;
            Ok(())
        }
        MiddlewarePoolConnection::Sqlite(xx) => {
            let query = query.to_string();
            xx.interact(move |db_conn| {
                let tx = db_conn.transaction()?;
                tx.execute_batch(&query)?;
                tx.commit()?;
                Ok::<_, SqlMiddlewareDbError>(())
            })
            .await?
        }
    }
}

/// Run a SELECT against whichever backend the pool wraps.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn fetch_rows(
    config_and_pool: &ConfigAndPool,
    pg_query: &str,
    lite_query: &str,
    params: Vec<RowValues2>,
) -> Result<ResultSet, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let query_and_params = QueryAndParams2 {
        query: match &conn {
            MiddlewarePoolConnection::Postgres(_) => pg_query.to_string(),
            MiddlewarePoolConnection::Sqlite(_) => lite_query.to_string(),
        },
        params,
    };

    match conn {
        MiddlewarePoolConnection::Postgres(mut xx) => {
            let tx = xx.transaction().await?;
            let result_set = {
                let stmt = tx.prepare(&query_and_params.query).await?;
                let postgres_params = PostgresParams::convert(&query_and_params.params)?;
                postgres_build_result_set(&stmt, &postgres_params.as_refs(), &tx).await?
            };
            tx.commit().await?;
            Ok(result_set)
        }
        MiddlewarePoolConnection::Sqlite(xx) => {
            xx.interact(move |db_conn| {
                let converted_params = convert_sql_params::<SqliteParamsQuery>(
                    &query_and_params.params,
                    ConversionMode::Query,
                )?;
                let tx = db_conn.transaction()?;
                let result_set = {
                    let mut stmt = tx.prepare(&query_and_params.query)?;
                    sqlite_build_result_set(&mut stmt, &converted_params.0)?
                };
                tx.commit()?;
                Ok::<_, SqlMiddlewareDbError>(result_set)
            })
            .await?
        }
    }
}

/// Run an INSERT/UPDATE against whichever backend the pool wraps.
///
/// # Errors
///
/// Will return `Err` if the database statement fails
pub async fn execute_write(
    config_and_pool: &ConfigAndPool,
    pg_query: &str,
    lite_query: &str,
    params: Vec<RowValues2>,
) -> Result<(), SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let query_and_params = QueryAndParams2 {
        query: match &conn {
            MiddlewarePoolConnection::Postgres(_) => pg_query.to_string(),
            MiddlewarePoolConnection::Sqlite(_) => lite_query.to_string(),
        },
        params,
    };

    match conn {
        MiddlewarePoolConnection::Postgres(mut xx) => {
            let tx = xx.transaction().await?;
            let postgres_params = PostgresParams::convert(&query_and_params.params)?;
            tx.execute(query_and_params.query.as_str(), &postgres_params.as_refs())
                .await?;
            tx.commit().await?;
            Ok(())
        }
        MiddlewarePoolConnection::Sqlite(xx) => {
            xx.interact(move |db_conn| {
                let tx = db_conn.transaction()?;
                {
                    let mut stmt = tx.prepare(&query_and_params.query)?;
                    let converted_params = convert_sql_params::<SqliteParamsExecute>(
                        &query_and_params.params,
                        ConversionMode::Execute,
                    )?;
                    let _rs = stmt.execute(converted_params.0)?;
                }
                tx.commit()?;
                Ok::<_, SqlMiddlewareDbError>(())
            })
            .await?
        }
    }
}

/// Create the scoreboard tables if they do not exist yet.
///
/// # Errors
///
/// Will return `Err` if the schema statements fail
pub async fn create_tables(config_and_pool: &ConfigAndPool) -> Result<(), SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let query = match &conn {
        MiddlewarePoolConnection::Postgres(_) => [
            include_str!("../sql/schema/postgres/00_team.sql"),
            include_str!("../sql/schema/postgres/01_player.sql"),
            include_str!("../sql/schema/postgres/02_course.sql"),
            include_str!("../sql/schema/postgres/03_course_hole.sql"),
            include_str!("../sql/schema/postgres/04_cup_match.sql"),
            include_str!("../sql/schema/postgres/05_match_player.sql"),
            include_str!("../sql/schema/postgres/06_hole_score.sql"),
        ]
        .join("\n"),
        MiddlewarePoolConnection::Sqlite(_) => [
            include_str!("../sql/schema/sqlite/00_team.sql"),
            include_str!("../sql/schema/sqlite/01_player.sql"),
            include_str!("../sql/schema/sqlite/02_course.sql"),
            include_str!("../sql/schema/sqlite/03_course_hole.sql"),
            include_str!("../sql/schema/sqlite/04_cup_match.sql"),
            include_str!("../sql/schema/sqlite/05_match_player.sql"),
            include_str!("../sql/schema/sqlite/06_hole_score.sql"),
        ]
        .join("\n"),
    };
    drop(conn);

    execute_batch_sql(config_and_pool, &query).await
}

fn row_int(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> i64 {
    row.get(field).and_then(|v| v.as_int()).copied().unwrap_or_default()
}

fn row_text(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> String {
    row.get(field)
        .and_then(|v| v.as_text())
        .unwrap_or_default()
        .to_string()
}

fn row_float(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> f64 {
    row.get(field).and_then(|v| v.as_float()).unwrap_or_default()
}

#[allow(clippy::cast_possible_truncation)]
fn row_int32(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> i32 {
    row_int(row, field) as i32
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_teams(config_and_pool: &ConfigAndPool) -> Result<Vec<Team>, SqlMiddlewareDbError> {
    let query = "SELECT team_id, name FROM team ORDER BY team_id";
    let res = fetch_rows(config_and_pool, query, query, vec![]).await?;

    Ok(res
        .results
        .iter()
        .map(|row| Team {
            team_id: row_int(row, "team_id"),
            name: row_text(row, "name"),
        })
        .collect())
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_players(
    config_and_pool: &ConfigAndPool,
) -> Result<Vec<Player>, SqlMiddlewareDbError> {
    let query = "SELECT player_id, team_id, name, handicap_index FROM player ORDER BY player_id";
    let res = fetch_rows(config_and_pool, query, query, vec![]).await?;

    Ok(res.results.iter().map(player_from_row).collect())
}

fn player_from_row(row: &sql_middleware::middleware::CustomDbRow) -> Player {
    Player {
        player_id: row_int(row, "player_id"),
        team_id: row_int(row, "team_id"),
        name: row_text(row, "name"),
        handicap_index: row_float(row, "handicap_index"),
    }
}

/// # Errors
///
/// Will return `Err` if the database query fails or the course is missing
pub async fn get_course(
    config_and_pool: &ConfigAndPool,
    course_id: i64,
) -> Result<Course, SqlMiddlewareDbError> {
    let res = fetch_rows(
        config_and_pool,
        "SELECT course_id, name, slope_rating, course_rating, par FROM course WHERE course_id = $1",
        "SELECT course_id, name, slope_rating, course_rating, par FROM course WHERE course_id = ?1",
        vec![RowValues2::Int(course_id)],
    )
    .await?;

    let Some(row) = res.results.first() else {
        return Err(SqlMiddlewareDbError::Other(format!(
            "course {course_id} not found"
        )));
    };
    let mut course = Course {
        course_id: row_int(row, "course_id"),
        name: row_text(row, "name"),
        slope_rating: row_float(row, "slope_rating"),
        course_rating: row_float(row, "course_rating"),
        par: row_int32(row, "par"),
        holes: vec![],
    };

    let holes = fetch_rows(
        config_and_pool,
        "SELECT hole_number, par, handicap_rank FROM course_hole WHERE course_id = $1 ORDER BY hole_number",
        "SELECT hole_number, par, handicap_rank FROM course_hole WHERE course_id = ?1 ORDER BY hole_number",
        vec![RowValues2::Int(course_id)],
    )
    .await?;

    course.holes = holes
        .results
        .iter()
        .map(|row| CourseHole {
            hole_number: row_int32(row, "hole_number"),
            par: row_int32(row, "par"),
            handicap_rank: row_int32(row, "handicap_rank"),
        })
        .collect();

    Ok(course)
}

const MATCH_COLUMNS: &str =
    "SELECT match_id, round_number, course_id, format, team_a_id, team_b_id FROM cup_match";

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_matches(
    config_and_pool: &ConfigAndPool,
) -> Result<Vec<Match>, SqlMiddlewareDbError> {
    let query = format!("{MATCH_COLUMNS} ORDER BY round_number, match_id");
    let res = fetch_rows(config_and_pool, &query, &query, vec![]).await?;

    let mut matches = Vec::with_capacity(res.results.len());
    for row in &res.results {
        matches.push(match_from_row(config_and_pool, row).await?);
    }
    Ok(matches)
}

/// # Errors
///
/// Will return `Err` if the database query fails or the match is missing
pub async fn get_match(
    config_and_pool: &ConfigAndPool,
    match_id: i64,
) -> Result<Match, SqlMiddlewareDbError> {
    let pg_query = format!("{MATCH_COLUMNS} WHERE match_id = $1");
    let lite_query = format!("{MATCH_COLUMNS} WHERE match_id = ?1");
    let res = fetch_rows(
        config_and_pool,
        &pg_query,
        &lite_query,
        vec![RowValues2::Int(match_id)],
    )
    .await?;

    let Some(row) = res.results.first() else {
        return Err(SqlMiddlewareDbError::Other(format!(
            "match {match_id} not found"
        )));
    };
    match_from_row(config_and_pool, row).await
}

async fn match_from_row(
    config_and_pool: &ConfigAndPool,
    row: &sql_middleware::middleware::CustomDbRow,
) -> Result<Match, SqlMiddlewareDbError> {
    let match_id = row_int(row, "match_id");
    let format = MatchFormat::from_db_text(&row_text(row, "format"));

    let (side_a, side_b) = load_match_sides(config_and_pool, match_id).await?;

    Ok(Match {
        match_id,
        round_number: row_int32(row, "round_number"),
        course_id: row_int(row, "course_id"),
        format,
        team_a_id: row_int(row, "team_a_id"),
        team_b_id: row_int(row, "team_b_id"),
        side_a,
        side_b,
    })
}

async fn load_match_sides(
    config_and_pool: &ConfigAndPool,
    match_id: i64,
) -> Result<(Vec<Player>, Vec<Player>), SqlMiddlewareDbError> {
    let res = fetch_rows(
        config_and_pool,
        "SELECT p.player_id, p.team_id, p.name, p.handicap_index, mp.side \
         FROM match_player mp JOIN player p ON p.player_id = mp.player_id \
         WHERE mp.match_id = $1 ORDER BY mp.side, mp.slot",
        "SELECT p.player_id, p.team_id, p.name, p.handicap_index, mp.side \
         FROM match_player mp JOIN player p ON p.player_id = mp.player_id \
         WHERE mp.match_id = ?1 ORDER BY mp.side, mp.slot",
        vec![RowValues2::Int(match_id)],
    )
    .await?;

    let mut side_a = vec![];
    let mut side_b = vec![];
    for row in &res.results {
        let player = player_from_row(row);
        match row_text(row, "side").as_str() {
            "A" => side_a.push(player),
            "B" => side_b.push(player),
            other => {
                return Err(SqlMiddlewareDbError::Other(format!(
                    "match {match_id} has unknown side '{other}'"
                )));
            }
        }
    }
    Ok((side_a, side_b))
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_hole_scores(
    config_and_pool: &ConfigAndPool,
    match_id: i64,
) -> Result<Vec<HoleScore>, SqlMiddlewareDbError> {
    let res = fetch_rows(
        config_and_pool,
        "SELECT player_id, hole_number, gross FROM hole_score \
         WHERE match_id = $1 ORDER BY hole_number, player_id",
        "SELECT player_id, hole_number, gross FROM hole_score \
         WHERE match_id = ?1 ORDER BY hole_number, player_id",
        vec![RowValues2::Int(match_id)],
    )
    .await?;

    Ok(res
        .results
        .iter()
        .map(|row| HoleScore {
            player_id: row_int(row, "player_id"),
            hole_number: row_int32(row, "hole_number"),
            gross: row_int32(row, "gross"),
        })
        .collect())
}

/// Last write wins for a given player and hole.
///
/// # Errors
///
/// Will return `Err` if the database statement fails
pub async fn upsert_hole_score(
    config_and_pool: &ConfigAndPool,
    match_id: i64,
    score: &HoleScore,
) -> Result<(), SqlMiddlewareDbError> {
    execute_write(
        config_and_pool,
        "INSERT INTO hole_score (match_id, player_id, hole_number, gross, ins_ts) \
         VALUES ($1, $2, $3, $4, now()) \
         ON CONFLICT (match_id, player_id, hole_number) \
         DO UPDATE SET gross = excluded.gross, ins_ts = now()",
        "INSERT INTO hole_score (match_id, player_id, hole_number, gross, ins_ts) \
         VALUES (?1, ?2, ?3, ?4, datetime('now')) \
         ON CONFLICT (match_id, player_id, hole_number) \
         DO UPDATE SET gross = excluded.gross, ins_ts = datetime('now')",
        vec![
            RowValues2::Int(match_id),
            RowValues2::Int(score.player_id),
            RowValues2::Int(i64::from(score.hole_number)),
            RowValues2::Int(i64::from(score.gross)),
        ],
    )
    .await
}
