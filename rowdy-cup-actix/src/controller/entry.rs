use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use rowdy_cup_core::event::ScoreEvent;
use rowdy_cup_core::model::HoleScore;
use rowdy_cup_core::scoring::load_match_scorecard;
use rowdy_cup_core::storage::Storage;

use crate::auth::SessionStore;
use crate::events::EventBus;
use crate::storage::SqlStorage;

pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

const MIN_GROSS: i32 = 1;
const MAX_GROSS: i32 = 15;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Deserialize)]
pub struct ScoreEntry {
    pub match_id: i64,
    pub player_id: i64,
    pub hole_number: i32,
    pub gross: i32,
}

/// POST /api/login — exchange the admin password for a session token.
pub async fn login(sessions: Data<SessionStore>, body: Json<LoginRequest>) -> impl Responder {
    match sessions.login(&body.password).await {
        Some(token) => HttpResponse::Ok().json(json!({"token": token})),
        None => {
            tracing::warn!("login attempt with wrong password");
            HttpResponse::Unauthorized().json(json!({"error": "wrong password"}))
        }
    }
}

fn session_token(req: &HttpRequest) -> &str {
    req.headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// POST /api/scores — record one gross score and fan out the updates.
pub async fn enter_score(
    req: HttpRequest,
    sessions: Data<SessionStore>,
    storage: Data<SqlStorage>,
    bus: Data<EventBus>,
    body: Json<ScoreEntry>,
) -> impl Responder {
    if !sessions.validate(session_token(&req)).await {
        return HttpResponse::Unauthorized().json(json!({"error": "session token required"}));
    }

    if !(MIN_GROSS..=MAX_GROSS).contains(&body.gross) {
        return HttpResponse::BadRequest().json(json!({
            "error": format!("gross must be between {MIN_GROSS} and {MAX_GROSS}")
        }));
    }
    if !(1..=18).contains(&body.hole_number) {
        return HttpResponse::BadRequest()
            .json(json!({"error": "hole_number must be between 1 and 18"}));
    }

    let cup_match = match storage.get_match(body.match_id).await {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!("score entry for unknown match {}: {e}", body.match_id);
            return HttpResponse::NotFound().json(json!({"error": e.to_string()}));
        }
    };
    let player_known = cup_match
        .side_a
        .iter()
        .chain(cup_match.side_b.iter())
        .any(|p| p.player_id == body.player_id);
    if !player_known {
        return HttpResponse::BadRequest().json(json!({
            "error": format!("player {} is not in match {}", body.player_id, body.match_id)
        }));
    }

    let score = HoleScore {
        player_id: body.player_id,
        hole_number: body.hole_number,
        gross: body.gross,
    };
    if let Err(e) = storage.upsert_hole_score(body.match_id, score).await {
        tracing::error!("score write for match {} failed: {e}", body.match_id);
        return HttpResponse::InternalServerError().json(json!({"error": e.to_string()}));
    }

    tracing::info!(
        "match {} player {} hole {} gross {}",
        body.match_id,
        body.player_id,
        body.hole_number,
        body.gross
    );

    bus.publish(ScoreEvent::ScoreUpdated {
        match_id: body.match_id,
        player_id: body.player_id,
        hole_number: body.hole_number,
    });
    bus.publish(ScoreEvent::MatchStatusUpdated {
        match_id: body.match_id,
    });
    bus.publish(ScoreEvent::StandingsUpdated);

    match load_match_scorecard(storage.get_ref(), body.match_id).await {
        Ok(card) => HttpResponse::Ok().json(json!({"status": card.status})),
        Err(e) => {
            tracing::error!("scorecard reload for match {} failed: {e}", body.match_id);
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
