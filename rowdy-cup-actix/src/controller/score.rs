use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use rowdy_cup_core::scoring::{load_all_scorecards, load_match_scorecard};
use rowdy_cup_core::view::scorecard::{render_match_scorecard, render_match_scorecards};

use crate::storage::SqlStorage;

// Helper function to get a query parameter with a default value
fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map(String::as_str).unwrap_or("")
}

fn json_wanted(query: &HashMap<String, String>) -> bool {
    match get_param_str(query, "json") {
        "1" => true,
        "0" => false,
        other => other.parse().unwrap_or(false), // Default to false
    }
}

/// GET /scorecard?match=<id> — one match, html or json.
pub async fn scorecard(
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqlStorage>,
) -> impl Responder {
    let match_str = query
        .get("match")
        .unwrap_or(&String::new())
        .trim()
        .to_string();
    let match_id: i64 = match match_str.parse() {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({"error": "match parameter is required"}));
        }
    };

    match load_match_scorecard(storage.get_ref(), match_id).await {
        Ok(card) => {
            if json_wanted(&query) {
                HttpResponse::Ok().json(card)
            } else {
                let markup = render_match_scorecard(&card);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => {
            tracing::error!("scorecard for match {match_id} failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

/// GET /scorecards — every match on one board, html or json.
pub async fn scorecards(
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqlStorage>,
) -> impl Responder {
    match load_all_scorecards(storage.get_ref()).await {
        Ok(cards) => {
            if json_wanted(&query) {
                HttpResponse::Ok().json(cards)
            } else {
                let markup = render_match_scorecards(&cards);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => {
            tracing::error!("scorecards failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
