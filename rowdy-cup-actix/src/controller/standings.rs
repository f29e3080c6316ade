use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use rowdy_cup_core::scoring::load_standings;
use rowdy_cup_core::view::standings::render_standings;

use crate::storage::SqlStorage;

/// GET /standings — team points table, html or json.
pub async fn standings(
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqlStorage>,
) -> impl Responder {
    let json_wanted = matches!(query.get("json").map(String::as_str), Some("1" | "true"));

    match load_standings(storage.get_ref()).await {
        Ok(standings) => {
            if json_wanted {
                HttpResponse::Ok().json(standings)
            } else {
                let markup = render_standings(&standings);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => {
            tracing::error!("standings failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
