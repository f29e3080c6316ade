use actix_web::{App, test, web};
use serde_json::{Value, json};

use rowdy_cup_actix::auth::SessionStore;
use rowdy_cup_actix::controller;
use rowdy_cup_actix::controller::entry::SESSION_TOKEN_HEADER;
use rowdy_cup_actix::events::EventBus;
use rowdy_cup_actix::storage::SqlStorage;
use rowdy_cup_core::event::ScoreEvent;
use rowdy_cup_core::storage::Storage;

mod common;

const PASSWORD: &str = "rowdy";

fn app_pieces(storage: SqlStorage) -> (web::Data<SessionStore>, EventBus, web::Data<SqlStorage>) {
    (
        web::Data::new(SessionStore::new(PASSWORD.to_string())),
        EventBus::default(),
        web::Data::new(storage),
    )
}

macro_rules! entry_app {
    ($sessions:expr, $bus:expr, $storage:expr) => {
        test::init_service(
            App::new()
                .app_data($sessions.clone())
                .app_data(web::Data::new($bus.clone()))
                .app_data($storage.clone())
                .route("/api/login", web::post().to(controller::entry::login))
                .route("/api/scores", web::post().to(controller::entry::enter_score)),
        )
        .await
    };
}

macro_rules! login_token {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"password": PASSWORD}))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        body["token"].as_str().unwrap().to_string()
    }};
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let (storage, _pool) = common::seeded_storage("test07a").await;
    let (sessions, bus, storage) = app_pieces(storage);
    let app = entry_app!(sessions, bus, storage);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"password": "nope"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn score_entry_requires_session_token() {
    let (storage, _pool) = common::seeded_storage("test07b").await;
    let (sessions, bus, storage) = app_pieces(storage);
    let app = entry_app!(sessions, bus, storage);

    let req = test::TestRequest::post()
        .uri("/api/scores")
        .set_json(json!({"match_id": 1, "player_id": 1, "hole_number": 1, "gross": 4}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/scores")
        .insert_header((SESSION_TOKEN_HEADER, "stale-token"))
        .set_json(json!({"match_id": 1, "player_id": 1, "hole_number": 1, "gross": 4}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn score_entry_validates_ranges_and_roster() {
    let (storage, _pool) = common::seeded_storage("test07c").await;
    let (sessions, bus, storage) = app_pieces(storage);
    let app = entry_app!(sessions, bus, storage);
    let token = login_token!(app);

    let cases = [
        // gross outside 1..=15
        (json!({"match_id": 1, "player_id": 1, "hole_number": 1, "gross": 0}), 400),
        (json!({"match_id": 1, "player_id": 1, "hole_number": 1, "gross": 16}), 400),
        // hole outside 1..=18
        (json!({"match_id": 1, "player_id": 1, "hole_number": 0, "gross": 4}), 400),
        (json!({"match_id": 1, "player_id": 1, "hole_number": 19, "gross": 4}), 400),
        // Al is not in the singles match
        (json!({"match_id": 2, "player_id": 1, "hole_number": 1, "gross": 4}), 400),
        // no such match
        (json!({"match_id": 99, "player_id": 1, "hole_number": 1, "gross": 4}), 404),
    ];
    for (body, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/api/scores")
            .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
            .set_json(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), expected, "body: {body}");
    }
}

#[tokio::test]
async fn accepted_score_persists_and_fans_out_events() {
    let (storage, _pool) = common::seeded_storage("test07d").await;
    let (sessions, bus, storage) = app_pieces(storage);
    let app = entry_app!(sessions, bus, storage);
    let token = login_token!(app);

    let mut rx = bus.subscribe();

    let req = test::TestRequest::post()
        .uri("/api/scores")
        .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
        .set_json(json!({"match_id": 1, "player_id": 2, "hole_number": 1, "gross": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert!(body["status"]["side_a"].is_string());

    // event taxonomy, in publish order
    assert_eq!(
        rx.recv().await.unwrap(),
        ScoreEvent::ScoreUpdated {
            match_id: 1,
            player_id: 2,
            hole_number: 1
        }
    );
    assert_eq!(
        rx.recv().await.unwrap(),
        ScoreEvent::MatchStatusUpdated { match_id: 1 }
    );
    assert_eq!(rx.recv().await.unwrap(), ScoreEvent::StandingsUpdated);

    let scores = storage.get_hole_scores(1).await.unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].player_id, 2);
    assert_eq!(scores[0].gross, 5);

    // re-entry overwrites rather than duplicating
    let req = test::TestRequest::post()
        .uri("/api/scores")
        .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
        .set_json(json!({"match_id": 1, "player_id": 2, "hole_number": 1, "gross": 6}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let scores = storage.get_hole_scores(1).await.unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].gross, 6);
}
