use actix_web::{App, test, web};
use scraper::{Html, Selector};
use serde_json::Value;

use rowdy_cup_actix::controller;
use rowdy_cup_core::model::HoleScore;
use rowdy_cup_core::storage::Storage;

mod common;

#[tokio::test]
async fn scorecard_endpoint_returns_json_card() {
    let (storage, _pool) = common::seeded_storage("test06a").await;

    // hole 1 of the best-ball match: side A nets 4, side B nets 5
    for (player_id, gross) in [(1, 4), (2, 6), (3, 6), (4, 6)] {
        storage
            .upsert_hole_score(
                1,
                HoleScore {
                    player_id,
                    hole_number: 1,
                    gross,
                },
            )
            .await
            .unwrap();
    }

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .route("/scorecard", web::get().to(controller::score::scorecard)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/scorecard?match=1&json=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["match_id"], 1);
    assert_eq!(body["format"], "best_ball");
    assert_eq!(body["status"]["side_a"], "1 UP");
    assert_eq!(body["status"]["side_b"], "1 DN");
    assert_eq!(body["results"][0], "side_a");
    assert_eq!(body["side_a"]["players"][1]["playing_handicap"], 9);
    assert_eq!(body["side_b"]["players"][1]["strokes_received"], 18);
}

#[tokio::test]
async fn scorecard_endpoint_requires_match_param() {
    let (storage, _pool) = common::seeded_storage("test06b").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .route("/scorecard", web::get().to(controller::score::scorecard)),
    )
    .await;

    let req = test::TestRequest::get().uri("/scorecard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scorecards_endpoint_renders_all_matches() {
    let (storage, _pool) = common::seeded_storage("test06c").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .route("/scorecards", web::get().to(controller::score::scorecards)),
    )
    .await;

    let req = test::TestRequest::get().uri("/scorecards").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = Html::parse_fragment(&String::from_utf8_lossy(&body));
    let card_sel = Selector::parse("div.scorecard").unwrap();
    assert_eq!(html.select(&card_sel).count(), 2);
    let table_sel = Selector::parse("table.scorecard-table").unwrap();
    assert_eq!(html.select(&table_sel).count(), 2);
}

#[tokio::test]
async fn standings_endpoint_reports_points() {
    let (storage, _pool) = common::seeded_storage("test06d").await;

    // Bob closes out Andy early: up 10 after ten holes of the singles match
    for hole in 1..=10 {
        storage
            .upsert_hole_score(
                2,
                HoleScore {
                    player_id: 2,
                    hole_number: hole,
                    gross: 7,
                },
            )
            .await
            .unwrap();
        storage
            .upsert_hole_score(
                2,
                HoleScore {
                    player_id: 3,
                    hole_number: hole,
                    gross: 4,
                },
            )
            .await
            .unwrap();
    }

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .route("/standings", web::get().to(controller::standings::standings)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/standings?json=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let teams = body["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 2);
    // Birdies lead with the closed-out singles point
    assert_eq!(teams[0]["team_name"], "Birdies");
    assert_eq!(teams[0]["points"], 1.0);
    assert_eq!(teams[0]["matches_won"], 1);
    assert_eq!(teams[1]["points"], 0.0);
    assert_eq!(teams[1]["matches_ongoing"], 1);
}
