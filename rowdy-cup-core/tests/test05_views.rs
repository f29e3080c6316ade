use rowdy_cup_core::model::{Course, CourseHole, HoleScore, Match, MatchFormat, Player, Team};
use rowdy_cup_core::scoring::assemble_scorecard;
use rowdy_cup_core::standings::{compute_standings, format_points};
use rowdy_cup_core::view::index::render_index_template;
use rowdy_cup_core::view::scorecard::render_match_scorecard;
use rowdy_cup_core::view::standings::render_standings;
use scraper::{Html, Selector};

fn course() -> Course {
    let holes = (1..=18)
        .map(|n| CourseHole {
            hole_number: n,
            par: 4,
            handicap_rank: n,
        })
        .collect();
    Course {
        course_id: 1,
        name: "Sand Hollow".to_string(),
        slope_rating: 113.0,
        course_rating: 72.0,
        par: 72,
        holes,
    }
}

fn teams() -> Vec<Team> {
    vec![
        Team {
            team_id: 1,
            name: "Aces".to_string(),
        },
        Team {
            team_id: 2,
            name: "Birdies".to_string(),
        },
    ]
}

fn sample_match() -> Match {
    let player = |player_id, team_id, name: &str, handicap_index| Player {
        player_id,
        team_id,
        name: name.to_string(),
        handicap_index,
    };
    Match {
        match_id: 10,
        round_number: 1,
        course_id: 1,
        format: MatchFormat::BestBall,
        team_a_id: 1,
        team_b_id: 2,
        side_a: vec![player(1, 1, "Al", 0.0), player(2, 1, "Andy", 10.0)],
        side_b: vec![player(3, 2, "Bob", 2.0), player(4, 2, "Bill", 20.0)],
    }
}

fn scores() -> Vec<HoleScore> {
    vec![
        HoleScore {
            player_id: 1,
            hole_number: 1,
            gross: 4,
        },
        HoleScore {
            player_id: 2,
            hole_number: 1,
            gross: 6,
        },
        HoleScore {
            player_id: 3,
            hole_number: 1,
            gross: 6,
        },
        HoleScore {
            player_id: 4,
            hole_number: 1,
            gross: 6,
        },
    ]
}

#[test]
fn scorecard_table_renders_players_and_status() {
    let card = assemble_scorecard(&sample_match(), &course(), &scores(), &teams());
    let markup = render_match_scorecard(&card).into_string();
    let html = Html::parse_fragment(&markup);

    let table_sel = Selector::parse("table.scorecard-table").unwrap();
    assert_eq!(html.select(&table_sel).count(), 1);

    let player_sel = Selector::parse("tr.player-row").unwrap();
    assert_eq!(html.select(&player_sel).count(), 4);

    let net_sel = Selector::parse("tr.team-net-row").unwrap();
    assert_eq!(html.select(&net_sel).count(), 2);

    // hole 1: side A nets 4, side B nets 5 -> side A leads
    let status_sel = Selector::parse("p.match-status").unwrap();
    let status_text = html
        .select(&status_sel)
        .next()
        .unwrap()
        .text()
        .collect::<String>();
    assert!(status_text.contains("Aces 1 UP"), "got: {status_text}");
    assert!(status_text.contains("Birdies 1 DN"), "got: {status_text}");

    // Al's par contributes on hole 1
    let contrib_sel = Selector::parse("td.contributing").unwrap();
    assert!(html.select(&contrib_sel).count() >= 1);

    // stroke dots show up for stroke receivers
    let dots_sel = Selector::parse("sup.stroke-dots").unwrap();
    assert!(html.select(&dots_sel).count() > 0);
}

#[test]
fn standings_table_shows_half_points() {
    let mut card_one = assemble_scorecard(&sample_match(), &course(), &[], &teams());
    // tie: half a point each
    card_one.status = rowdy_cup_core::scoring::match_play_status(9, 9, 18);
    let standings = compute_standings(&teams(), &[card_one]);
    assert_eq!(standings.teams[0].points, 0.5);

    let markup = render_standings(&standings).into_string();
    let html = Html::parse_fragment(&markup);
    let points_sel = Selector::parse("td.points").unwrap();
    let first_points = html
        .select(&points_sel)
        .next()
        .unwrap()
        .text()
        .collect::<String>();
    assert_eq!(first_points, "\u{bd}");
}

#[test]
fn points_format_uses_half_glyph() {
    assert_eq!(format_points(0.0), "0");
    assert_eq!(format_points(0.5), "\u{bd}");
    assert_eq!(format_points(3.0), "3");
    assert_eq!(format_points(6.5), "6\u{bd}");
}

#[test]
fn index_template_wires_up_refresh_targets() {
    let markup = render_index_template("Rowdy Cup 2026").into_string();
    let html = Html::parse_document(&markup);
    assert!(
        Selector::parse("div#standings")
            .map(|sel| html.select(&sel).count() == 1)
            .unwrap_or(false)
    );
    assert!(
        Selector::parse("div#scorecards")
            .map(|sel| html.select(&sel).count() == 1)
            .unwrap_or(false)
    );
    assert!(markup.contains("htmx"));
}
