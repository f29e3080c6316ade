//! Assembles one match's full derived view from the current gross
//! scores. Everything is recomputed from scratch on every call; no
//! derived value is ever stored.

use ahash::RandomState;
use std::collections::HashMap;

use crate::model::{
    Course, CourseHole, HoleCell, HoleScore, Match, MatchScorecard, Player, PlayerCard, SideCard,
    Team,
};
use crate::scoring::best_ball::{best_ball_net, contributing_slot, hole_result};
use crate::scoring::handicap::{course_handicap, playing_handicap, strokes_received};
use crate::scoring::match_play::{count_results, match_play_status};
use crate::scoring::net::net_score_opt;
use crate::scoring::strokes::strokes_on_hole;

type GrossMap = HashMap<(i64, i32), i32, RandomState>;

#[must_use]
pub fn assemble_scorecard(
    golf_match: &Match,
    course: &Course,
    scores: &[HoleScore],
    teams: &[Team],
) -> MatchScorecard {
    let holes = ordered_holes(course);
    let allowance_pct = golf_match.format.allowance_pct();

    let lowest = golf_match
        .side_a
        .iter()
        .chain(&golf_match.side_b)
        .map(|p| player_playing_handicap(p, course, allowance_pct))
        .min()
        .unwrap_or(0);

    let gross: GrossMap = scores
        .iter()
        .map(|s| ((s.player_id, s.hole_number), s.gross))
        .collect();

    let mut side_a = build_side(
        &golf_match.side_a,
        golf_match.team_a_id,
        course,
        allowance_pct,
        lowest,
        &holes,
        &gross,
        teams,
    );
    let mut side_b = build_side(
        &golf_match.side_b,
        golf_match.team_b_id,
        course,
        allowance_pct,
        lowest,
        &holes,
        &gross,
        teams,
    );

    apply_team_nets(&mut side_a, &holes);
    apply_team_nets(&mut side_b, &holes);

    let results: Vec<_> = side_a
        .net_by_hole
        .iter()
        .zip(&side_b.net_by_hole)
        .map(|(a, b)| hole_result(*a, *b))
        .collect();

    let (side_a_wins, side_b_wins, holes_played) = count_results(&results);
    let status = match_play_status(side_a_wins, side_b_wins, holes_played);

    MatchScorecard {
        match_id: golf_match.match_id,
        round_number: golf_match.round_number,
        format: golf_match.format,
        holes,
        side_a,
        side_b,
        results,
        status,
    }
}

fn ordered_holes(course: &Course) -> Vec<CourseHole> {
    let mut holes = course.holes.clone();
    holes.sort_by_key(|h| h.hole_number);
    holes
}

fn player_playing_handicap(player: &Player, course: &Course, allowance_pct: f64) -> i32 {
    let ch = course_handicap(
        player.handicap_index,
        course.slope_rating,
        course.course_rating,
        course.par,
    );
    playing_handicap(ch, allowance_pct)
}

#[allow(clippy::too_many_arguments)]
fn build_side(
    players: &[Player],
    team_id: i64,
    course: &Course,
    allowance_pct: f64,
    lowest_playing: i32,
    holes: &[CourseHole],
    gross: &GrossMap,
    teams: &[Team],
) -> SideCard {
    let cards = players
        .iter()
        .map(|player| build_player_card(player, course, allowance_pct, lowest_playing, holes, gross))
        .collect();

    let team_name = teams
        .iter()
        .find(|t| t.team_id == team_id)
        .map(|t| t.name.clone())
        .unwrap_or_default();

    SideCard {
        team_id,
        team_name,
        players: cards,
        net_by_hole: vec![None; holes.len()],
        front_net: 0,
        back_net: 0,
        total_net: 0,
    }
}

fn build_player_card(
    player: &Player,
    course: &Course,
    allowance_pct: f64,
    lowest_playing: i32,
    holes: &[CourseHole],
    gross: &GrossMap,
) -> PlayerCard {
    let ch = course_handicap(
        player.handicap_index,
        course.slope_rating,
        course.course_rating,
        course.par,
    );
    let ph = playing_handicap(ch, allowance_pct);
    let received = strokes_received(ph, lowest_playing);

    let cells: Vec<HoleCell> = holes
        .iter()
        .map(|hole| {
            let strokes = strokes_on_hole(received, hole.handicap_rank);
            let gross_score = gross.get(&(player.player_id, hole.hole_number)).copied();
            HoleCell {
                gross: gross_score,
                net: net_score_opt(gross_score, strokes),
                strokes,
                contributing: false,
            }
        })
        .collect();

    let (front_gross, back_gross) = nine_sums(holes, &cells, |cell| cell.gross);

    PlayerCard {
        player_id: player.player_id,
        player_name: player.name.clone(),
        course_handicap: ch,
        playing_handicap: ph,
        strokes_received: received,
        holes: cells,
        front_gross,
        back_gross,
        total_gross: front_gross + back_gross,
    }
}

/// Fill in the team net per hole and flag the contributing player.
fn apply_team_nets(side: &mut SideCard, holes: &[CourseHole]) {
    for idx in 0..holes.len() {
        let nets: Vec<Option<i32>> = side.players.iter().map(|p| p.holes[idx].net).collect();
        side.net_by_hole[idx] = best_ball_net(&nets);
        if let Some(slot) = contributing_slot(&nets) {
            side.players[slot].holes[idx].contributing = true;
        }
    }

    let mut front_net = 0;
    let mut back_net = 0;
    for (hole, net) in holes.iter().zip(&side.net_by_hole) {
        if let Some(net) = net {
            if hole.hole_number <= 9 {
                front_net += net;
            } else {
                back_net += net;
            }
        }
    }
    side.front_net = front_net;
    side.back_net = back_net;
    side.total_net = front_net + back_net;
}

/// Front/back sums over entered holes only, split at hole 9.
fn nine_sums<F>(holes: &[CourseHole], cells: &[HoleCell], pick: F) -> (i32, i32)
where
    F: Fn(&HoleCell) -> Option<i32>,
{
    let mut front = 0;
    let mut back = 0;
    for (hole, cell) in holes.iter().zip(cells) {
        if let Some(value) = pick(cell) {
            if hole.hole_number <= 9 {
                front += value;
            } else {
                back += value;
            }
        }
    }
    (front, back)
}
