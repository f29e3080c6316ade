use maud::{Markup, html};

use crate::model::{HoleResult, MatchScorecard, PlayerCard, SideCard};

#[must_use]
pub fn render_match_scorecards(cards: &[MatchScorecard]) -> Markup {
    html! {
        @for card in cards {
            (render_match_scorecard(card))
        }
    }
}

#[must_use]
pub fn render_match_scorecard(card: &MatchScorecard) -> Markup {
    html! {
        div class="scorecard" data-match=(card.match_id) {
            (render_status_line(card))
            table class="scorecard-table" {
                thead { (render_hole_header(card)) }
                tbody {
                    (render_par_row(card))
                    (render_side_rows(card, &card.side_a))
                    (render_side_rows(card, &card.side_b))
                    (render_result_row(card))
                }
            }
        }
    }
}

fn render_status_line(card: &MatchScorecard) -> Markup {
    html! {
        h3 class="match-title" {
            "Round " (card.round_number) ": "
            (card.side_a.team_name) " vs " (card.side_b.team_name)
        }
        p class="match-status" {
            (card.side_a.team_name) " " (card.status.side_a)
            " \u{b7} "
            (card.side_b.team_name) " " (card.status.side_b)
            @if card.status.over { " (final)" }
        }
    }
}

fn render_hole_header(card: &MatchScorecard) -> Markup {
    let (front, back) = split_holes(card);
    html! {
        tr {
            th { "Hole" }
            @for idx in &front { th { (card.holes[*idx].hole_number) } }
            th class="sum" { "OUT" }
            @for idx in &back { th { (card.holes[*idx].hole_number) } }
            th class="sum" { "IN" }
            th class="sum" { "TOT" }
        }
    }
}

fn render_par_row(card: &MatchScorecard) -> Markup {
    let (front, back) = split_holes(card);
    let front_par: i32 = front.iter().map(|i| card.holes[*i].par).sum();
    let back_par: i32 = back.iter().map(|i| card.holes[*i].par).sum();
    html! {
        tr class="par-row" {
            td { "Par" }
            @for idx in &front { td { (card.holes[*idx].par) } }
            td class="sum" { (front_par) }
            @for idx in &back { td { (card.holes[*idx].par) } }
            td class="sum" { (back_par) }
            td class="sum" { (front_par + back_par) }
        }
    }
}

fn render_side_rows(card: &MatchScorecard, side: &SideCard) -> Markup {
    let (front, back) = split_holes(card);
    html! {
        @for player in &side.players {
            (render_player_row(player, &front, &back))
        }
        (render_team_net_row(side, &front, &back))
    }
}

fn render_player_row(player: &PlayerCard, front: &[usize], back: &[usize]) -> Markup {
    html! {
        tr class="player-row" data-player=(player.player_id) {
            td class="player-name" {
                (player.player_name) " (" (player.playing_handicap) ")"
            }
            @for idx in front { (render_player_cell(player, *idx)) }
            td class="sum" { (player.front_gross) }
            @for idx in back { (render_player_cell(player, *idx)) }
            td class="sum" { (player.back_gross) }
            td class="sum" { (player.total_gross) }
        }
    }
}

fn render_player_cell(player: &PlayerCard, idx: usize) -> Markup {
    let cell = &player.holes[idx];
    let class = if cell.contributing {
        "hole-cell contributing"
    } else {
        "hole-cell"
    };
    html! {
        td class=(class) {
            @match cell.gross {
                Some(gross) => { (gross) }
                None => { "\u{2013}" }
            }
            @if cell.strokes > 0 {
                sup class="stroke-dots" { ("\u{2022}".repeat(usize::try_from(cell.strokes).unwrap_or(0))) }
            }
        }
    }
}

fn render_team_net_row(side: &SideCard, front: &[usize], back: &[usize]) -> Markup {
    html! {
        tr class="team-net-row" data-team=(side.team_id) {
            td { (side.team_name) " net" }
            @for idx in front { (render_net_cell(side, *idx)) }
            td class="sum" { (side.front_net) }
            @for idx in back { (render_net_cell(side, *idx)) }
            td class="sum" { (side.back_net) }
            td class="sum" { (side.total_net) }
        }
    }
}

fn render_net_cell(side: &SideCard, idx: usize) -> Markup {
    html! {
        td class="net-cell" {
            @match side.net_by_hole[idx] {
                Some(net) => { (net) }
                None => { "\u{2013}" }
            }
        }
    }
}

fn render_result_row(card: &MatchScorecard) -> Markup {
    let (front, back) = split_holes(card);
    html! {
        tr class="result-row" {
            td { "Result" }
            @for idx in &front { td { (result_symbol(card, *idx)) } }
            td class="sum" {}
            @for idx in &back { td { (result_symbol(card, *idx)) } }
            td class="sum" {}
            td class="sum" {}
        }
    }
}

fn result_symbol(card: &MatchScorecard, idx: usize) -> &'static str {
    match card.results[idx] {
        HoleResult::SideA => "A",
        HoleResult::SideB => "B",
        HoleResult::Halved => "\u{bd}",
        HoleResult::Undetermined => "",
    }
}

/// Hole indices split at the turn, card order preserved.
fn split_holes(card: &MatchScorecard) -> (Vec<usize>, Vec<usize>) {
    let front = card
        .holes
        .iter()
        .enumerate()
        .filter(|(_, h)| h.hole_number <= 9)
        .map(|(i, _)| i)
        .collect();
    let back = card
        .holes
        .iter()
        .enumerate()
        .filter(|(_, h)| h.hole_number > 9)
        .map(|(i, _)| i)
        .collect();
    (front, back)
}
