use maud::{Markup, html};

use crate::standings::{Standings, format_points};

#[must_use]
pub fn render_standings(standings: &Standings) -> Markup {
    html! {
        table class="standings-table" {
            thead {
                tr {
                    th { "Team" }
                    th { "Points" }
                    th { "Won" }
                    th { "Tied" }
                    th { "Playing" }
                }
            }
            tbody {
                @for team in &standings.teams {
                    tr data-team=(team.team_id) {
                        td class="team-name" { (team.team_name) }
                        td class="points" { (format_points(team.points)) }
                        td { (team.matches_won) }
                        td { (team.matches_tied) }
                        td { (team.matches_ongoing) }
                    }
                }
            }
        }
    }
}
