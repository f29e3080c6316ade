use maud::{Markup, html};

use crate::HTMX_PATH;

pub const DEFAULT_INDEX_TITLE: &str = "Rowdy Cup";

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
            script src="static/scoreboard.js" defer {}
        }
        body {
            h1 { (title) }
            div id="standings" hx-get="/standings" hx-trigger="load, refresh-standings from:body" {
                img alt="Loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
            div id="scorecards" hx-get="/scorecards" hx-trigger="load, refresh-scores from:body" {}
        }
    }
}
