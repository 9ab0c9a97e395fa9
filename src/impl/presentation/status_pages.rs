use maud::{html, Markup};

use crate::entities::Route;

use super::vertical_layout::with_layout;

pub(crate) fn loading_page(active: Route) -> Markup {
    with_layout(
        active,
        html! {
            div class="content" id="loading" data-testid="loading" { "Loading..." }
        },
    )
}

/// Shows `message` as plain text under an "Erreur" title.
pub(crate) fn error_page(active: Route, message: &str) -> Markup {
    with_layout(
        active,
        html! {
            div class="content" data-testid="error-message" {
                div class="content-header" {
                    div class="content-title" { "Erreur" }
                }
                (message)
            }
        },
    )
}
