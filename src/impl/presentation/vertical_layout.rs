use maud::{html, Markup, PreEscaped};

use crate::entities::Route;

const WINDOW_ICON: &str = r#"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="6" width="24" height="20" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><path d="M4 11h24" stroke="currentColor" stroke-width="2"/></svg>"#;
const MAIL_ICON: &str = r#"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="8" width="24" height="16" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><path d="M4 9l12 9 12-9" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;
const DISCONNECT_ICON: &str = r#"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><path d="M13 6H7v20h6M20 10l6 6-6 6M26 16H12" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;

/// Left navigation bar. The icon of the current page carries `active-icon`.
pub(crate) fn vertical_layout(active: Route) -> Markup {
    let class_for = |route: Route| {
        if route == active {
            "layout-icon active-icon"
        } else {
            "layout-icon"
        }
    };
    html! {
        div class="vertical-navbar" {
            div class="layout-title" {
                span class="highlighted" { "Billed" }
            }
            div id="layout-icon1" data-testid="icon-window" data-route=(Route::Bills.path())
                class=(class_for(Route::Bills)) {
                (PreEscaped(WINDOW_ICON))
            }
            div id="layout-icon2" data-testid="icon-mail" data-route=(Route::NewBill.path())
                class=(class_for(Route::NewBill)) {
                (PreEscaped(MAIL_ICON))
            }
            div id="layout-disconnect" data-testid="layout-disconnect" {
                (PreEscaped(DISCONNECT_ICON))
            }
        }
    }
}

/// Full page: navigation bar on the left, `content` on the right.
pub(crate) fn with_layout(active: Route, content: Markup) -> Markup {
    html! {
        div class="layout" {
            (vertical_layout(active))
            (content)
        }
    }
}
