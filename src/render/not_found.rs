//! "Not found" page renderer.
//!
//! A minimal page for share links whose media object no longer exists (or
//! never did): icon, localized heading and description, and a link back to
//! the service root. No branching beyond string substitution.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::components::{ICON_SAD, NOT_FOUND_CSS, THEME_BOOT_JS};
use crate::page::NotFoundPage;
use crate::strings::NotFoundStrings;

/// Render the "not found" page.
pub fn render(page: &NotFoundPage, strings: &NotFoundStrings<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(page.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (strings.not_found) " - " (page.service_name) }
                meta name="robots" content="noindex";
                script { (PreEscaped(THEME_BOOT_JS)) }
                style { (PreEscaped(NOT_FOUND_CSS)) }
            }
            body {
                main class="not-found" {
                    (PreEscaped(ICON_SAD))
                    h1 { (strings.not_found) }
                    p { (strings.not_found_desc) }
                    a class="home-link" href="/" { (page.service_name) }
                }
            }
        }
    }
}
