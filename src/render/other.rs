//! Fallback renderer for objects with no inline player.
//!
//! An icon placeholder with the localized "unsupported" message; the file
//! is still downloadable through the actions row. Only the type-independent
//! Open Graph tags are emitted.

use maud::{Markup, PreEscaped, html};

use super::components::{self, ICON_FILE, OpenGraphData};
use crate::page::MediaPage;
use crate::strings::PageStrings;

/// Render the viewer page for an unsupported file type.
pub fn render(page: &MediaPage, strings: &PageStrings<'_>) -> Markup {
    let description = components::og_description(page, strings);

    let og = OpenGraphData {
        title: &page.filename,
        description: &description,
        media: None,
        twitter_card_type: "summary",
    };

    let player = html! {
        div class="file-placeholder" {
            (PreEscaped(ICON_FILE))
            p { (strings.unsupported) }
        }
    };

    components::media_page_shell(page, strings, og, player)
}
