//! Audio viewer page renderer.
//!
//! A decorative badge above an inline `<audio>` element. Social preview is
//! `og:type=music.song` with `og:audio` and a Twitter `summary` card.

use maud::{Markup, PreEscaped, html};

use super::components::{self, ICON_NOTES, OgMedia, OpenGraphData};
use crate::page::MediaPage;
use crate::strings::PageStrings;

/// Render the viewer page for an audio upload.
pub fn render(page: &MediaPage, strings: &PageStrings<'_>) -> Markup {
    let description = components::og_description(page, strings);

    let og = OpenGraphData {
        title: &page.filename,
        description: &description,
        media: Some(OgMedia::Audio { url: &page.raw_url }),
        twitter_card_type: "summary",
    };

    let player = html! {
        div class="audio-wrap" {
            div class="audio-badge" { (PreEscaped(ICON_NOTES)) }
            audio controls="" autoplay="" preload="metadata" {
                source src=(page.raw_url) type=(page.content_type);
                (strings.unsupported)
            }
        }
    };

    components::media_page_shell(page, strings, og, player)
}
