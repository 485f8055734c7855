//! Video viewer page renderer.
//!
//! Inline `<video>` playback with autoplay and a rich social preview:
//! `og:type=video.other`, `og:video`, `og:video:type`, Twitter `player` card.

use maud::{Markup, html};

use super::components::{self, OgMedia, OpenGraphData};
use crate::page::MediaPage;
use crate::strings::PageStrings;

/// Render the viewer page for a video upload.
pub fn render(page: &MediaPage, strings: &PageStrings<'_>) -> Markup {
    let description = components::og_description(page, strings);

    let og = OpenGraphData {
        title: &page.filename,
        description: &description,
        media: Some(OgMedia::Video {
            url: &page.raw_url,
            content_type: &page.content_type,
        }),
        twitter_card_type: "player",
    };

    let player = html! {
        video controls="" autoplay="" playsinline="" preload="metadata" {
            source src=(page.raw_url) type=(page.content_type);
            (strings.unsupported)
        }
    };

    components::media_page_shell(page, strings, og, player)
}
