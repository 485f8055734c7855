//! Image viewer page renderer.
//!
//! Inline `<img>` preview wrapped in a link that opens the full image in a
//! new tab. Social preview is `og:type=website` with `og:image` and a
//! Twitter `summary_large_image` card.

use maud::{Markup, html};

use super::components::{self, OgMedia, OpenGraphData};
use crate::page::MediaPage;
use crate::strings::PageStrings;

/// Render the viewer page for an image upload.
pub fn render(page: &MediaPage, strings: &PageStrings<'_>) -> Markup {
    let description = components::og_description(page, strings);

    let og = OpenGraphData {
        title: &page.filename,
        description: &description,
        media: Some(OgMedia::Image { url: &page.raw_url }),
        twitter_card_type: "summary_large_image",
    };

    let player = html! {
        a href=(page.raw_url) target="_blank" class="image-link" {
            img class="media-image" src=(page.raw_url) alt=(page.filename) loading="eager";
        }
    };

    components::media_page_shell(page, strings, og, player)
}
