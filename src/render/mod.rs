//! HTML rendering for media viewer pages.
//!
//! Each media kind has a specialized renderer that produces a complete HTML
//! page with the matching player widget and Open Graph / Twitter Card tags.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic escaping of every interpolated value.

pub(crate) mod components;

mod audio;
mod image;
mod not_found;
mod other;
mod video;

use maud::Markup;

use crate::error::Result;
use crate::page::{MediaKind, MediaPage, NotFoundPage};
use crate::strings::{NotFoundStrings, PageStrings};

/// Render the viewer page for an uploaded media object.
///
/// Dispatches to the kind-specific renderer. All required string-table keys
/// are resolved first, so an incomplete table fails with
/// [`RenderError::MissingStringKey`](crate::RenderError::MissingStringKey)
/// before any output is produced. Given a complete table, rendering always
/// succeeds and is byte-stable for identical input.
pub fn media_page(page: &MediaPage) -> Result<Markup> {
    let strings = PageStrings::resolve(&page.strings)?;

    tracing::debug!(id = %page.id, kind = ?page.kind, "rendering media page");

    let markup = match page.kind {
        MediaKind::Video => video::render(page, &strings),
        MediaKind::Audio => audio::render(page, &strings),
        MediaKind::Image => image::render(page, &strings),
        MediaKind::Other => other::render(page, &strings),
    };

    Ok(markup)
}

/// Render the "not found" fallback page.
pub fn not_found_page(page: &NotFoundPage) -> Result<Markup> {
    let strings = NotFoundStrings::resolve(&page.strings)?;

    tracing::debug!(service_name = %page.service_name, "rendering not-found page");

    Ok(not_found::render(page, &strings))
}
