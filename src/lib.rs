//! Sharepage - self-contained HTML viewer pages for uploaded media.
//!
//! This crate renders the viewer page shown when someone opens a share link
//! for an uploaded media object (video, audio, image, or generic file), plus
//! a fallback "not found" page. The caller (HTTP layer, storage layer, i18n
//! loader) assembles a fully-resolved [`MediaPage`] or [`NotFoundPage`]
//! record per request; the renderer returns a complete HTML document.
//!
//! # Architecture
//!
//! - **Page data**: typed records in [`page`] — media kind is a single
//!   [`MediaKind`] enum, so an object is exactly one of video/audio/image/other.
//! - **Strings**: [`StringTable`] holds the resolved localization table for
//!   one language. Lookups fail loudly — a missing key aborts the render
//!   with [`RenderError::MissingStringKey`] before any output is produced.
//! - **Render**: [`render`] generates HTML with [maud](https://maud.lambda.xyz/)
//!   (compile-time templates) and selects the player widget, Open Graph tags,
//!   and Twitter card type from the media kind.
//!
//! Both renderers are pure: record in, markup out, no I/O and no shared
//! state. Templates are compiled into the binary, so concurrent renders
//! need no locking and a malformed template is a build error rather than a
//! runtime one.
//!
//! # Security
//!
//! All dynamic values (filename, uploader name, service name, URLs, MIME
//! types) are escaped by maud for their text or attribute context. The
//! pages need inline CSS and a small inline script for theme toggling and
//! copy-to-clipboard; [`CSP_HEADER`] documents a matching
//! Content-Security-Policy the HTTP layer can attach.
//!
//! # Example
//!
//! ```no_run
//! use sharepage::{MediaKind, MediaPage, StringTable};
//!
//! # fn table() -> StringTable { StringTable::default() }
//! let page = MediaPage {
//!     id: "a1b2c3".into(),
//!     filename: "clip.mp4".into(),
//!     content_type: "video/mp4".into(),
//!     size_bytes: 1_048_576,
//!     kind: MediaKind::from_content_type("video/mp4"),
//!     raw_url: "/raw/a1b2c3".into(),
//!     uploader: Some("alice".into()),
//!     uploaded_at: chrono::NaiveDateTime::default(),
//!     service_name: "Mediashare".into(),
//!     lang: "en".into(),
//!     strings: table(),
//!     base_url: "https://share.example.com".into(),
//! };
//! let html = sharepage::render::media_page(&page)?.into_string();
//! # Ok::<(), sharepage::RenderError>(())
//! ```

pub mod error;
pub mod page;
pub mod render;
pub mod strings;

pub use error::RenderError;
pub use page::{MediaKind, MediaPage, NotFoundPage};
pub use render::components::CSP_HEADER;
pub use render::{media_page, not_found_page};
pub use strings::StringTable;
