//! Typed page records consumed by the renderers.
//!
//! Records are assembled once per request by the caller and consumed once;
//! the crate never caches, mutates, or stores them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::strings::StringTable;

/// Classification of an uploaded object.
///
/// Drives both the embedded player widget and the Open Graph / Twitter Card
/// tag selection. Exactly one kind applies to any object — the enum makes
/// conflicting classifications unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Inline `<video>` playback.
    Video,
    /// Inline `<audio>` playback with a decorative badge.
    Audio,
    /// Inline `<img>` preview linking to the full image.
    Image,
    /// No inline player; download only.
    Other,
}

impl MediaKind {
    /// Classify a MIME type by its top-level type prefix.
    ///
    /// `video/*` → [`Video`](Self::Video), `audio/*` → [`Audio`](Self::Audio),
    /// `image/*` → [`Image`](Self::Image), anything else → [`Other`](Self::Other).
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("video/") {
            Self::Video
        } else if content_type.starts_with("audio/") {
            Self::Audio
        } else if content_type.starts_with("image/") {
            Self::Image
        } else {
            Self::Other
        }
    }

    /// Collapse legacy per-kind boolean flags into a single kind.
    ///
    /// For callers migrating from data shapes that carry independent
    /// `is_video`/`is_audio`/`is_image` flags. The first set flag wins, in
    /// the order video, audio, image; no flag set yields
    /// [`Other`](Self::Other). Deterministic even for inputs the old shape
    /// allowed but never meant (several flags set at once).
    pub fn from_flags(is_video: bool, is_audio: bool, is_image: bool) -> Self {
        if is_video {
            Self::Video
        } else if is_audio {
            Self::Audio
        } else if is_image {
            Self::Image
        } else {
            Self::Other
        }
    }
}

/// Data for rendering the media viewer page.
#[derive(Debug, Clone)]
pub struct MediaPage {
    /// Opaque identifier of the media object.
    pub id: String,
    /// Display name of the file. Untrusted; escaped wherever it appears.
    pub filename: String,
    /// MIME type, emitted into `<source type>` and `og:video:type`.
    pub content_type: String,
    /// Object size in bytes. Carried for callers; not rendered.
    pub size_bytes: u64,
    /// Media classification selecting the player and preview tags.
    pub kind: MediaKind,
    /// Absolute or relative URL to the raw media bytes.
    pub raw_url: String,
    /// Uploader display name. `None` (or an empty string) suppresses the
    /// "uploaded by" line entirely.
    pub uploader: Option<String>,
    /// Upload timestamp, rendered as `YYYY-MM-DD HH:MM` exactly as received.
    pub uploaded_at: NaiveDateTime,
    /// Brand string shown in the header, footer, and page title.
    pub service_name: String,
    /// Locale identifier written into the `<html lang>` attribute.
    pub lang: String,
    /// Resolved localization table for this request's language.
    pub strings: StringTable,
    /// Base URL of the service, used for the canonical URL and `og:url`.
    pub base_url: String,
}

impl MediaPage {
    /// Uploader display name, treating the empty string as absent.
    pub(crate) fn uploader_name(&self) -> Option<&str> {
        self.uploader.as_deref().filter(|name| !name.is_empty())
    }
}

/// Data for the "not found" page.
#[derive(Debug, Clone)]
pub struct NotFoundPage {
    /// Brand string shown in the page title and home link.
    pub service_name: String,
    /// Locale identifier written into the `<html lang>` attribute.
    pub lang: String,
    /// Resolved localization table (`not_found`, `not_found_desc`).
    pub strings: StringTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- MediaKind::from_content_type --

    #[test]
    fn content_type_video() {
        assert_eq!(MediaKind::from_content_type("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_content_type("video/webm"), MediaKind::Video);
    }

    #[test]
    fn content_type_audio() {
        assert_eq!(MediaKind::from_content_type("audio/ogg"), MediaKind::Audio);
        assert_eq!(MediaKind::from_content_type("audio/mpeg"), MediaKind::Audio);
    }

    #[test]
    fn content_type_image() {
        assert_eq!(MediaKind::from_content_type("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_content_type("image/webp"), MediaKind::Image);
    }

    #[test]
    fn content_type_other() {
        assert_eq!(
            MediaKind::from_content_type("application/pdf"),
            MediaKind::Other
        );
        assert_eq!(MediaKind::from_content_type("text/plain"), MediaKind::Other);
        assert_eq!(MediaKind::from_content_type(""), MediaKind::Other);
    }

    #[test]
    fn content_type_requires_prefix_match() {
        // A bare top-level type without the slash is not a match.
        assert_eq!(MediaKind::from_content_type("video"), MediaKind::Other);
    }

    // -- MediaKind::from_flags --

    #[test]
    fn flags_single_kind() {
        assert_eq!(MediaKind::from_flags(true, false, false), MediaKind::Video);
        assert_eq!(MediaKind::from_flags(false, true, false), MediaKind::Audio);
        assert_eq!(MediaKind::from_flags(false, false, true), MediaKind::Image);
    }

    #[test]
    fn flags_none_set_is_other() {
        assert_eq!(MediaKind::from_flags(false, false, false), MediaKind::Other);
    }

    #[test]
    fn flags_video_beats_audio_and_image() {
        assert_eq!(MediaKind::from_flags(true, true, false), MediaKind::Video);
        assert_eq!(MediaKind::from_flags(true, false, true), MediaKind::Video);
        assert_eq!(MediaKind::from_flags(true, true, true), MediaKind::Video);
    }

    #[test]
    fn flags_audio_beats_image() {
        assert_eq!(MediaKind::from_flags(false, true, true), MediaKind::Audio);
    }

    // -- serde representation --

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MediaKind::Video).unwrap(),
            "\"video\""
        );
        assert_eq!(
            serde_json::to_string(&MediaKind::Other).unwrap(),
            "\"other\""
        );
    }

    #[test]
    fn kind_deserializes_lowercase() {
        let kind: MediaKind = serde_json::from_str("\"audio\"").unwrap();
        assert_eq!(kind, MediaKind::Audio);
    }

    // -- MediaPage::uploader_name --

    fn page_with_uploader(uploader: Option<&str>) -> MediaPage {
        MediaPage {
            id: "x".into(),
            filename: "f".into(),
            content_type: "video/mp4".into(),
            size_bytes: 0,
            kind: MediaKind::Video,
            raw_url: "/raw/x".into(),
            uploader: uploader.map(String::from),
            uploaded_at: NaiveDateTime::default(),
            service_name: "Svc".into(),
            lang: "en".into(),
            strings: StringTable::default(),
            base_url: "https://example.com".into(),
        }
    }

    #[test]
    fn uploader_name_present() {
        assert_eq!(page_with_uploader(Some("alice")).uploader_name(), Some("alice"));
    }

    #[test]
    fn uploader_name_empty_string_is_absent() {
        assert_eq!(page_with_uploader(Some("")).uploader_name(), None);
    }

    #[test]
    fn uploader_name_none_is_absent() {
        assert_eq!(page_with_uploader(None).uploader_name(), None);
    }
}
