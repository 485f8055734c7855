//! Shared HTML components for the viewer pages.
//!
//! The page shell, static CSS/JS, inline SVG icons, and the Open Graph data
//! carrier. All dynamic values pass through maud and are escaped for their
//! text or attribute context.

use chrono::NaiveDateTime;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::page::MediaPage;
use crate::strings::PageStrings;

/// Inline CSS for the viewer page.
///
/// Self-contained, CSS-variable theming. Light values on `:root`, dark
/// overrides on `html.dark` — class-based because the theme toggle must be
/// able to override the OS preference.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f6f7f9;--fg:#16181d;--fg2:#555b66;--fg3:#8a8f98;--accent:#0284c7;--accent-hover:#0369a1;--surface:#fff;--border:rgba(2,132,199,.16);--player-bg:#000}
html.dark{--bg:#0b0d12;--fg:#e6e8ec;--fg2:#a0a4ad;--fg3:#686d76;--accent:#38bdf8;--accent-hover:#7dd3fc;--surface:#14161c;--border:rgba(56,189,248,.22)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;transition:background .3s,color .3s}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
svg.icon{width:20px;height:20px;fill:currentColor;stroke:none;vertical-align:-4px;flex-shrink:0}

.site-header{position:sticky;top:0;z-index:10;display:flex;align-items:center;justify-content:space-between;padding:.75rem 1.25rem;background:var(--surface);border-bottom:1px solid var(--border)}
.brand{display:flex;align-items:center;gap:.5rem;font-weight:600;font-size:1.05rem;color:var(--accent)}
.brand:hover{text-decoration:none;color:var(--accent-hover)}
.theme-toggle{background:none;border:none;cursor:pointer;color:var(--fg2);padding:.4rem;border-radius:8px;display:flex;align-items:center}
.theme-toggle:hover{background:var(--bg);color:var(--fg)}
.only-dark{display:none}
.only-light{display:flex}
html.dark .only-dark{display:flex}
html.dark .only-light{display:none}

main{flex:1;width:100%;max-width:860px;margin:0 auto;padding:1.5rem 1rem 3rem}
.card{background:var(--surface);border:1px solid var(--border);border-radius:14px;overflow:hidden}
.player{background:var(--player-bg);display:flex;align-items:center;justify-content:center;min-height:300px}
video,audio{max-height:70vh;width:100%;display:block}
.audio-wrap{width:100%;padding:2rem;display:flex;flex-direction:column;align-items:center;gap:1.5rem}
.audio-badge{width:7rem;height:7rem;border-radius:50%;background:linear-gradient(135deg,var(--accent),var(--accent-hover));display:flex;align-items:center;justify-content:center;color:#fff}
.audio-badge svg.icon{width:3rem;height:3rem}
.audio-wrap audio{max-width:28rem}
.image-link{display:block;width:100%}
.media-image{display:block;width:100%;max-height:80vh;object-fit:contain}
.file-placeholder{padding:2.5rem;text-align:center;color:var(--fg3)}
.file-placeholder svg.icon{width:4rem;height:4rem;margin-bottom:1rem}

.info{padding:1.25rem 1.5rem;display:flex;flex-direction:column;gap:1rem}
.filename{font-size:1.25rem;font-weight:600;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.meta{display:flex;flex-wrap:wrap;gap:1.25rem;font-size:.9rem;color:var(--fg2)}
.meta-item{display:flex;align-items:center;gap:.45rem}
.meta-item svg.icon{width:16px;height:16px}
.meta-item strong{color:var(--fg);font-weight:600}

.actions{display:flex;flex-wrap:wrap;gap:.75rem}
.btn{display:inline-flex;align-items:center;gap:.5rem;padding:.55rem 1.1rem;border-radius:8px;font-size:.92rem;font-weight:500;border:none;cursor:pointer;transition:background .15s}
.btn svg.icon{width:18px;height:18px}
.btn-primary{background:var(--accent);color:#fff}
.btn-primary:hover{background:var(--accent-hover);text-decoration:none}
.btn-secondary{background:var(--bg);color:var(--fg);border:1px solid var(--border)}
.btn-secondary:hover{background:var(--border);text-decoration:none}
.btn.copied{animation:copy-pulse .5s ease-in-out}
@keyframes copy-pulse{0%,100%{transform:scale(1)}50%{transform:scale(1.06)}}

.footer{padding:.85rem;text-align:center;font-size:.85rem;color:var(--fg3);border-top:1px solid var(--border);background:var(--surface)}
.footer strong{color:var(--fg2)}

.fade-in{animation:fade-in .3s ease-in-out}
@keyframes fade-in{from{opacity:0;transform:translateY(10px)}to{opacity:1;transform:translateY(0)}}
"#;

/// Inline CSS for the "not found" page.
pub const NOT_FOUND_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f6f7f9;--fg:#16181d;--fg2:#555b66;--fg3:#8a8f98;--accent:#0284c7;--accent-hover:#0369a1}
html.dark{--bg:#0b0d12;--fg:#e6e8ec;--fg2:#a0a4ad;--fg3:#686d76;--accent:#38bdf8;--accent-hover:#7dd3fc}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;align-items:center;justify-content:center;min-height:100vh;background:var(--bg);color:var(--fg);padding:1rem}
.not-found{text-align:center;max-width:26rem}
.not-found svg.icon{width:6rem;height:6rem;fill:var(--fg3)}
.not-found h1{font-size:1.9rem;margin:1rem 0 .5rem}
.not-found p{color:var(--fg2);margin-bottom:2rem;line-height:1.5}
.home-link{display:inline-block;padding:.7rem 1.5rem;background:var(--accent);color:#fff;border-radius:8px;font-weight:500;text-decoration:none}
.home-link:hover{background:var(--accent-hover);text-decoration:none}
"#;

/// Theme bootstrap, placed in `<head>` so the class lands before first paint.
///
/// Stored preference wins; with no stored preference the OS preference is
/// used.
pub const THEME_BOOT_JS: &str = r#"
if(localStorage.theme==="dark"||(!("theme" in localStorage)&&window.matchMedia("(prefers-color-scheme: dark)").matches)){document.documentElement.classList.add("dark")}
"#;

/// Page script: theme toggle persistence and copy-to-clipboard feedback.
///
/// The localized "copied" text travels on the button's `data-copied-label`
/// attribute, so no localized string is ever spliced into script source.
pub const PAGE_JS: &str = r#"
function toggleTheme(){
  const dark=document.documentElement.classList.toggle("dark");
  localStorage.theme=dark?"dark":"light";
}
function copyLink(){
  navigator.clipboard.writeText(window.location.href).then(()=>{
    const btn=document.getElementById("copy-btn");
    const label=document.getElementById("copy-label");
    const original=label.textContent;
    label.textContent=btn.dataset.copiedLabel;
    btn.classList.add("copied");
    setTimeout(()=>{label.textContent=original;btn.classList.remove("copied");},2000);
  });
}
"#;

/// Content-Security-Policy header value matching what the pages need.
///
/// Inline style and a small inline script; media and images may come from
/// the service itself or any http(s) origin. The HTTP layer may attach this
/// when serving rendered pages.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src https: http: data:; media-src https: http: 'self'; connect-src 'self'; form-action 'none'; frame-ancestors 'none'";

// -- Phosphor icon SVGs (fill variants) --

/// Film strip icon, used as the service logo in the header.
const ICON_FILM: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M216,40H40A16,16,0,0,0,24,56V200a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A16,16,0,0,0,216,40ZM64,200H40V176H64Zm0-40H40V136H64Zm0-40H40V96H64Zm0-40H40V56H64Zm128,80H64V96H192Zm24,40H192V176h24Zm0-40H192V136h24Zm0-40H192V96h24Zm0-40H192V56h24Z"/></svg>"#;

/// Sun icon shown on the theme toggle in dark mode.
const ICON_SUN: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M128,60a68,68,0,1,0,68,68A68.07,68.07,0,0,0,128,60Zm8-28V16a8,8,0,0,0-16,0V32a8,8,0,0,0,16,0Zm-8,192a8,8,0,0,0-8,8v16a8,8,0,0,0,16,0V232A8,8,0,0,0,128,224ZM48,128a8,8,0,0,0-8-8H24a8,8,0,0,0,0,16H40A8,8,0,0,0,48,128Zm184-8H216a8,8,0,0,0,0,16h16a8,8,0,0,0,0-16ZM58.34,69.66A8,8,0,0,0,69.66,58.34l-12-12A8,8,0,0,0,46.34,57.66Zm139.32,116.68a8,8,0,0,0-11.32,11.32l12,12a8,8,0,0,0,11.32-11.32ZM58.34,186.34l-12,12a8,8,0,0,0,11.32,11.32l12-12a8,8,0,0,0-11.32-11.32ZM192,72a8,8,0,0,0,5.66-2.34l12-12a8,8,0,0,0-11.32-11.32l-12,12A8,8,0,0,0,192,72Z"/></svg>"#;

/// Moon icon shown on the theme toggle in light mode.
const ICON_MOON: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M233.54,142.23a8,8,0,0,0-8-2,88.08,88.08,0,0,1-109.8-109.8,8,8,0,0,0-10-10,104.84,104.84,0,0,0-52.91,37A104,104,0,0,0,136,224a103.09,103.09,0,0,0,62.52-20.88,104.84,104.84,0,0,0,37-52.91A8,8,0,0,0,233.54,142.23Z"/></svg>"#;

/// User icon on the uploader line.
const ICON_USER: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M230.92,212c-15.23-26.33-38.7-45.21-66.09-54.16a72,72,0,1,0-73.66,0C63.78,166.78,40.31,185.66,25.08,212a8,8,0,1,0,13.85,8c18.84-32.56,52.14-52,89.07-52s70.23,19.44,89.07,52a8,8,0,1,0,13.85-8Z"/></svg>"#;

/// Clock icon on the upload-time line.
const ICON_CLOCK: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm64,112H128a8,8,0,0,1-8-8V64a8,8,0,0,1,16,0v56h56a8,8,0,0,1,0,16Z"/></svg>"#;

/// Download icon (Phosphor download-simple, fill).
const ICON_DOWNLOAD: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M224,144v64a8,8,0,0,1-8,8H40a8,8,0,0,1-8-8V144a8,8,0,0,1,16,0v56H208V144a8,8,0,0,1,16,0Zm-101.66,5.66a8,8,0,0,0,11.32,0l40-40a8,8,0,0,0-11.32-11.32L136,124.69V32a8,8,0,0,0-16,0v92.69L93.66,98.34a8,8,0,0,0-11.32,11.32Z"/></svg>"#;

/// Copy icon (Phosphor copy, fill).
const ICON_COPY: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M216,32H88a8,8,0,0,0-8,8V80H40a8,8,0,0,0-8,8V216a8,8,0,0,0,8,8H168a8,8,0,0,0,8-8V176h40a8,8,0,0,0,8-8V40A8,8,0,0,0,216,32Zm-56,176H48V96H160Zm48-48H176V88a8,8,0,0,0-8-8H96V48H208Z"/></svg>"#;

/// Arrow square out icon (Phosphor arrow-square-out, fill).
const ICON_EXTERNAL: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M228,104a12,12,0,0,1-24,0V69l-59.51,59.51a12,12,0,0,1-17-17L187,52H152a12,12,0,0,1,0-24h64a12,12,0,0,1,12,12Zm-44,44a12,12,0,0,0-12,12v52H52V92h52a12,12,0,0,0,0-24H48A20,20,0,0,0,28,88V216a20,20,0,0,0,20,20H176a20,20,0,0,0,20-20V160A12,12,0,0,0,184,148Z"/></svg>"#;

/// Music notes icon on the audio badge.
pub(crate) const ICON_NOTES: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M212.92,25.69a8,8,0,0,0-6.86-1.45l-128,32A8,8,0,0,0,72,64V174.08A36,36,0,1,0,88,204V110.25l112-28v59.83A36,36,0,1,0,216,172V32A8,8,0,0,0,212.92,25.69Z"/></svg>"#;

/// Plain file icon for objects with no inline player.
pub(crate) const ICON_FILE: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M213.66,82.34l-56-56A8,8,0,0,0,152,24H56A16,16,0,0,0,40,40V216a16,16,0,0,0,16,16H200a16,16,0,0,0,16-16V88A8,8,0,0,0,213.66,82.34ZM152,88V44l44,44Z"/></svg>"#;

/// Sad face icon for the "not found" page.
pub(crate) const ICON_SAD: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24ZM92,96a12,12,0,1,1-12,12A12,12,0,0,1,92,96Zm82.92,72a8,8,0,0,1-10.92-2.92,44,44,0,0,0-76,0,8,8,0,0,1-13.84-8,60,60,0,0,1,103.68,0A8,8,0,0,1,174.92,168ZM164,120a12,12,0,1,1,12-12A12,12,0,0,1,164,120Z"/></svg>"#;

/// Open Graph metadata for a viewer page.
#[derive(Clone, Copy)]
pub struct OpenGraphData<'a> {
    /// OG title.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// Kind-specific OG block, at most one per page. `None` emits only the
    /// type-independent tags (title, description, site name, url).
    pub media: Option<OgMedia<'a>>,
    /// Twitter card type ("player", "summary_large_image", "summary").
    pub twitter_card_type: &'a str,
}

/// The kind-specific Open Graph block: `og:type` plus the media tag.
///
/// An enum so the shell emits exactly one block (or none) — two
/// kind-specific blocks can never co-occur.
#[derive(Clone, Copy)]
pub enum OgMedia<'a> {
    /// `og:type=video.other`, `og:video`, `og:video:type`.
    Video {
        /// URL of the raw video bytes.
        url: &'a str,
        /// MIME type of the video.
        content_type: &'a str,
    },
    /// `og:type=website`, `og:image`.
    Image {
        /// URL of the raw image bytes.
        url: &'a str,
    },
    /// `og:type=music.song`, `og:audio`.
    Audio {
        /// URL of the raw audio bytes.
        url: &'a str,
    },
}

/// Format an upload timestamp for display.
///
/// Fixed `YYYY-MM-DD HH:MM` 24-hour format, no timezone conversion — the
/// value renders exactly as received, regardless of page language.
pub fn format_timestamp(uploaded_at: NaiveDateTime) -> String {
    uploaded_at.format("%Y-%m-%d %H:%M").to_string()
}

/// Social-preview description line.
///
/// "{uploaded_by} {name}" when an uploader is known, the service name
/// otherwise.
pub fn og_description(page: &MediaPage, strings: &PageStrings<'_>) -> String {
    match page.uploader_name() {
        Some(name) => format!("{} {}", strings.uploaded_by, name),
        None => page.service_name.clone(),
    }
}

/// Compose the full viewer page: head with OG/Twitter tags, site chrome,
/// and the kind-specific player fragment.
pub fn media_page_shell(
    page: &MediaPage,
    strings: &PageStrings<'_>,
    og: OpenGraphData<'_>,
    player: Markup,
) -> Markup {
    let title = format!("{} - {}", page.filename, page.service_name);
    let canonical = format!("{}/{}", page.base_url, page.id);

    html! {
        (DOCTYPE)
        html lang=(page.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(og.description);
                link rel="canonical" href=(canonical);

                // Open Graph
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(canonical);
                meta property="og:site_name" content=(page.service_name);
                @match og.media {
                    Some(OgMedia::Video { url, content_type }) => {
                        meta property="og:type" content="video.other";
                        meta property="og:video" content=(url);
                        meta property="og:video:type" content=(content_type);
                    }
                    Some(OgMedia::Image { url }) => {
                        meta property="og:type" content="website";
                        meta property="og:image" content=(url);
                    }
                    Some(OgMedia::Audio { url }) => {
                        meta property="og:type" content="music.song";
                        meta property="og:audio" content=(url);
                    }
                    None => {}
                }

                // Twitter Card
                meta name="twitter:card" content=(og.twitter_card_type);
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);

                script { (PreEscaped(THEME_BOOT_JS)) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (site_header(&page.service_name))
                main {
                    div class="card fade-in" {
                        div class="player" { (player) }
                        div class="info" {
                            h1 class="filename" title=(page.filename) { (page.filename) }
                            (media_meta(page, strings))
                            (actions_row(page, strings))
                        }
                    }
                }
                footer class="footer" {
                    (strings.powered_by) " " strong { (page.service_name) }
                }
                script { (PreEscaped(PAGE_JS)) }
            }
        }
    }
}

/// Site header: service-name home link and the theme toggle.
fn site_header(service_name: &str) -> Markup {
    html! {
        header class="site-header" {
            a href="/" class="brand" {
                (PreEscaped(ICON_FILM))
                (service_name)
            }
            button class="theme-toggle" onclick="toggleTheme()" title="Toggle theme" {
                span class="only-dark" { (PreEscaped(ICON_SUN)) }
                span class="only-light" { (PreEscaped(ICON_MOON)) }
            }
        }
    }
}

/// Uploader and upload-time lines.
///
/// The uploader line is omitted entirely when no name is known.
fn media_meta(page: &MediaPage, strings: &PageStrings<'_>) -> Markup {
    html! {
        div class="meta" {
            @if let Some(name) = page.uploader_name() {
                div class="meta-item" {
                    (PreEscaped(ICON_USER))
                    span { (strings.uploaded_by) " " strong { (name) } }
                }
            }
            div class="meta-item" {
                (PreEscaped(ICON_CLOCK))
                span { (strings.uploaded_at) " " strong { (format_timestamp(page.uploaded_at)) } }
            }
        }
    }
}

/// Actions row: download, copy link, open in new tab.
fn actions_row(page: &MediaPage, strings: &PageStrings<'_>) -> Markup {
    html! {
        div class="actions" {
            a class="btn btn-primary" href=(page.raw_url) download=(page.filename) {
                (PreEscaped(ICON_DOWNLOAD))
                (strings.download)
            }
            button class="btn btn-secondary" id="copy-btn" onclick="copyLink()"
                data-copied-label=(strings.copied) {
                (PreEscaped(ICON_COPY))
                span id="copy-label" { (strings.copy_link) }
            }
            a class="btn btn-secondary" href=(page.raw_url) target="_blank" {
                (PreEscaped(ICON_EXTERNAL))
                (strings.open_in_new_tab)
            }
        }
    }
}
