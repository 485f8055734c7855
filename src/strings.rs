//! Localized string tables and checked label resolution.
//!
//! The table arrives fully resolved for one language — this crate never
//! loads locale files. Lookups go through [`StringTable::get`], which fails
//! loudly for a missing key instead of returning an empty string, so an
//! incomplete table can never ship a silently broken page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// A resolved mapping from UI-text keys to localized display strings for
/// one language.
///
/// Transparent over its map for serde, so a caller can deserialize a
/// resolved locale table straight from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable(HashMap<String, String>);

impl StringTable {
    /// Look up a localized string by key.
    ///
    /// Fails with [`RenderError::MissingStringKey`] naming the key if it is
    /// absent.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| RenderError::MissingStringKey {
                key: key.to_string(),
            })
    }
}

impl From<HashMap<String, String>> for StringTable {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for StringTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Labels required by the media viewer page.
///
/// Resolved in one pass before any markup is built, so a missing key aborts
/// the render with no partial output. Keys are checked in a fixed order and
/// the first absent one is reported.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageStrings<'a> {
    pub uploaded_by: &'a str,
    pub uploaded_at: &'a str,
    pub unsupported: &'a str,
    pub download: &'a str,
    pub copy_link: &'a str,
    pub copied: &'a str,
    pub open_in_new_tab: &'a str,
    pub powered_by: &'a str,
}

impl<'a> PageStrings<'a> {
    pub fn resolve(table: &'a StringTable) -> Result<Self> {
        Ok(Self {
            uploaded_by: table.get("uploaded_by")?,
            uploaded_at: table.get("uploaded_at")?,
            unsupported: table.get("unsupported")?,
            download: table.get("download")?,
            copy_link: table.get("copy_link")?,
            copied: table.get("copied")?,
            open_in_new_tab: table.get("open_in_new_tab")?,
            powered_by: table.get("powered_by")?,
        })
    }
}

/// Labels required by the "not found" page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotFoundStrings<'a> {
    pub not_found: &'a str,
    pub not_found_desc: &'a str,
}

impl<'a> NotFoundStrings<'a> {
    pub fn resolve(table: &'a StringTable) -> Result<Self> {
        Ok(Self {
            not_found: table.get("not_found")?,
            not_found_desc: table.get("not_found_desc")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> StringTable {
        pairs.iter().copied().collect()
    }

    #[test]
    fn get_present_key() {
        let t = table(&[("download", "Download")]);
        assert_eq!(t.get("download").unwrap(), "Download");
    }

    #[test]
    fn get_missing_key_names_it() {
        let t = table(&[]);
        let err = t.get("copy_link").unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingStringKey { ref key } if key == "copy_link"
        ));
    }

    #[test]
    fn get_never_blanks_a_missing_key() {
        // An absent key must be an error, not an empty string.
        let t = table(&[("present", "")]);
        assert_eq!(t.get("present").unwrap(), "");
        assert!(t.get("absent").is_err());
    }

    #[test]
    fn deserializes_from_json_object() {
        let t: StringTable =
            serde_json::from_str(r#"{"not_found":"Not Found","not_found_desc":"Gone"}"#).unwrap();
        assert_eq!(t.get("not_found").unwrap(), "Not Found");
        assert_eq!(t.get("not_found_desc").unwrap(), "Gone");
    }

    fn full_page_table() -> StringTable {
        table(&[
            ("uploaded_by", "Uploaded by"),
            ("uploaded_at", "Uploaded at"),
            ("unsupported", "Preview not available"),
            ("download", "Download"),
            ("copy_link", "Copy link"),
            ("copied", "Copied!"),
            ("open_in_new_tab", "Open in new tab"),
            ("powered_by", "Powered by"),
        ])
    }

    #[test]
    fn page_strings_resolve_all_present() {
        let t = full_page_table();
        let strings = PageStrings::resolve(&t).unwrap();
        assert_eq!(strings.download, "Download");
        assert_eq!(strings.powered_by, "Powered by");
    }

    #[test]
    fn page_strings_report_first_missing_key() {
        // Keys are checked in declaration order.
        let t = table(&[("uploaded_by", "Uploaded by")]);
        let err = PageStrings::resolve(&t).unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingStringKey { ref key } if key == "uploaded_at"
        ));
    }

    #[test]
    fn not_found_strings_resolve() {
        let t = table(&[("not_found", "Not Found"), ("not_found_desc", "Gone")]);
        let strings = NotFoundStrings::resolve(&t).unwrap();
        assert_eq!(strings.not_found, "Not Found");
        assert_eq!(strings.not_found_desc, "Gone");
    }

    #[test]
    fn not_found_strings_missing_desc() {
        let t = table(&[("not_found", "Not Found")]);
        let err = NotFoundStrings::resolve(&t).unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingStringKey { ref key } if key == "not_found_desc"
        ));
    }
}
