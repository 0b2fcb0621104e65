//! Image references and the extension-case remediation table.
//!
//! Static sites frequently ship photos whose extension case differs from the
//! reference that points at them (`IMG_001.JPG` vs `IMG_001.jpg`), or that were
//! re-encoded to jpeg after the content was written. When an image fails to
//! load we make a single guess at the corrected reference.

/// Extension substitutions tried after a load failure, first match wins.
const EXTENSION_REWRITES: &[(&str, &str)] = &[
    ("jpg", "JPG"),
    ("JPG", "jpg"),
    ("jpeg", "jpg"),
    ("png", "jpg"),
];

/// A reference to an externally owned image (URL or site-relative path).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        ImageRef(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The extension token of the path, ignoring any query or fragment.
    pub fn extension(&self) -> Option<&str> {
        let (path, _) = self.split_suffix();
        let file = path.rsplit('/').next().unwrap_or(path);
        let (stem, ext) = file.rsplit_once('.')?;
        (!stem.is_empty() && !ext.is_empty()).then_some(ext)
    }

    /// Applies the first matching extension rewrite. The query string and
    /// fragment, when present, are carried over untouched.
    pub fn remediated(&self) -> Option<ImageRef> {
        let ext = self.extension()?;
        let replacement = EXTENSION_REWRITES
            .iter()
            .find_map(|(from, to)| (*from == ext).then_some(*to))?;

        let (path, suffix) = self.split_suffix();
        let base = &path[..path.len() - ext.len()];
        Some(ImageRef(format!("{base}{replacement}{suffix}")))
    }

    fn split_suffix(&self) -> (&str, &str) {
        match self.0.find(['?', '#']) {
            Some(at) => self.0.split_at(at),
            None => (self.0.as_str(), ""),
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        ImageRef::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        ImageRef(value)
    }
}
