use crate::error::{ModelError, Result};
use crate::ids::EntryId;
use crate::image::ImageRef;
use crate::month::{Month, parse_month};

/// One dated memory: a titled, described, image-referencing record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub id: EntryId,
    /// Human readable label, e.g. "May 2006". Only a month token and the
    /// separate `year` are ever extracted from it.
    pub date: String,
    /// Authoritative coarse sort key.
    pub year: i32,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub image: ImageRef,
    /// Set once the one-shot image rewrite has been attempted.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing))]
    pub remediated: bool,
}

/// Result of asking an entry to correct its image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemediationOutcome {
    Rewritten { from: ImageRef, to: ImageRef },
    /// A rewrite already happened for this entry; no further guesses.
    AlreadyAttempted,
    /// The extension has no entry in the substitution table.
    NoRule,
}

impl Entry {
    pub fn new(
        id: impl Into<EntryId>,
        date: impl Into<String>,
        year: i32,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<ImageRef>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            year,
            title: title.into(),
            description: description.into(),
            image: image.into(),
            remediated: false,
        }
    }

    /// Month parsed from the date label, if it carries one.
    pub fn month(&self) -> Option<Month> {
        parse_month(&self.date)
    }

    /// Reports blank display fields. An entry that fails this still renders,
    /// as an untitled card or a broken thumbnail.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::InvalidEntry {
                id: self.id,
                reason: "title is empty".to_string(),
            });
        }
        if self.image.is_empty() {
            return Err(ModelError::InvalidEntry {
                id: self.id,
                reason: "image reference is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Rewrites the image reference in place, at most once per entry.
    ///
    /// The attempt is recorded even when no rule applies, so a reference that
    /// keeps failing never oscillates between two spellings.
    pub fn remediate_image(&mut self) -> RemediationOutcome {
        if self.remediated {
            return RemediationOutcome::AlreadyAttempted;
        }
        self.remediated = true;

        match self.image.remediated() {
            Some(to) => {
                let from = std::mem::replace(&mut self.image, to.clone());
                RemediationOutcome::Rewritten { from, to }
            }
            None => RemediationOutcome::NoRule,
        }
    }
}

/// Parses a JSON array of entries. Blank titles or image references are
/// kept; see [`Entry::validate`].
#[cfg(feature = "serde")]
pub fn entries_from_json(json: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(json)?)
}
