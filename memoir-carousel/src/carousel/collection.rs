//! EntryCollection: entries keyed by stable id plus their chronological order
//!
//! Storage order and display order differ, so every mutation goes through the
//! entry's id. Sorted indices are only ever used to *find* an id.

use std::cmp::Ordering;
use std::collections::HashMap;

use memoir_model::{Entry, EntryId, Month, RemediationOutcome};

use crate::error::{CarouselError, Result};

#[derive(Debug, Clone, Copy)]
struct SortKey {
    year: i32,
    month: Option<Month>,
    id: EntryId,
}

impl SortKey {
    fn of(entry: &Entry) -> Self {
        Self {
            year: entry.year,
            month: entry.month(),
            id: entry.id,
        }
    }
}

/// Year first. Months only decide when both labels carry one; anything else
/// falls through to the id.
fn compare(a: &SortKey, b: &SortKey) -> Ordering {
    a.year
        .cmp(&b.year)
        .then_with(|| match (a.month, b.month) {
            (Some(left), Some(right)) => left.cmp(&right),
            _ => Ordering::Equal,
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Returns the ids of `entries` in chronological display order.
///
/// The pairwise rule is not transitive when a year mixes labelled and
/// unlabelled dates, so a comparison sort may reject it. Entries are instead
/// inserted one at a time, in id order, after every placed entry that does
/// not compare greater. The result depends only on the set of entries.
pub fn chronological_order(entries: &[Entry]) -> Vec<EntryId> {
    let mut pending: Vec<SortKey> = entries.iter().map(SortKey::of).collect();
    pending.sort_unstable_by_key(|key| key.id);

    let mut placed: Vec<SortKey> = Vec::with_capacity(pending.len());
    for key in pending {
        let at = placed
            .partition_point(|other| compare(other, &key) != Ordering::Greater);
        placed.insert(at, key);
    }
    placed.into_iter().map(|key| key.id).collect()
}

#[derive(Debug, Clone)]
pub struct EntryCollection {
    entries: HashMap<EntryId, Entry>,
    order: Vec<EntryId>,
}

impl EntryCollection {
    /// Builds the collection and fixes its display order for the lifetime of
    /// the carousel.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CarouselError::EmptyCollection);
        }

        let order = chronological_order(&entries);
        let mut by_id = HashMap::with_capacity(entries.len());
        for entry in entries {
            if let Err(err) = entry.validate() {
                log::warn!("Mounting incomplete entry: {err}");
            }
            let id = entry.id;
            if by_id.insert(id, entry).is_some() {
                return Err(CarouselError::DuplicateId(id));
            }
        }

        log::debug!(
            "Entry collection sorted: {} entries, order {:?}",
            order.len(),
            order
        );

        Ok(Self {
            entries: by_id,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[EntryId] {
        &self.order
    }

    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.order.get(index).copied()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.id_at(index).and_then(|id| self.entries.get(&id))
    }

    pub fn by_id(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Sorted index of the entry with `id`.
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Years in display order, one per entry.
    pub fn years(&self) -> Vec<i32> {
        self.iter().map(|entry| entry.year).collect()
    }

    /// First sorted index whose entry has exactly `year`.
    pub fn first_index_of_year(&self, year: i32) -> Option<usize> {
        self.iter().position(|entry| entry.year == year)
    }

    /// Applies the one-shot image rewrite to the entry with `id`.
    pub fn remediate_image(&mut self, id: EntryId) -> Option<RemediationOutcome> {
        self.entries.get_mut(&id).map(Entry::remediate_image)
    }
}
