/// Stable identity of a dated entry, independent of display order.
///
/// Ordering on `EntryId` is the insertion order of the source collection and
/// is used as the last tie-break when sorting chronologically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EntryId(pub u32);

impl EntryId {
    pub fn new(id: u32) -> Self {
        EntryId(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        EntryId(id)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
