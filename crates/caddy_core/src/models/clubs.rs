use serde::{Deserialize, Serialize};

use crate::error::ClubTableError;

/// One club the golfer carries, with its capability threshold: the minimum
/// remaining distance for which the club is considered an appropriate choice.
///
/// A zero threshold is legal (a putting-range entry qualifies for any
/// remaining distance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubCapability {
    pub name: String,
    pub threshold: u32,
}

impl ClubCapability {
    pub fn new(name: impl Into<String>, threshold: u32) -> Self {
        Self { name: name.into(), threshold }
    }

    /// Whether this club qualifies for a remaining distance `d`.
    pub fn usable_for(&self, d: i32) -> bool {
        d >= self.threshold as i32
    }
}

/// The golfer's club distance table.
///
/// Unordered on input; planning always consults it sorted by threshold
/// descending. Club names are unique — the only invariant the table enforces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubDistanceTable {
    entries: Vec<ClubCapability>,
}

impl ClubDistanceTable {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build a table from capability entries, rejecting duplicate names.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ClubCapability>,
    ) -> Result<Self, ClubTableError> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    /// Add one entry, rejecting a name already present.
    pub fn insert(&mut self, entry: ClubCapability) -> Result<(), ClubTableError> {
        if self.get(&entry.name).is_some() {
            return Err(ClubTableError::DuplicateName(entry.name));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Entry matching a given name (exact match, as the default-driver
    /// selection uses).
    pub fn get(&self, name: &str) -> Option<&ClubCapability> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// All entries sorted by threshold descending.
    pub fn by_threshold_desc(&self) -> Vec<&ClubCapability> {
        let mut sorted: Vec<&ClubCapability> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        sorted
    }

    /// Entries usable for a remaining distance `d` (threshold <= d), ordered
    /// by threshold descending.
    pub fn usable_for(&self, d: i32) -> Vec<&ClubCapability> {
        self.by_threshold_desc().into_iter().filter(|c| c.usable_for(d)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClubCapability> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ClubDistanceTable {
        ClubDistanceTable::from_entries([
            ClubCapability::new("Drive", 230),
            ClubCapability::new("3 Wood", 215),
            ClubCapability::new("7 Iron", 150),
            ClubCapability::new("Putt-range", 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = ClubDistanceTable::from_entries([
            ClubCapability::new("Drive", 230),
            ClubCapability::new("Drive", 210),
        ]);
        assert_eq!(result, Err(ClubTableError::DuplicateName("Drive".to_string())));
    }

    #[test]
    fn test_get_is_exact_match() {
        let table = table();
        assert_eq!(table.get("Drive").map(|c| c.threshold), Some(230));
        // Lookup is case-sensitive; "drive" is a different name.
        assert!(table.get("drive").is_none());
    }

    #[test]
    fn test_usable_for_orders_by_threshold_descending() {
        let table = table();
        let usable: Vec<&str> = table.usable_for(220).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(usable, vec!["3 Wood", "7 Iron", "Putt-range"]);
    }

    #[test]
    fn test_zero_threshold_always_usable() {
        let table = table();
        let usable: Vec<&str> = table.usable_for(0).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(usable, vec!["Putt-range"]);
    }
}
