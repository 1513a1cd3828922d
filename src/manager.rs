//! Name-keyed registry of mountains with difficulty queries.

use crate::error::TableError;
use crate::linear_probe::LinearProbeTable;
use crate::mountain::Mountain;
use crate::organiser::MountainOrganiser;

/// Stores mountains by name on a `LinearProbeTable` and keeps a
/// length-ranked organiser alongside. The two views always track the same
/// set of mountains.
#[derive(Default)]
pub struct MountainManager {
    index: LinearProbeTable<Mountain>,
    organiser: MountainOrganiser,
}

impl MountainManager {
    pub fn new() -> Self {
        Self {
            index: LinearProbeTable::new(),
            organiser: MountainOrganiser::new(),
        }
    }

    pub fn add_mountain(&mut self, mountain: Mountain) -> Result<(), TableError> {
        self.index.insert(&mountain.name, mountain.clone())?;
        self.organiser.add_mountains(std::slice::from_ref(&mountain));
        Ok(())
    }

    pub fn remove_mountain(&mut self, mountain: &Mountain) -> Result<Mountain, TableError> {
        self.organiser.remove_mountain(mountain)?;
        self.index.remove(&mountain.name)
    }

    /// Replace `old` with `new` (the name may change too).
    pub fn edit_mountain(&mut self, old: &Mountain, new: Mountain) -> Result<(), TableError> {
        self.remove_mountain(old)?;
        self.add_mountain(new)
    }

    pub fn get(&self, name: &str) -> Result<&Mountain, TableError> {
        self.index.get(name)
    }

    /// All mountains of exactly this difficulty, in rank order.
    pub fn with_difficulty(&self, difficulty: u32) -> Vec<Mountain> {
        self.organiser
            .mountains()
            .iter()
            .filter(|m| m.difficulty == difficulty)
            .cloned()
            .collect()
    }

    /// Mountains grouped by ascending difficulty; no empty groups.
    pub fn group_by_difficulty(&self) -> Vec<Vec<Mountain>> {
        let mut difficulties: Vec<u32> = self
            .organiser
            .mountains()
            .iter()
            .map(|m| m.difficulty)
            .collect();
        difficulties.sort_unstable();
        difficulties.dedup();
        difficulties
            .into_iter()
            .map(|d| self.with_difficulty(d))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Mountain> {
        vec![
            Mountain::new("m1", 2, 2),
            Mountain::new("m2", 2, 9),
            Mountain::new("m3", 3, 6),
            Mountain::new("m4", 3, 1),
            Mountain::new("m5", 4, 6),
            Mountain::new("m6", 7, 3),
            Mountain::new("m7", 7, 7),
        ]
    }

    /// Invariant: added mountains are retrievable by name and counted
    /// once.
    #[test]
    fn add_and_lookup() {
        let mut manager = MountainManager::new();
        for mountain in sample() {
            manager.add_mountain(mountain).unwrap();
        }
        assert_eq!(manager.len(), 7);
        assert_eq!(manager.get("m3"), Ok(&Mountain::new("m3", 3, 6)));
        assert_eq!(manager.get("m9"), Err(TableError::KeyNotFound));
    }

    /// Invariant: difficulty filtering returns exactly the matching
    /// mountains, rank-ordered by length.
    #[test]
    fn filter_by_difficulty() {
        let mut manager = MountainManager::new();
        for mountain in sample() {
            manager.add_mountain(mountain).unwrap();
        }
        let threes = manager.with_difficulty(3);
        assert_eq!(
            threes,
            vec![Mountain::new("m4", 3, 1), Mountain::new("m3", 3, 6)]
        );
        assert!(manager.with_difficulty(9).is_empty());
    }

    /// Invariant: grouping covers every mountain once, ascending by
    /// difficulty, without empty groups.
    #[test]
    fn group_by_difficulty_partitions() {
        let mut manager = MountainManager::new();
        for mountain in sample() {
            manager.add_mountain(mountain).unwrap();
        }
        let groups = manager.group_by_difficulty();
        let difficulties: Vec<u32> = groups.iter().map(|g| g[0].difficulty).collect();
        assert_eq!(difficulties, vec![2, 3, 4, 7]);
        let total: usize = groups.iter().map(|g| g.len()).sum();
        assert_eq!(total, 7);
        assert!(groups.iter().all(|g| !g.is_empty()));
    }

    /// Invariant: removal and editing keep the index and the organiser in
    /// step.
    #[test]
    fn remove_and_edit_stay_consistent() {
        let mut manager = MountainManager::new();
        for mountain in sample() {
            manager.add_mountain(mountain).unwrap();
        }
        let m1 = Mountain::new("m1", 2, 2);
        assert_eq!(manager.remove_mountain(&m1), Ok(m1.clone()));
        assert_eq!(manager.len(), 6);
        assert_eq!(manager.get("m1"), Err(TableError::KeyNotFound));
        assert!(manager.with_difficulty(2).len() == 1);

        let m2 = Mountain::new("m2", 2, 9);
        let promoted = Mountain::new("m2", 5, 9);
        manager.edit_mountain(&m2, promoted.clone()).unwrap();
        assert_eq!(manager.get("m2"), Ok(&promoted));
        assert!(manager.with_difficulty(2).is_empty());
        assert_eq!(manager.with_difficulty(5), vec![promoted]);
    }
}
