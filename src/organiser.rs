//! Rank-ordered view over mountains, sorted by track length.

use crate::error::TableError;
use crate::mountain::Mountain;

/// Keeps every known mountain in ascending length order (stable, so
/// equal-length mountains keep their arrival order) and answers positional
/// rank queries.
#[derive(Default)]
pub struct MountainOrganiser {
    mountains: Vec<Mountain>,
}

impl MountainOrganiser {
    pub fn new() -> Self {
        Self {
            mountains: Vec::new(),
        }
    }

    /// Rank of `mountain` among all tracked mountains.
    pub fn position(&self, mountain: &Mountain) -> Result<usize, TableError> {
        self.mountains
            .iter()
            .position(|m| m == mountain)
            .ok_or(TableError::KeyNotFound)
    }

    /// Merge a batch of mountains, skipping ones already tracked, and
    /// restore the length ordering.
    pub fn add_mountains(&mut self, batch: &[Mountain]) {
        for mountain in batch {
            if !self.mountains.contains(mountain) {
                self.mountains.push(mountain.clone());
            }
        }
        self.mountains.sort_by_key(|m| m.length);
    }

    pub fn remove_mountain(&mut self, mountain: &Mountain) -> Result<(), TableError> {
        let position = self.position(mountain)?;
        self.mountains.remove(position);
        Ok(())
    }

    /// Swap `old` for `new`, keeping the ordering intact.
    pub fn replace(&mut self, old: &Mountain, new: &Mountain) -> Result<(), TableError> {
        let position = self.position(old)?;
        self.mountains[position] = new.clone();
        self.mountains.sort_by_key(|m| m.length);
        Ok(())
    }

    /// All tracked mountains in rank order.
    pub fn mountains(&self) -> &[Mountain] {
        &self.mountains
    }
}
