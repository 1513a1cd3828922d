//! Branching mountain trails and the walks over them.

use crate::mountain::Mountain;

/// Chooses between branches while walking a trail and receives every
/// mountain passed along the way. Implemented by callers; the walk itself
/// never decides.
pub trait WalkerPersonality {
    /// `true` takes the top branch of a split, `false` the bottom.
    fn select_branch(&self, top: &Trail, bottom: &Trail) -> bool;
    fn add_mountain(&mut self, mountain: &Mountain);
}

/// A split in the trail.
///
/// ```text
///    ____top_____
///   /            \
/// -<              >-follow-
///   \___bottom___/
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrailSplit {
    pub top: Trail,
    pub bottom: Trail,
    pub follow: Trail,
}

impl TrailSplit {
    /// Drop both branches, leaving only the following trail.
    pub fn remove_branch(self) -> Trail {
        self.follow
    }
}

/// A mountain followed by the rest of the trail.
///
/// ```text
/// --mountain--following--
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrailSeries {
    pub mountain: Mountain,
    pub following: Trail,
}

impl TrailSeries {
    /// Drop the leading mountain, leaving the following trail.
    pub fn remove_mountain(self) -> Trail {
        self.following
    }

    /// Insert a mountain in series before the current one.
    pub fn add_mountain_before(self, mountain: Mountain) -> TrailSeries {
        TrailSeries {
            mountain,
            following: Trail::from_store(TrailStore::Series(self)),
        }
    }

    /// Insert a mountain after the current one, before the following
    /// trail.
    pub fn add_mountain_after(self, mountain: Mountain) -> TrailSeries {
        TrailSeries {
            mountain: self.mountain,
            following: Trail::from_store(TrailStore::Series(TrailSeries {
                mountain,
                following: self.following,
            })),
        }
    }

    /// Insert an empty branch whose following trail is this series.
    pub fn add_empty_branch_before(self) -> TrailSplit {
        TrailSplit {
            top: Trail::empty(),
            bottom: Trail::empty(),
            follow: Trail::from_store(TrailStore::Series(self)),
        }
    }

    /// Insert an empty branch after the current mountain, before the
    /// following trail.
    pub fn add_empty_branch_after(self) -> TrailSeries {
        TrailSeries {
            mountain: self.mountain,
            following: Trail::from_store(TrailStore::Split(TrailSplit {
                top: Trail::empty(),
                bottom: Trail::empty(),
                follow: self.following,
            })),
        }
    }
}

/// Either kind of trail segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrailStore {
    Split(TrailSplit),
    Series(TrailSeries),
}

/// A trail: possibly empty, otherwise one owned segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trail {
    pub store: Option<Box<TrailStore>>,
}

impl Trail {
    pub fn empty() -> Self {
        Self { store: None }
    }

    pub fn from_store(store: TrailStore) -> Self {
        Self {
            store: Some(Box::new(store)),
        }
    }

    /// Put a mountain before everything currently on the trail.
    pub fn add_mountain_before(self, mountain: Mountain) -> Trail {
        Trail::from_store(TrailStore::Series(TrailSeries {
            mountain,
            following: self,
        }))
    }

    /// Put an empty branch before everything currently on the trail.
    pub fn add_empty_branch_before(self) -> Trail {
        Trail::from_store(TrailStore::Split(TrailSplit {
            top: Trail::empty(),
            bottom: Trail::empty(),
            follow: self,
        }))
    }

    /// Walk the trail. At each split the personality picks top or bottom,
    /// the follow path goes on an explicit stack, and every mountain
    /// passed is handed to the personality.
    pub fn follow(&self, personality: &mut impl WalkerPersonality) {
        let mut current = self.store.as_deref();
        let mut follows: Vec<&Trail> = Vec::new();
        loop {
            match current {
                Some(TrailStore::Split(split)) => {
                    follows.push(&split.follow);
                    current = if personality.select_branch(&split.top, &split.bottom) {
                        split.top.store.as_deref()
                    } else {
                        split.bottom.store.as_deref()
                    };
                }
                Some(TrailStore::Series(series)) => {
                    personality.add_mountain(&series.mountain);
                    current = series.following.store.as_deref();
                }
                None => match follows.pop() {
                    Some(trail) => current = trail.store.as_deref(),
                    None => break,
                },
            }
        }
    }

    /// Every mountain on any branch of the trail.
    pub fn mountains(&self) -> Vec<&Mountain> {
        let mut found = Vec::new();
        let mut pending: Vec<&Trail> = vec![self];
        while let Some(trail) = pending.pop() {
            match trail.store.as_deref() {
                Some(TrailStore::Split(split)) => {
                    pending.push(&split.follow);
                    pending.push(&split.bottom);
                    pending.push(&split.top);
                }
                Some(TrailStore::Series(series)) => {
                    found.push(&series.mountain);
                    pending.push(&series.following);
                }
                None => {}
            }
        }
        found
    }
}
