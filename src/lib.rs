//! nested-hashmap: open-addressed hash tables with nested layers: a
//! two-level double-key table and a recursively splitting "infinite"
//! table, plus the mountain-trail domain built on top of them.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: dictionary semantics built from scratch on flat slot arrays, so
//!   collision policy, resizing, and traversal are explicit and
//!   verifiable, with no ready-made map underneath.
//! - Layers:
//!   - LinearProbeTable<V>: flat array of optional (key, value) slots;
//!     linear probing with wraparound, growth along a capacity ladder,
//!     hole-free removal that re-places the trailing run.
//!   - DoubleKeyTable<V>: a LinearProbeTable whose values are inner
//!     LinearProbeTables, giving (key1, key2) -> value with independent
//!     capacities and growth at each level.
//!   - InfiniteHashTable<V>: 27-slot nodes whose slots hold a leaf or an
//!     owned child node; a collision grows a child keyed on the next
//!     character of the key instead of probing sideways.
//!   - Collaborators (Mountain, MountainOrganiser, MountainManager,
//!     Trail): the domain layer, consuming the tables only through their
//!     public contract.
//!
//! Constraints
//! - Single-threaded; exclusive single-writer access assumed. Resize and
//!   the infinite table's delete-rebuild are not atomic against other
//!   threads.
//! - String keys only: the rolling hash and the character-at-depth slot
//!   selection are string-specific.
//! - Capacity-dependent hashing: hash(key, capacity) is pure, so growth
//!   rehashes every entry from scratch rather than translating positions.
//! - std::collections appears only as a model inside tests.
//!
//! Error surface
//! - TableError::KeyNotFound on get/remove of an absent key; contains-style
//!   queries map it to false.
//! - TableError::TableFull from insert once every configured capacity is
//!   exhausted; a sizing misconfiguration, surfaced immediately.
//! - Mutations either succeed with all invariants intact or fail with no
//!   observable partial state.
//!
//! Notes and non-goals
//! - No persistence, no concurrency wrapper, no metrics or logging.
//! - Load factor is capped at 0.5 after every insert until the capacity
//!   ladder saturates; saturation is a silent ceiling, and TableFull only
//!   surfaces once a probe cycles a physically full array.
//! - The infinite table deletes by rebuilding from its live-key ledger,
//!   trading O(live keys) per delete for the guarantee that no stale
//!   branch survives; removals are assumed rare next to lookups.

mod double_key;
mod double_key_proptest;
mod error;
mod hash;
mod infinite;
mod infinite_proptest;
mod linear_probe;
mod linear_probe_proptest;
mod manager;
mod mountain;
mod organiser;
mod trail;

// Public surface
pub use double_key::DoubleKeyTable;
pub use error::TableError;
pub use infinite::InfiniteHashTable;
pub use linear_probe::LinearProbeTable;
pub use manager::MountainManager;
pub use mountain::Mountain;
pub use organiser::MountainOrganiser;
pub use trail::{Trail, TrailSeries, TrailSplit, TrailStore, WalkerPersonality};
