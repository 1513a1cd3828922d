// Collaborator-layer integration suite: manager, organiser, and trails
// working over the tables through their public contract only.
//
// The core invariants exercised:
// - The manager's name index and the organiser's ranking always track the
//   same set of mountains.
// - Trails deliver mountains to a walker in path order, resuming on
//   follow paths after each split.
// - The stored record is opaque to the tables: everything here goes
//   through insert/get/remove and the walk callbacks.
use nested_hashmap::{
    Mountain, MountainManager, MountainOrganiser, TableError, Trail, TrailSeries, TrailSplit,
    TrailStore, WalkerPersonality,
};

fn series(name: &str, length: u32, following: Trail) -> Trail {
    Trail::from_store(TrailStore::Series(TrailSeries {
        mountain: Mountain::new(name, 1, length),
        following,
    }))
}

struct TopWalker {
    log: Vec<String>,
}

impl WalkerPersonality for TopWalker {
    fn select_branch(&self, _top: &Trail, _bottom: &Trail) -> bool {
        true
    }
    fn add_mountain(&mut self, mountain: &Mountain) {
        self.log.push(mountain.name.clone());
    }
}

struct LazyWalker {
    log: Vec<String>,
}

impl WalkerPersonality for LazyWalker {
    // Prefer the branch that starts with the shorter climb; an empty
    // branch counts as zero.
    fn select_branch(&self, top: &Trail, bottom: &Trail) -> bool {
        let first_length = |trail: &Trail| {
            trail
                .mountains()
                .first()
                .map(|mountain| mountain.length)
                .unwrap_or(0)
        };
        first_length(top) <= first_length(bottom)
    }
    fn add_mountain(&mut self, mountain: &Mountain) {
        self.log.push(mountain.name.clone());
    }
}

// Test: a manager round-trip over a realistic batch.
// Assumes: names are unique; the manager clones records into both views.
// Verifies: lookups, difficulty filters, grouping, removal, and editing
// stay mutually consistent.
#[test]
fn manager_round_trip() {
    let mut manager = MountainManager::new();
    let batch = [
        Mountain::new("kosciuszko", 3, 9),
        Mountain::new("bogong", 5, 18),
        Mountain::new("feathertop", 5, 22),
        Mountain::new("townsend", 3, 11),
        Mountain::new("stirling", 6, 10),
    ];
    for mountain in &batch {
        manager.add_mountain(mountain.clone()).unwrap();
    }
    assert_eq!(manager.len(), 5);
    assert_eq!(manager.get("bogong"), Ok(&batch[1]));

    let fives = manager.with_difficulty(5);
    assert_eq!(fives, vec![batch[1].clone(), batch[2].clone()]);

    let groups = manager.group_by_difficulty();
    let difficulties: Vec<u32> = groups.iter().map(|g| g[0].difficulty).collect();
    assert_eq!(difficulties, vec![3, 5, 6]);

    manager.remove_mountain(&batch[4]).unwrap();
    assert_eq!(manager.get("stirling"), Err(TableError::KeyNotFound));
    assert!(manager.with_difficulty(6).is_empty());

    let regraded = Mountain::new("townsend", 4, 11);
    manager.edit_mountain(&batch[3], regraded.clone()).unwrap();
    assert_eq!(manager.get("townsend"), Ok(&regraded));
    assert_eq!(manager.with_difficulty(4), vec![regraded]);
}

// Test: organiser ranks across interleaved batches.
// Assumes: ranking is ascending by length, stable for ties.
// Verifies: positions after each batch match the merged ordering.
#[test]
fn organiser_ranks_across_batches() {
    let mut organiser = MountainOrganiser::new();
    let first = [Mountain::new("a", 1, 30), Mountain::new("b", 1, 10)];
    let second = [Mountain::new("c", 1, 20), Mountain::new("d", 1, 40)];

    organiser.add_mountains(&first);
    assert_eq!(organiser.position(&first[1]), Ok(0));
    assert_eq!(organiser.position(&first[0]), Ok(1));

    organiser.add_mountains(&second);
    assert_eq!(organiser.position(&first[1]), Ok(0));
    assert_eq!(organiser.position(&second[0]), Ok(1));
    assert_eq!(organiser.position(&first[0]), Ok(2));
    assert_eq!(organiser.position(&second[1]), Ok(3));
}

// Test: a walk across a branched trail.
// Assumes: select_branch is consulted once per split, in path order.
// Verifies: the top walker and the lazy walker take different branches of
// the same trail and both resume on the follow path.
#[test]
fn walkers_choose_branches() {
    // -<  top: steep(20)  | bottom: gentle(5) -- gentle2(6)  >- summit(30)
    let trail = Trail::from_store(TrailStore::Split(TrailSplit {
        top: series("steep", 20, Trail::empty()),
        bottom: series("gentle", 5, series("gentle2", 6, Trail::empty())),
        follow: series("summit", 30, Trail::empty()),
    }));

    let mut top = TopWalker { log: Vec::new() };
    trail.follow(&mut top);
    assert_eq!(top.log, vec!["steep", "summit"]);

    let mut lazy = LazyWalker { log: Vec::new() };
    trail.follow(&mut lazy);
    assert_eq!(lazy.log, vec!["gentle", "gentle2", "summit"]);

    let mut names: Vec<String> = trail.mountains().iter().map(|m| m.name.clone()).collect();
    names.sort();
    assert_eq!(names, vec!["gentle", "gentle2", "steep", "summit"]);
}

// Test: trail editing feeds the manager.
// Assumes: collect order does not matter for registration.
// Verifies: every mountain on an edited trail can be registered and
// queried through the manager afterwards.
#[test]
fn trail_feeds_manager() {
    let trail = Trail::empty()
        .add_mountain_before(Mountain::new("last", 2, 12))
        .add_empty_branch_before()
        .add_mountain_before(Mountain::new("first", 4, 3));

    let mut manager = MountainManager::new();
    for mountain in trail.mountains() {
        manager.add_mountain(mountain.clone()).unwrap();
    }
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.get("first").map(|m| m.difficulty), Ok(4));
    assert_eq!(manager.get("last").map(|m| m.length), Ok(12));
}
