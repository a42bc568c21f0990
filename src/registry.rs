use std::fmt;

use fxhash::FxHashMap;

/// A 2D point with unsigned integer coordinates. Compared and hashed
/// by value, so it can key the registry's interning map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

impl Point {
    pub fn new(x: u64, y: u64) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// A disjoint-set structure over points, maintaining a partition of
/// every point seen so far under "these two belong together"
/// assertions.
///
/// Points are interned in registration order; each slot in the parent
/// table names the slot of its current representative, with a root
/// being the one slot in each group that is its own parent.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    points: Vec<Point>,
    index: FxHashMap<Point, usize>,
    parents: Vec<usize>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Number of distinct points registered so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index.contains_key(&point)
    }

    /// Interns a point, returning its slot. A point seen before keeps
    /// its slot and the partition is unchanged; a new point starts as
    /// the root of its own singleton group.
    pub fn register(&mut self, point: Point) -> usize {
        if let Some(&ix) = self.index.get(&point) {
            ix
        } else {
            let ix = self.points.len();
            self.points.push(point);
            self.index.insert(point, ix);
            self.parents.push(ix);
            ix
        }
    }

    fn slot(&self, point: Point) -> usize {
        match self.index.get(&point) {
            Some(&ix) => ix,
            None => panic!("point {} was never registered", point),
        }
    }

    // Walks the parent chain up to the root. No path compression: the
    // chain is re-walked on every call, so cost is the chain length.
    fn root_of(&self, slot: usize) -> usize {
        let mut current = slot;
        while self.parents[current] != current {
            current = self.parents[current];
        }
        current
    }

    /// Returns the representative of the group the point belongs to.
    ///
    /// Panics if the point was never registered; callers register
    /// every point before using it, so a miss here is a defect.
    pub fn find(&self, point: Point) -> Point {
        self.points[self.root_of(self.slot(point))]
    }

    /// Merges the groups of the two points. The root on `a`'s side
    /// becomes the representative of the merged group. When the roots
    /// already coincide the rewrite is a self-assignment.
    pub fn union(&mut self, a: Point, b: Point) {
        let root_a = self.root_of(self.slot(a));
        let root_b = self.root_of(self.slot(b));
        self.parents[root_b] = root_a;
    }

    pub fn same_group(&self, a: Point, b: Point) -> bool {
        self.root_of(self.slot(a)) == self.root_of(self.slot(b))
    }

    /// Snapshot of the current partition: one list of points per
    /// group, in registration order within each group, groups ordered
    /// by their earliest-registered member. Read-only; recomputing it
    /// after further unions reflects the merges.
    pub fn groups(&self) -> Vec<Vec<Point>> {
        let mut by_root: FxHashMap<usize, usize> = FxHashMap::default();
        let mut groups: Vec<Vec<Point>> = Vec::new();

        for slot in 0..self.points.len() {
            let root = self.root_of(slot);
            let next = groups.len();
            let g = *by_root.entry(root).or_insert(next);
            if g == next {
                groups.push(Vec::new());
            }
            groups[g].push(self.points[slot]);
        }

        groups
    }
}
