//! Disjoint-set (union-find) over provisional labels
//!
//! Labels are plain integers indexing into a flat arena of
//! (parent, rank) records. Slot 0 is reserved for the background and is
//! never returned by [`LabelArena::make_set`].

/// Arena of equivalence classes over labels
///
/// Supports `make_set`, `find` with path compression, and `union` by rank.
/// Labels are only allocated, never freed; the arena lives for the
/// duration of one labeling pass.
#[derive(Debug, Clone)]
pub struct LabelArena {
    /// Parent label per slot; a root points to itself
    parent: Vec<u32>,
    /// Upper bound on tree height per root
    rank: Vec<u8>,
}

impl Default for LabelArena {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelArena {
    /// Create an empty arena.
    ///
    /// Slot 0 is pre-allocated as the background sentinel.
    pub fn new() -> Self {
        Self {
            parent: vec![0],
            rank: vec![0],
        }
    }

    /// Number of allocated labels (excluding the background sentinel).
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Check whether any label has been allocated.
    pub fn is_empty(&self) -> bool {
        self.parent.len() == 1
    }

    /// Allocate a new label in its own singleton class.
    pub fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        self.rank.push(0);
        label
    }

    /// Find the representative of the class containing `label`.
    ///
    /// Compresses the path so every traversed label points directly at
    /// the representative. Which representative a label reaches is never
    /// changed by compression.
    ///
    /// # Panics
    ///
    /// Panics if `label` was not allocated by this arena. Label 0 is the
    /// background sentinel and must not be passed here.
    pub fn find(&mut self, label: u32) -> u32 {
        debug_assert!(label != 0, "label 0 is reserved for background");

        let mut root = label;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = label;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }

        root
    }

    /// Merge the classes containing `a` and `b`.
    ///
    /// Uses union by rank: the root with the smaller rank is attached
    /// under the root with the larger rank; on a tie the surviving root's
    /// rank is incremented. No-op if both are already in the same class.
    pub fn union(&mut self, a: u32, b: u32) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        match self.rank[root_a as usize].cmp(&self.rank[root_b as usize]) {
            std::cmp::Ordering::Less => self.parent[root_a as usize] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b as usize] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b as usize] = root_a;
                self.rank[root_a as usize] += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_set_sequence() {
        let mut arena = LabelArena::new();
        assert!(arena.is_empty());

        assert_eq!(arena.make_set(), 1);
        assert_eq!(arena.make_set(), 2);
        assert_eq!(arena.make_set(), 3);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_find_singleton() {
        let mut arena = LabelArena::new();
        let a = arena.make_set();
        assert_eq!(arena.find(a), a);
    }

    #[test]
    fn test_union_merges() {
        let mut arena = LabelArena::new();
        let a = arena.make_set();
        let b = arena.make_set();
        let c = arena.make_set();

        arena.union(a, b);
        assert_eq!(arena.find(a), arena.find(b));
        assert_ne!(arena.find(a), arena.find(c));

        // Union is idempotent
        let root = arena.find(a);
        arena.union(b, a);
        assert_eq!(arena.find(a), root);
    }

    #[test]
    fn test_union_transitive() {
        let mut arena = LabelArena::new();
        let labels: Vec<u32> = (0..6).map(|_| arena.make_set()).collect();

        arena.union(labels[0], labels[1]);
        arena.union(labels[2], labels[3]);
        arena.union(labels[1], labels[2]);

        let root = arena.find(labels[0]);
        for &l in &labels[..4] {
            assert_eq!(arena.find(l), root);
        }
        assert_ne!(arena.find(labels[4]), root);
        assert_ne!(arena.find(labels[5]), root);
    }

    #[test]
    fn test_rank_tie_increments() {
        let mut arena = LabelArena::new();
        let a = arena.make_set();
        let b = arena.make_set();
        let c = arena.make_set();
        let d = arena.make_set();

        // Two rank-0 ties produce two rank-1 trees; merging them must
        // still yield a single consistent class.
        arena.union(a, b);
        arena.union(c, d);
        arena.union(a, c);

        let root = arena.find(a);
        assert_eq!(arena.find(b), root);
        assert_eq!(arena.find(c), root);
        assert_eq!(arena.find(d), root);
    }

    #[test]
    fn test_path_compression_preserves_representative() {
        let mut arena = LabelArena::new();
        let labels: Vec<u32> = (0..8).map(|_| arena.make_set()).collect();
        for pair in labels.windows(2) {
            arena.union(pair[0], pair[1]);
        }

        let roots: Vec<u32> = labels.iter().map(|&l| arena.find(l)).collect();
        // Repeated finds (now fully compressed) give the same answers
        for (&l, &r) in labels.iter().zip(&roots) {
            assert_eq!(arena.find(l), r);
        }
        assert!(roots.windows(2).all(|w| w[0] == w[1]));
    }
}
