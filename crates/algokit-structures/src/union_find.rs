//! Disjoint-set (union-find) data structure.
//!
//! Supports three primary operations: building singleton sets, finding the
//! root (representative) of an element's set, and merging two sets. Union by
//! rank keeps trees shallow and path compression flattens them on every
//! lookup, giving near-constant amortised cost per operation.
//!
//! Reference: <https://en.wikipedia.org/wiki/Disjoint-set_data_structure>

use algokit_core::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A collection of disjoint sets over hashable elements.
///
/// # Example
///
/// ```rust
/// use algokit_structures::UnionFind;
///
/// let mut sets = UnionFind::new(["a", "b", "c", "d"]);
/// assert!(!sets.in_same_set(&"a", &"b").unwrap());
///
/// sets.union(&"a", &"b").unwrap();
/// assert!(sets.in_same_set(&"a", &"b").unwrap());
///
/// sets.union(&"c", &"d").unwrap();
/// assert!(sets.in_same_set(&"d", &"c").unwrap());
/// assert!(!sets.in_same_set(&"a", &"c").unwrap());
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind<T> {
    /// Elements in insertion order.
    items: Vec<T>,
    /// Lookup table: element → slot.
    slots: HashMap<T, usize>,
    /// Parent slot of each slot; roots point at themselves.
    parent: Vec<usize>,
    /// Upper bound on the height of the tree rooted at each slot.
    rank: Vec<u32>,
    /// Number of disjoint sets.
    sets: usize,
}

impl<T: Eq + Hash + Clone + fmt::Debug> UnionFind<T> {
    /// Creates a collection where every item is its own singleton set.
    ///
    /// Duplicate items are ignored.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut uf = Self {
            items: Vec::new(),
            slots: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        };
        uf.add(items);
        uf
    }

    /// Adds more items, each as a singleton set.
    ///
    /// Items already present keep their current set.
    ///
    /// ```rust
    /// use algokit_structures::UnionFind;
    ///
    /// let mut sets = UnionFind::new(['a', 'b']);
    /// assert!(!sets.contains(&'c'));
    /// sets.add(['c', 'd']);
    /// assert!(sets.contains(&'c') && sets.contains(&'d'));
    /// ```
    pub fn add(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            if self.slots.contains_key(&item) {
                continue;
            }
            let slot = self.items.len();
            self.slots.insert(item.clone(), slot);
            self.items.push(item);
            self.parent.push(slot);
            self.rank.push(0);
            self.sets += 1;
        }
    }

    /// Whether `item` is in the collection.
    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the root of the set containing `item`.
    ///
    /// Every element visited on the way up is re-pointed directly at the
    /// root, so later lookups are shorter.
    ///
    /// ```rust
    /// use algokit_structures::UnionFind;
    ///
    /// let mut sets = UnionFind::new([1, 2, 3]);
    /// assert_eq!(sets.find(&1).unwrap(), 1);
    /// sets.union(&1, &2).unwrap();
    /// assert_eq!(sets.find(&2).unwrap(), 1);
    /// assert!(sets.find(&7).is_err());
    /// ```
    pub fn find(&mut self, item: &T) -> Result<T> {
        let slot = self.slot(item)?;
        let root = self.find_slot(slot);
        Ok(self.items[root].clone())
    }

    /// Whether `x` and `y` belong to the same set.
    pub fn in_same_set(&mut self, x: &T, y: &T) -> Result<bool> {
        let x = self.slot(x)?;
        let y = self.slot(y)?;
        Ok(self.find_slot(x) == self.find_slot(y))
    }

    /// Merges the sets containing `x` and `y`, returning the new root.
    ///
    /// The root of lower rank is attached under the root of higher rank.
    /// When ranks are equal, `y`'s root goes under `x`'s root and that root's
    /// rank grows by one.
    pub fn union(&mut self, x: &T, y: &T) -> Result<T> {
        let x = self.slot(x)?;
        let y = self.slot(y)?;
        let root = self.union_slots(x, y);
        Ok(self.items[root].clone())
    }

    /// Merges every item of `items` into one set.
    ///
    /// Returns the resulting root, or `None` when `items` is empty.
    ///
    /// ```rust
    /// use algokit_structures::UnionFind;
    ///
    /// let mut sets = UnionFind::new(1..=5);
    /// sets.union_all(&[1, 2, 3]).unwrap();
    /// assert!(sets.in_same_set(&1, &3).unwrap());
    /// assert!(!sets.in_same_set(&1, &4).unwrap());
    /// ```
    pub fn union_all<'a>(&mut self, items: impl IntoIterator<Item = &'a T>) -> Result<Option<T>>
    where
        T: 'a,
    {
        let mut items = items.into_iter();
        let Some(first) = items.next() else {
            return Ok(None);
        };
        let mut root = self.slot(first)?;
        for item in items {
            let slot = self.slot(item)?;
            root = self.union_slots(root, slot);
        }
        Ok(Some(self.items[root].clone()))
    }

    /// The current partition, one `Vec` per set.
    ///
    /// Sets are ordered by their earliest-inserted member, and members keep
    /// insertion order.
    pub fn sets(&self) -> Vec<Vec<T>> {
        let mut by_root: HashMap<usize, usize> = HashMap::new();
        let mut partition: Vec<Vec<T>> = Vec::new();
        for (slot, item) in self.items.iter().enumerate() {
            let root = self.root_of(slot);
            let group = *by_root.entry(root).or_insert_with(|| {
                partition.push(Vec::new());
                partition.len() - 1
            });
            partition[group].push(item.clone());
        }
        partition
    }

    // ------------------------------------------------------------------------
    // Slot-level helpers
    // ------------------------------------------------------------------------

    fn slot(&self, item: &T) -> Result<usize> {
        self.slots
            .get(item)
            .copied()
            .ok_or_else(|| Error::not_found("element", item))
    }

    fn root_of(&self, mut slot: usize) -> usize {
        while self.parent[slot] != slot {
            slot = self.parent[slot];
        }
        slot
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let root = self.root_of(slot);

        // Path compression
        let mut current = slot;
        while self.parent[current] != root && current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union_slots(&mut self, x: usize, y: usize) -> usize {
        let root_x = self.find_slot(x);
        let root_y = self.find_slot(y);
        if root_x == root_y {
            return root_x;
        }

        self.sets -= 1;
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
                root_y
            }
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
                root_x
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
                root_x
            }
        }
    }

    #[cfg(test)]
    fn rank_of(&self, item: &T) -> u32 {
        self.rank[self.slots[item]]
    }
}

impl<T: Eq + Hash + Clone + fmt::Debug> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<T: Eq + Hash + Clone + fmt::Debug> FromIterator<T> for UnionFind<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Eq + Hash + Clone + fmt::Debug> Extend<T> for UnionFind<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

// ============================================================================
// Tests
// ============================================================================
