//! Dense set of roster positions with O(1) insert, remove and membership.

/// Set over `0..capacity` backed by a member list plus a slot index.
///
/// Removal swaps the last member into the hole, so iteration order is
/// not position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSet {
    members: Vec<usize>,
    slot: Vec<Option<usize>>,
}

impl PositionSet {
    /// Set containing every position in `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        Self {
            members: (0..capacity).collect(),
            slot: (0..capacity).map(Some).collect(),
        }
    }

    pub fn contains(&self, position: usize) -> bool {
        self.slot.get(position).is_some_and(|s| s.is_some())
    }

    /// Inserts `position`; returns false if it was already present.
    pub fn insert(&mut self, position: usize) -> bool {
        if self.contains(position) {
            return false;
        }
        self.slot[position] = Some(self.members.len());
        self.members.push(position);
        true
    }

    /// Removes `position`; returns false if it was absent.
    pub fn remove(&mut self, position: usize) -> bool {
        let Some(k) = self.slot.get(position).copied().flatten() else {
            return false;
        };
        self.members.swap_remove(k);
        if let Some(&moved) = self.members.get(k) {
            self.slot[moved] = Some(k);
        }
        self.slot[position] = None;
        true
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The `k`-th member in internal order.
    pub fn nth(&self, k: usize) -> Option<usize> {
        self.members.get(k).copied()
    }

    /// Members in internal order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    /// Members sorted by position.
    pub fn sorted(&self) -> Vec<usize> {
        let mut v = self.members.clone();
        v.sort_unstable();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_and_remove() {
        let mut s = PositionSet::full(5);
        assert_eq!(s.len(), 5);
        assert!(s.remove(1));
        assert!(!s.remove(1));
        assert!(!s.contains(1));
        assert!(s.contains(4));
        assert_eq!(s.sorted(), vec![0, 2, 3, 4]);
        assert!(s.remove(4));
        assert!(s.remove(0));
        assert_eq!(s.sorted(), vec![2, 3]);
    }

    #[test]
    fn test_insert_after_remove() {
        let mut s = PositionSet::full(3);
        s.remove(0);
        s.remove(2);
        assert!(s.insert(2));
        assert!(!s.insert(2));
        assert_eq!(s.sorted(), vec![1, 2]);
        assert!(!s.contains(7));
        assert!(!s.remove(7));
    }

    #[test]
    fn test_nth_covers_members() {
        let mut s = PositionSet::full(4);
        s.remove(2);
        let mut seen: Vec<usize> = (0..s.len()).filter_map(|k| s.nth(k)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 3]);
        assert_eq!(s.nth(3), None);
    }
}
