//! A compact set of tag indices
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
};

/// A set of tag indices backed by a single 64 bit word.
///
/// Tags are identified by their index within a [ClientSet][crate::ClientSet] so a TagSet
/// can refer to tags on any screen. Client membership and the selected tags of a screen
/// are both represented as TagSets so that visibility checks are a single intersection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSet(u64);

impl TagSet {
    /// The maximum number of distinct tags that can be tracked
    pub const MAX_TAGS: usize = 64;

    /// A TagSet containing no tags.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A TagSet containing every possible tag index.
    pub const fn all() -> Self {
        Self(u64::MAX)
    }

    /// A TagSet containing the single given tag index.
    ///
    /// Indices at or above [TagSet::MAX_TAGS] produce an empty TagSet.
    pub fn single(ix: usize) -> Self {
        let mut s = Self::empty();
        s.insert(ix);

        s
    }

    /// The raw bits of this TagSet.
    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Check whether this TagSet contains no tags.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The number of tags contained in this TagSet.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the given tag index is a member of this TagSet.
    pub fn contains(&self, ix: usize) -> bool {
        ix < Self::MAX_TAGS && self.0 & (1u64 << ix) != 0
    }

    /// Add the given tag index, returning true if it was not already present.
    pub fn insert(&mut self, ix: usize) -> bool {
        if ix >= Self::MAX_TAGS {
            return false;
        }
        let present = self.contains(ix);
        self.0 |= 1u64 << ix;

        !present
    }

    /// Remove the given tag index, returning true if it was present.
    pub fn remove(&mut self, ix: usize) -> bool {
        let present = self.contains(ix);
        if present {
            self.0 &= !(1u64 << ix);
        }

        present
    }

    /// Flip membership of the given tag index, returning whether it is now present.
    pub fn toggle(&mut self, ix: usize) -> bool {
        if self.contains(ix) {
            self.remove(ix);
            false
        } else {
            self.insert(ix)
        }
    }

    /// Check whether this TagSet and `other` share at least one tag.
    pub fn intersects(&self, other: &TagSet) -> bool {
        self.0 & other.0 != 0
    }

    /// The tags present in exactly one of this TagSet and `other`.
    pub fn symmetric_difference(&self, other: &TagSet) -> TagSet {
        Self(self.0 ^ other.0)
    }

    /// The lowest tag index in this TagSet, if there is one.
    pub fn first(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Iterate over the tag indices in this TagSet in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let bits = self.0;

        (0..Self::MAX_TAGS).filter(move |ix| bits & (1u64 << ix) != 0)
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for TagSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut s = Self::empty();
        for ix in iter {
            s.insert(ix);
        }

        s
    }
}

impl BitOr for TagSet {
    type Output = TagSet;

    fn bitor(self, rhs: TagSet) -> TagSet {
        TagSet(self.0 | rhs.0)
    }
}

impl BitAnd for TagSet {
    type Output = TagSet;

    fn bitand(self, rhs: TagSet) -> TagSet {
        TagSet(self.0 & rhs.0)
    }
}

impl Not for TagSet {
    type Output = TagSet;

    fn not(self) -> TagSet {
        TagSet(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case(tagset![], tagset![0], false; "empty")]
    #[test_case(tagset![1, 2], tagset![2, 3], true; "overlapping")]
    #[test_case(tagset![1, 2], tagset![3, 4], false; "disjoint")]
    #[test_case(tagset![63], TagSet::all(), true; "highest tag")]
    #[test]
    fn intersects(a: TagSet, b: TagSet, expected: bool) {
        assert_eq!(a.intersects(&b), expected);
        assert_eq!(b.intersects(&a), expected);
    }

    #[test]
    fn toggle_flips_a_single_bit() {
        let mut s = tagset![1, 4];

        assert!(s.toggle(2));
        assert_eq!(s, tagset![1, 2, 4]);
        assert!(!s.toggle(4));
        assert_eq!(s, tagset![1, 2]);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut s = TagSet::empty();

        assert!(!s.insert(64));
        assert!(!s.contains(64));
        assert!(s.is_empty());
    }

    #[test]
    fn iteration_is_ascending() {
        let s: TagSet = [7, 0, 3].into_iter().collect();

        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 3, 7]);
        assert_eq!(s.first(), Some(0));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn symmetric_difference_gives_changed_tags() {
        let before = tagset![0, 1];
        let after = tagset![1, 2];

        assert_eq!(before.symmetric_difference(&after), tagset![0, 2]);
    }
}
