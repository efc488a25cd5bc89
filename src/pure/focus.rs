//! Most recently used focus history
use std::{
    collections::linked_list::{self, LinkedList},
    fmt,
};

/// An ordered history of focused clients with the most recently focused client at
/// the head.
///
/// Each client appears at most once: focusing a client that is already present moves
/// it to the head rather than adding a second entry. Entries are only ever added and
/// removed explicitly so the history is unaffected by tag membership or layout changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusHistory<C> {
    nodes: LinkedList<C>,
}

impl<C> Default for FocusHistory<C> {
    fn default() -> Self {
        Self {
            nodes: LinkedList::new(),
        }
    }
}

impl<C: fmt::Display> fmt::Display for FocusHistory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<String> = self.nodes.iter().map(|c| format!("{c}")).collect();

        write!(f, "FocusHistory([{}])", nodes.join(", "))
    }
}

impl<C> FocusHistory<C>
where
    C: PartialEq,
{
    /// Create a new, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of clients in this history.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether this history is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The most recently focused client, if any.
    pub fn head(&self) -> Option<&C> {
        self.nodes.front()
    }

    /// Check whether the given client has an entry in this history.
    pub fn contains(&self, c: &C) -> bool {
        self.nodes.contains(c)
    }

    /// Record `c` as the most recently focused client.
    ///
    /// If `c` already has an entry it is detached from its current position before
    /// being moved to the head.
    pub fn add(&mut self, c: C) {
        let node = pop_where!(self, nodes, |elem: &C| elem == &c).unwrap_or(c);
        self.nodes.push_front(node);
    }

    /// Remove the entry for `c`, returning it if it was present.
    pub fn remove(&mut self, c: &C) -> Option<C> {
        pop_where!(self, nodes, |elem: &C| elem == c)
    }

    /// Iterate over the history from most to least recently focused.
    pub fn iter(&self) -> linked_list::Iter<'_, C> {
        self.nodes.iter()
    }

    /// Find the `index`-th entry from the head that satisfies `pred`, where an index of
    /// zero is the most recent matching entry.
    pub fn nth_matching<F>(&self, index: usize, pred: F) -> Option<&C>
    where
        F: Fn(&C) -> bool,
    {
        self.nodes.iter().filter(|c| pred(c)).nth(index)
    }
}

impl<'a, C> IntoIterator for &'a FocusHistory<C> {
    type Item = &'a C;
    type IntoIter = linked_list::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
