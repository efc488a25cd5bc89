//! Utility macros for use in the rest of the crate.

/// Remove and return the first element of a [LinkedList][std::collections::LinkedList]
/// field that satisfies a predicate, preserving the order of the remaining elements.
#[doc(hidden)]
#[macro_export]
macro_rules! pop_where {
    ($self:ident, $lst:ident, $($pred:tt)+) => {{
        let placeholder = ::std::mem::take(&mut $self.$lst);

        let mut remaining = ::std::collections::LinkedList::default();
        let mut popped = None;
        let pred = $($pred)+;

        for item in placeholder.into_iter() {
            if popped.is_none() && pred(&item) {
                popped = Some(item);
            } else {
                remaining.push_back(item);
            }
        }

        ::std::mem::swap(&mut $self.$lst, &mut remaining);

        popped
    }};
}

/// Create a [TagSet][crate::TagSet] containing the given tag indices.
///
/// ```
/// # use trellis::{tagset, TagSet};
/// let tags = tagset![0, 2];
///
/// assert!(tags.contains(0));
/// assert!(!tags.contains(1));
/// assert!(tags.contains(2));
/// assert_eq!(tagset![], TagSet::empty());
/// ```
#[macro_export]
macro_rules! tagset {
    [] => { $crate::TagSet::empty() };
    [$($ix:expr),+ $(,)?] => {{
        let mut _tags = $crate::TagSet::empty();
        $(_tags.insert($ix);)+
        _tags
    }};
}
