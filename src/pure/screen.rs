//! Physical outputs and the tags they are showing
use crate::{
    pure::{
        geometry::{Insets, Rect},
        TagSet,
    },
    Xid,
};

/// A physical output along with the tags currently being viewed on it.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub(crate) index: usize,
    pub(crate) r: Rect,
    pub(crate) padding: Insets,
    pub(crate) struts: Insets,
    pub(crate) tags: TagSet,
    pub(crate) selected: TagSet,
    pub(crate) focused: Option<Xid>,
    pub(crate) need_reban: bool,
}

impl Screen {
    pub(crate) fn new(index: usize, r: Rect, padding: Insets) -> Self {
        Self {
            index,
            r,
            padding,
            ..Default::default()
        }
    }

    /// The index of this screen.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The full geometry of this screen.
    pub fn geometry(&self) -> Rect {
        self.r
    }

    /// The region of this screen available for placing clients: the screen geometry
    /// minus configured padding and any space reserved by status bars.
    pub fn work_area(&self) -> Rect {
        self.r.inset(&self.padding.add(&self.struts))
    }

    /// All tags owned by this screen.
    pub fn tags(&self) -> TagSet {
        self.tags
    }

    /// The tags currently being viewed on this screen.
    pub fn selected(&self) -> TagSet {
        self.selected
    }

    /// The tag whose layout and parameters are used when arranging this screen.
    ///
    /// This is the lowest indexed selected tag.
    pub fn primary_tag(&self) -> Option<usize> {
        self.selected.first()
    }

    /// The client currently holding focus on this screen, if any.
    pub fn focused(&self) -> Option<Xid> {
        self.focused
    }

    /// Whether a visibility reconciliation pass is pending for this screen.
    pub fn needs_reban(&self) -> bool {
        self.need_reban
    }
}
