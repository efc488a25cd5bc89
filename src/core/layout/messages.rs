//! Messages for adjusting the layout of a tag.
//!
//! Messages are the intended way for key bindings to tweak a tag's layout: sending a
//! [Message] to a tag through [ClientSet::handle_message][crate::ClientSet::handle_message]
//! applies the corresponding parameter change with clamping and marks the tag as needing
//! to be arranged only when something actually changed.
use crate::{core::config::Change, pure::Direction};

/// A request to adjust the layout of a tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Alter the number of clients contained in the master area
    IncMain(i32),
    /// Grow the master area by the given fraction of the work area
    ExpandMain(f64),
    /// Shrink the master area by the given fraction of the work area
    ShrinkMain(f64),
    /// Alter the number of columns used for the stack area
    IncCol(i32),
    /// Switch to the next or previous layout in the configured list
    CycleLayout(Direction),
}

impl Message {
    /// The [Change] to `mwfact` requested by this message, if any.
    ///
    /// The sign of the change is always relative to the master area growing, layouts that
    /// place the master area on the far edge of the screen flip it when it is applied.
    pub fn mwfact_change(&self) -> Option<Change> {
        match *self {
            Message::ExpandMain(step) => Some(Change::Relative(step)),
            Message::ShrinkMain(step) => Some(Change::Relative(-step)),
            _ => None,
        }
    }
}
