//! Side effect free management of internal window manager state
//!
//! Nothing in this module talks to the X server: mutations of a [ClientSet] only update
//! in memory state and record which tags need to be arranged and which screens need their
//! visibility reconciled.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod client;
pub mod client_set;
pub mod focus;
pub mod geometry;
pub mod screen;
pub mod tag;
pub mod tags;

#[doc(inline)]
pub use client::{Client, ClientFlags};
#[doc(inline)]
pub use client_set::ClientSet;
#[doc(inline)]
pub use focus::FocusHistory;
#[doc(inline)]
pub use screen::Screen;
#[doc(inline)]
pub use tag::Tag;
#[doc(inline)]
pub use tags::TagSet;

/// A direction to permute a sequence in
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards the next element, wrapping at the end
    Forward,
    /// Towards the previous element, wrapping at the start
    Backward,
}

impl Direction {
    /// Step `ix` one place within a sequence of length `len` in this direction.
    ///
    /// Returns `0` for an empty sequence.
    pub fn step(&self, ix: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        match self {
            Direction::Forward => (ix + 1) % len,
            Direction::Backward => (ix + len - 1) % len,
        }
    }
}
