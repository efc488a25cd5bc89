//! Per-tag layout state
use crate::core::layout::{Layout, LayoutParams};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named tag belonging to a single screen.
///
/// Each tag carries the parameters used to lay out clients while it is the primary
/// selected tag of its screen along with a dirty flag recording whether a layout pass
/// is required.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub(crate) name: String,
    pub(crate) screen: usize,
    pub(crate) layout: Layout,
    pub(crate) params: LayoutParams,
    pub(crate) need_arrange: bool,
}

impl Tag {
    /// Create a new tag owned by the given screen.
    pub fn new<T>(name: T, screen: usize, layout: Layout, params: LayoutParams) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: name.into(),
            screen,
            layout,
            params,
            need_arrange: false,
        }
    }

    /// The name of this tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The index of the screen that owns this tag.
    pub fn screen(&self) -> usize {
        self.screen
    }

    /// The [Layout] used when this tag is the primary selected tag of its screen.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The current [LayoutParams] for this tag.
    pub fn params(&self) -> LayoutParams {
        self.params
    }

    /// Whether a layout pass is pending for this tag.
    pub fn needs_arrange(&self) -> bool {
        self.need_arrange
    }
}
