//! Per-client window manager state
use crate::{
    pure::{geometry::Rect, TagSet},
    Xid,
};
use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Boolean window manager state for a [Client].
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClientFlags: u16 {
        /// Positioned by the user rather than by the current layout
        const FLOATING = 1 << 0;
        /// Occupying the full work area of its screen
        const MAXIMIZED = 1 << 1;
        /// Occupying the full geometry of its screen
        const FULLSCREEN = 1 << 2;
        /// Iconified by the user
        const MINIMIZED = 1 << 3;
        /// Hidden by an external collaborator (e.g. a scratchpad)
        const HIDDEN = 1 << 4;
        /// Excluded from focus history navigation and taskbars
        const SKIP = 1 << 5;
        /// Currently unmapped from the screen by the banning reconciler
        const BANNED = 1 << 6;
        /// Shown regardless of which tags are selected on its screen
        const STICKY = 1 << 7;
        /// The layout of its screen has changed since it was last placed
        const FRESH_LAYOUT = 1 << 8;
    }
}

/// A managed client window.
///
/// Clients are owned by a [ClientSet][crate::ClientSet] and referenced everywhere else
/// by their [Xid].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub(crate) id: Xid,
    pub(crate) frame: Option<Xid>,
    pub(crate) geometry: Rect,
    pub(crate) floating_geometry: Rect,
    pub(crate) border: u32,
    pub(crate) flags: ClientFlags,
    pub(crate) screen: usize,
    pub(crate) tags: TagSet,
}

impl Client {
    /// Create a new client on the given screen with its initial geometry.
    ///
    /// The initial geometry is also used as the floating geometry that the client
    /// returns to when not being tiled.
    pub fn new(id: impl Into<Xid>, screen: usize, tags: TagSet, geometry: Rect) -> Self {
        Self {
            id: id.into(),
            frame: None,
            geometry,
            floating_geometry: geometry,
            border: 0,
            flags: ClientFlags::BANNED,
            screen,
            tags,
        }
    }

    /// Set the border width of this client in pixels.
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Attach a decorative frame window to this client.
    pub fn with_frame(mut self, frame: impl Into<Xid>) -> Self {
        self.frame = Some(frame.into());
        self
    }

    /// Set the initial [ClientFlags] for this client.
    ///
    /// Newly managed clients always start banned until the reconciler maps them.
    pub fn with_flags(mut self, flags: ClientFlags) -> Self {
        self.flags = flags | ClientFlags::BANNED;
        self
    }

    /// The X window ID of this client.
    pub fn id(&self) -> Xid {
        self.id
    }

    /// The X window ID of the frame decorating this client, if there is one.
    pub fn frame(&self) -> Option<Xid> {
        self.frame
    }

    /// The current geometry of this client (excluding its border).
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// The geometry this client returns to when floating.
    pub fn floating_geometry(&self) -> Rect {
        self.floating_geometry
    }

    /// The border width of this client in pixels.
    pub fn border(&self) -> u32 {
        self.border
    }

    /// The current [ClientFlags] for this client.
    pub fn flags(&self) -> ClientFlags {
        self.flags
    }

    /// The index of the screen this client belongs to.
    pub fn screen(&self) -> usize {
        self.screen
    }

    /// The tags this client is a member of.
    pub fn tags(&self) -> TagSet {
        self.tags
    }

    /// Check whether the given flags are all set for this client.
    pub fn is(&self, flags: ClientFlags) -> bool {
        self.flags.contains(flags)
    }

    /// Whether or not this client is currently floating.
    pub fn is_floating(&self) -> bool {
        self.flags.contains(ClientFlags::FLOATING)
    }

    /// Whether or not this client is currently unmapped by the reconciler.
    pub fn is_banned(&self) -> bool {
        self.flags.contains(ClientFlags::BANNED)
    }

    /// Clients that are maximized or fullscreen are sized to their screen rather than
    /// by the current layout.
    pub(crate) fn is_screen_sized(&self) -> bool {
        self.flags
            .intersects(ClientFlags::MAXIMIZED | ClientFlags::FULLSCREEN)
    }

    /// Minimized and hidden clients are never visible regardless of their tags.
    pub(crate) fn is_suppressed(&self) -> bool {
        self.flags
            .intersects(ClientFlags::MINIMIZED | ClientFlags::HIDDEN)
    }
}
