//! Logic for interacting with the X server
use crate::{
    core::{Arrangement, RebanPlan},
    pure::{geometry::Rect, ClientFlags, ClientSet},
    Result, Xid,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(test)]
pub mod mock;

/// On screen configuration options for X clients
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClientConfig {
    /// The border width in pixels
    BorderPx(u32),
    /// Absolute size and position on the screen as a [Rect]
    Position(Rect),
    /// Mark this window as stacking above all other windows
    StackTop,
}

/// Attributes for an X11 client window
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientAttr {
    /// Border color as an argb hex value
    BorderColor(u32),
    /// Set the pre-defined client event mask
    ClientEventMask,
    /// Set the client event mask without enter / leave notifications
    IgnoreEnterLeaveMask,
    /// Set the pre-defined event mask for client frames
    FrameEventMask,
    /// Set the frame event mask without enter / leave notifications
    FrameIgnoreEnterLeaveMask,
}

/// A handle on a running X11 connection that we can use for issuing X requests.
///
/// XConn is intended as an abstraction layer over the display server: it only needs to
/// be able to report the available screens, map and unmap windows and update their
/// geometry and attributes. Requests may be buffered until [XConn::flush] is called.
pub trait XConn {
    /// The ID of the window manager root window.
    fn root(&self) -> Xid;
    /// Ask the X server for the dimensions of each currently available screen.
    fn screen_details(&self) -> Result<Vec<Rect>>;
    /// Map the given window to the screen with its current geometry, making it visible.
    fn map(&self, id: Xid) -> Result<()>;
    /// Unmap the given window from the screen, hiding it.
    fn unmap(&self, id: Xid) -> Result<()>;
    /// Set one or more [ClientAttr] for a given window.
    fn set_client_attributes(&self, id: Xid, attrs: &[ClientAttr]) -> Result<()>;
    /// Set the [ClientConfig] for a given window.
    fn set_client_config(&self, id: Xid, data: &[ClientConfig]) -> Result<()>;
    /// Flush any pending requests to the X server.
    fn flush(&self);
}

/// Extended functionality for [XConn] impls in order to keep the X server in sync
/// with a [ClientSet].
pub trait XConnExt: XConn + Sized {
    /// Run the layout for the given screen if it has dirty tags and apply the result.
    #[tracing::instrument(level = "debug", skip(self, cs))]
    fn arrange(&self, cs: &mut ClientSet, screen: usize) -> Result<()> {
        if let Some(a) = cs.arrange(screen)? {
            self.apply_arrangement(cs, &a)?;
            self.flush();
        }

        Ok(())
    }

    /// Run the layout for every screen with dirty tags and apply the results.
    fn arrange_all(&self, cs: &mut ClientSet) -> Result<()> {
        for a in cs.arrange_all()? {
            self.apply_arrangement(cs, &a)?;
        }
        self.flush();

        Ok(())
    }

    /// Send the geometry and stacking changes of an [Arrangement] to the X server.
    ///
    /// Fullscreen clients are positioned without a border.
    fn apply_arrangement(&self, cs: &ClientSet, a: &Arrangement) -> Result<()> {
        for &(id, r) in a.positions.iter() {
            let border = match cs.client(id) {
                Some(c) if c.is(ClientFlags::FULLSCREEN) => 0,
                Some(c) => c.border(),
                None => continue,
            };
            self.position_client(id, r, border)?;
        }

        for &id in a.raise.iter() {
            trace!(%id, "raising client");
            self.set_client_config(id, &[ClientConfig::StackTop])?;
        }

        Ok(())
    }

    /// Set the border width and geometry of a client window.
    fn position_client(&self, id: Xid, r: Rect, border: u32) -> Result<()> {
        trace!(%id, ?r, border, "positioning client");
        self.set_client_config(id, &[ClientConfig::BorderPx(border), ClientConfig::Position(r)])
    }

    /// Bring the mapped state of clients on every screen that requested it in line with
    /// their visibility.
    fn banning_refresh(&self, cs: &mut ClientSet) -> Result<()> {
        for screen in 0..cs.screens().len() {
            if cs.needs_reban(screen) {
                self.banning_refresh_screen(cs, screen)?;
            }
        }

        Ok(())
    }

    /// Reconcile the mapped state of the clients on a single screen.
    ///
    /// All unbans are issued and flushed before any bans so that a window being shown
    /// is never preceded by the window it replaces being hidden. Enter / leave events are
    /// suppressed for the screen's clients while the changes are made so that the pointer
    /// ending up over a newly mapped window does not steal focus. The full event masks are
    /// restored even if mapping or unmapping a client fails, in which case the screen is
    /// left marked as needing to be rebanned.
    #[tracing::instrument(level = "debug", skip(self, cs))]
    fn banning_refresh_screen(&self, cs: &mut ClientSet, screen: usize) -> Result<()> {
        let plan = cs.reban_plan(screen)?;

        if !plan.is_empty() {
            let on_screen: Vec<(Xid, Option<Xid>)> = cs
                .clients()
                .filter(|c| c.screen() == screen)
                .map(|c| (c.id(), c.frame()))
                .collect();

            self.set_enter_leave_masks(&on_screen, false)?;
            let applied = self.apply_reban_plan(cs, &plan);
            let restored = self.set_enter_leave_masks(&on_screen, true);
            self.flush();
            applied?;
            restored?;

            debug!(n_unban = plan.unban.len(), n_ban = plan.ban.len(), "rebanned screen");
        }

        cs.clear_reban(screen);

        Ok(())
    }

    /// Issue the unbans of a [RebanPlan] followed by its bans, flushing after each batch.
    fn apply_reban_plan(&self, cs: &mut ClientSet, plan: &RebanPlan) -> Result<()> {
        for &id in plan.unban.iter() {
            self.unban(cs, id)?;
        }
        self.flush();

        for &id in plan.ban.iter() {
            self.ban(cs, id)?;
        }
        self.flush();

        Ok(())
    }

    /// Map a banned client (and its frame) if it is not already mapped.
    fn unban(&self, cs: &mut ClientSet, id: Xid) -> Result<()> {
        let frame = match cs.client(id) {
            Some(c) if c.is_banned() => c.frame(),
            _ => return Ok(()),
        };

        trace!(%id, ?frame, "unbanning client");
        if let Some(f) = frame {
            self.map(f)?;
        }
        self.map(id)?;
        cs.set_banned(id, false);

        Ok(())
    }

    /// Unmap a client (and its frame) if it is currently mapped.
    fn ban(&self, cs: &mut ClientSet, id: Xid) -> Result<()> {
        let frame = match cs.client(id) {
            Some(c) if !c.is_banned() => c.frame(),
            _ => return Ok(()),
        };

        trace!(%id, ?frame, "banning client");
        if let Some(f) = frame {
            self.unmap(f)?;
        }
        self.unmap(id)?;
        cs.set_banned(id, true);

        Ok(())
    }

    /// Enable or disable enter / leave notifications for the given clients and frames.
    fn set_enter_leave_masks(&self, ids: &[(Xid, Option<Xid>)], enabled: bool) -> Result<()> {
        let (client_mask, frame_mask) = if enabled {
            (ClientAttr::ClientEventMask, ClientAttr::FrameEventMask)
        } else {
            (
                ClientAttr::IgnoreEnterLeaveMask,
                ClientAttr::FrameIgnoreEnterLeaveMask,
            )
        };

        for &(id, frame) in ids.iter() {
            if let Some(f) = frame {
                self.set_client_attributes(f, &[frame_mask])?;
            }
            self.set_client_attributes(id, &[client_mask])?;
        }

        Ok(())
    }

    /// Arrange every dirty screen and then reconcile visibility.
    fn refresh(&self, cs: &mut ClientSet) -> Result<()> {
        self.arrange_all(cs)?;
        self.banning_refresh(cs)
    }
}

impl<T> XConnExt for T where T: XConn {}
