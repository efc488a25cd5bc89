//! An [XConn] implementation over an x11rb [Connection].
use crate::{
    pure::geometry::Rect,
    x::{ClientAttr, ClientConfig, XConn},
    x11rb::{Result as X11Result, X11rbError},
    Result, Xid,
};
use tracing::{trace, warn};
use x11rb::{
    connection::Connection,
    protocol::{
        randr::{self, ConnectionExt as _},
        xproto::{
            ChangeWindowAttributesAux, ConfigureWindowAux, ConnectionExt as _, EventMask,
            StackMode, Window,
        },
    },
};

fn client_event_mask(enter_leave: bool) -> EventMask {
    let mask = EventMask::FOCUS_CHANGE | EventMask::PROPERTY_CHANGE | EventMask::STRUCTURE_NOTIFY;
    if enter_leave {
        mask | EventMask::ENTER_WINDOW | EventMask::LEAVE_WINDOW
    } else {
        mask
    }
}

fn frame_event_mask(enter_leave: bool) -> EventMask {
    let mask = EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY;
    if enter_leave {
        mask | EventMask::ENTER_WINDOW | EventMask::LEAVE_WINDOW
    } else {
        mask
    }
}

/// A connection to the X server using the x11rb crate.
#[derive(Debug)]
pub struct X11rbConn<C> {
    conn: C,
    root: Window,
}

impl<C> X11rbConn<C>
where
    C: Connection,
{
    /// Wrap an existing connection, using the root window of the given X screen.
    ///
    /// Fails if the server does not support the RandR extension.
    pub fn new_for_connection(conn: C, screen: usize) -> X11Result<Self> {
        let root = conn
            .setup()
            .roots
            .get(screen)
            .ok_or(X11rbError::MissingScreen(screen))?
            .root;

        if conn
            .extension_information(randr::X11_EXTENSION_NAME)?
            .is_none()
        {
            return Err(X11rbError::MissingRandRSupport);
        }

        Ok(Self { conn, root })
    }

    /// A reference to the underlying x11rb connection.
    pub fn connection(&self) -> &C {
        &self.conn
    }

    fn monitors(&self) -> X11Result<Vec<Rect>> {
        let reply = self.conn.randr_get_monitors(self.root, true)?.reply()?;

        Ok(reply
            .monitors
            .iter()
            .map(|m| {
                Rect::new(
                    m.x.max(0) as u32,
                    m.y.max(0) as u32,
                    m.width as u32,
                    m.height as u32,
                )
            })
            .collect())
    }

    fn change_attributes(&self, id: Xid, aux: &ChangeWindowAttributesAux) -> X11Result<()> {
        self.conn.change_window_attributes(*id, aux)?;

        Ok(())
    }

    fn configure(&self, id: Xid, aux: &ConfigureWindowAux) -> X11Result<()> {
        self.conn.configure_window(*id, aux)?;

        Ok(())
    }
}

impl<C> XConn for X11rbConn<C>
where
    C: Connection,
{
    fn root(&self) -> Xid {
        Xid(self.root)
    }

    fn screen_details(&self) -> Result<Vec<Rect>> {
        let rects = self.monitors()?;
        trace!(?rects, "fetched screen details");

        Ok(rects)
    }

    fn map(&self, id: Xid) -> Result<()> {
        self.conn.map_window(*id).map_err(X11rbError::from)?;

        Ok(())
    }

    fn unmap(&self, id: Xid) -> Result<()> {
        self.conn.unmap_window(*id).map_err(X11rbError::from)?;

        Ok(())
    }

    fn set_client_attributes(&self, id: Xid, attrs: &[ClientAttr]) -> Result<()> {
        let aux = attrs
            .iter()
            .fold(ChangeWindowAttributesAux::new(), |aux, attr| match *attr {
                ClientAttr::BorderColor(c) => aux.border_pixel(c),
                ClientAttr::ClientEventMask => aux.event_mask(client_event_mask(true)),
                ClientAttr::IgnoreEnterLeaveMask => aux.event_mask(client_event_mask(false)),
                ClientAttr::FrameEventMask => aux.event_mask(frame_event_mask(true)),
                ClientAttr::FrameIgnoreEnterLeaveMask => aux.event_mask(frame_event_mask(false)),
            });

        Ok(self.change_attributes(id, &aux)?)
    }

    fn set_client_config(&self, id: Xid, data: &[ClientConfig]) -> Result<()> {
        let aux = data
            .iter()
            .fold(ConfigureWindowAux::new(), |aux, conf| match *conf {
                ClientConfig::BorderPx(px) => aux.border_width(px),
                ClientConfig::Position(r) => aux
                    .x(r.x as i32)
                    .y(r.y as i32)
                    .width(r.w)
                    .height(r.h),
                ClientConfig::StackTop => aux.stack_mode(StackMode::ABOVE),
            });

        Ok(self.configure(id, &aux)?)
    }

    fn flush(&self) {
        if let Err(e) = self.conn.flush() {
            warn!(%e, "unable to flush x11rb connection");
        }
    }
}
