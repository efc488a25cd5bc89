//! trellis :: headless walkthrough
//!
//! Drives a [ClientSet] through a few typical window manager events using an [XConn] that
//! only logs the requests it is given. Run with `RUST_LOG=trellis=trace` to see every
//! request along with the scheduler and reconciler summaries.
use trellis::{
    core::{config::Change, layout::Message},
    pure::{geometry::Rect, Direction},
    x::{ClientAttr, ClientConfig, XConn, XConnExt},
    ClientSet, Config, Result, Xid,
};
use tracing::info;
use tracing_subscriber::{self, prelude::*, EnvFilter};

/// Logs every request instead of sending it to an X server.
#[derive(Debug)]
struct LoggingConn {
    screens: Vec<Rect>,
}

impl XConn for LoggingConn {
    fn root(&self) -> Xid {
        Xid::from(0)
    }

    fn screen_details(&self) -> Result<Vec<Rect>> {
        Ok(self.screens.clone())
    }

    fn map(&self, id: Xid) -> Result<()> {
        info!(%id, "map");
        Ok(())
    }

    fn unmap(&self, id: Xid) -> Result<()> {
        info!(%id, "unmap");
        Ok(())
    }

    fn set_client_attributes(&self, id: Xid, attrs: &[ClientAttr]) -> Result<()> {
        info!(%id, ?attrs, "set attributes");
        Ok(())
    }

    fn set_client_config(&self, id: Xid, data: &[ClientConfig]) -> Result<()> {
        info!(%id, ?data, "configure");
        Ok(())
    }

    fn flush(&self) {
        info!("flush");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .finish()
        .init();

    let conn = LoggingConn {
        screens: vec![Rect::new(0, 0, 1920, 1080), Rect::new(1920, 0, 1280, 1024)],
    };
    let mut cs = ClientSet::try_new(&Config::default(), conn.screen_details()?)?;

    for id in 1..=4 {
        let c = cs.new_client(id, 0, Rect::new(100, 100, 640, 480));
        cs.manage(c)?;
    }
    let c = cs.new_client(5, 1, Rect::new(0, 0, 800, 600));
    cs.manage(c)?;
    conn.refresh(&mut cs)?;

    info!("growing the master area and adding a second master");
    cs.handle_message(0, Message::ExpandMain(0.1))?;
    cs.set_nmaster(0, Change::parse("+1")?)?;
    conn.refresh(&mut cs)?;

    info!("moving a client to the second tag and viewing it");
    cs.toggle_membership(Xid::from(2), 1)?;
    cs.toggle_membership(Xid::from(2), 0)?;
    cs.view_only(1)?;
    conn.refresh(&mut cs)?;

    info!("switching layouts on the second tag");
    let layout = cs.cycle_layout(1, Direction::Forward)?;
    info!(%layout, "new layout");
    conn.refresh(&mut cs)?;

    info!("nothing is dirty so nothing is sent");
    conn.refresh(&mut cs)?;

    Ok(())
}
