//! Helpers and utilities for using x11rb as a back end for trellis
use ::x11rb::rust_connection::RustConnection;

pub mod xconn;

#[doc(inline)]
pub use xconn::X11rbConn;

/// Result type for fallible methods using x11rb
pub type Result<T> = std::result::Result<T, X11rbError>;

/// Connect to the X server named by `$DISPLAY` and wrap the connection in an [X11rbConn].
pub fn connect() -> crate::Result<X11rbConn<RustConnection>> {
    let (conn, screen) = RustConnection::connect(None).map_err(X11rbError::from)?;

    Ok(X11rbConn::new_for_connection(conn, screen)?)
}

/// Enum to store the various ways that operations can fail inside of the
/// x11rb implementation of [XConn][crate::x::XConn].
#[derive(thiserror::Error, Debug)]
pub enum X11rbError {
    /// Unable to establish a connection to the X server
    #[error(transparent)]
    Connect(#[from] ::x11rb::errors::ConnectError),

    /// The X11 connection broke
    #[error(transparent)]
    Connection(#[from] ::x11rb::errors::ConnectionError),

    /// Could not get X11 request reply
    #[error(transparent)]
    ReplyError(#[from] ::x11rb::errors::ReplyError),

    /// The X server reported a screen number that it does not have
    #[error("the X server has no screen with index {0}")]
    MissingScreen(usize),

    /// The X11 server does not support the RandR extension
    #[error("the X11 server does not support the RandR extension")]
    MissingRandRSupport,
}
