//! # Trellis: window arrangement for tag based tiling window managers
//!
//! Trellis is the part of a tiling window manager that decides where every visible client
//! window goes and keeps the mapped / unmapped state of windows on the X server in line with
//! which tags are being viewed.
//!
//! The crate is split into a side-effect free state layer ([pure]), the layout algorithms
//! ([builtin::layout] and [extensions::layout]) and the [core] logic that runs layouts and
//! drives the X server through the [XConn][x::XConn] trait.
//!
//! ## Data flow
//!
//! Mutations of the [ClientSet][pure::ClientSet] (a client being managed, a tag being viewed,
//! the master width factor of a tag changing...) mark the affected tags as needing to be
//! arranged and the affected screens as needing to be rebanned. Calling
//! [arrange][x::XConnExt::arrange] then recomputes geometries for dirty tags only, and
//! [banning_refresh][x::XConnExt::banning_refresh] reconciles which windows are mapped.
#![warn(
    clippy::complexity,
    clippy::correctness,
    clippy::style,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    rustdoc::all
)]
#![doc(test(attr(deny(rust_2018_idioms, warnings))))]
#![doc(test(attr(allow(unused_extern_crates, unused_variables))))]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[macro_use]
mod macros;

pub mod builtin;
pub mod core;
pub mod extensions;
pub mod pure;
pub mod x;
#[cfg(feature = "x11rb")]
pub mod x11rb;

#[doc(inline)]
pub use crate::core::{
    config::Config,
    layout::{Layout, LayoutParams},
};
#[doc(inline)]
pub use pure::{ClientSet, TagSet};

/// An X11 ID for a given resource
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Xid(pub(crate) u32);

impl std::fmt::Display for Xid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for Xid {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u32> for Xid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Xid> for u32 {
    fn from(id: Xid) -> Self {
        id.0
    }
}

/// Error variants from the core trellis library.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A master width factor outside of the open interval (0, 1) was provided
    #[error("mwfact must be within (0, 1): got {0}")]
    InvalidMwfact(f64),

    /// A column count of zero was provided
    #[error("ncol must be at least 1")]
    InvalidNcol,

    /// A string value could not be parsed as an absolute or relative change
    #[error("'{0}' is not a valid absolute or relative value")]
    InvalidValue(String),

    /// There were no screens available to assign tags to
    #[error("there are no screens available")]
    NoScreens,

    /// There are more tags than can be tracked in a [TagSet]
    #[error("{n} tags were requested but at most {max} are supported")]
    TooManyTags {
        /// The number of tags that were requested
        n: usize,
        /// The maximum number of tags that can be tracked
        max: usize,
    },

    /// An attempt was made to reference a client that is not known to trellis
    #[error("{0} is not a known client")]
    UnknownClient(Xid),

    /// An attempt was made to reference a layout that is not known to trellis
    #[error(transparent)]
    UnknownLayout(#[from] strum::ParseError),

    /// An attempt was made to reference a screen that is not known to trellis
    #[error("{0} is not a known screen index")]
    UnknownScreen(usize),

    /// An attempt was made to reference a tag that is not known to trellis
    #[error("{0} is not a known tag index")]
    UnknownTag(usize),

    /// A generic error type for use in user code when needing to construct
    /// a simple [Error].
    #[error("unhandled error: {0}")]
    Raw(String),

    /// Something went wrong using the [x11rb] backend.
    #[cfg(feature = "x11rb")]
    #[error(transparent)]
    X11rb(#[from] crate::x11rb::X11rbError),
}

/// A Result where the error type is a trellis [Error]
pub type Result<T> = std::result::Result<T, Error>;
