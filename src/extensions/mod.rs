//! Extended functionality beyond the builtin layouts.
//!
//! The layouts here are more specialised than those found in [builtin][crate::builtin] but
//! are selected and configured in exactly the same way through [Layout][crate::Layout].
pub mod layout;
