//! Built-in functionality for trellis.
//!
//! The layouts in this module provide the classic master / stack arrangements along with
//! the max and floating layouts. More specialised layouts are available via the
//! `extensions` module.
pub mod layout;
