//! Core logic for arranging clients and reconciling their visibility with the X server.
//!
//! The [layout] module holds the placement algorithms, [arrange] runs them for screens
//! whose tags have been marked as dirty and [banning] decides which windows need to be
//! mapped or unmapped. Actually talking to the X server is handled by the
//! [XConnExt][crate::x::XConnExt] trait which drives all of the above.
pub mod arrange;
pub mod banning;
pub mod config;
pub mod layout;

#[doc(inline)]
pub use arrange::Arrangement;
#[doc(inline)]
pub use banning::RebanPlan;
