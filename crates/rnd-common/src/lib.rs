//! Small helpers shared by handlers
//!
//! Typed reads from loosely-typed JSON maps, slice membership checks and
//! error logging tagged with the caller's location.

#![allow(clippy::must_use_candidate)]

mod extract;
mod log;
mod slices;

pub use extract::MapExt;
pub use log::log_error;
pub use slices::{in_slice, int_in_slice, string_in_slice};
