//! Room availability status: the fixed presentation table and the holder of
//! the currently selected status.

mod board;
mod descriptor;

pub use board::StatusBoard;
pub use descriptor::{StatusDescriptor, StatusKey};
