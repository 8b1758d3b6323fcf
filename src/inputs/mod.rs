//! Terminal input plumbing: key mapping and the capture thread.

pub mod handler;
pub mod key;
