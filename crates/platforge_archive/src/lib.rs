//! # platforge_archive
//!
//! Zip packaging for PlatForge.
//!
//! Takes the ordered file list a generation produced and packs it into a
//! single deflate-compressed zip buffer, one entry per file, entry order
//! matching input order. Nothing is ever written to disk.

pub mod error;
pub mod writer;

pub use error::{ArchiveError, ArchiveResult};
pub use writer::pack;
