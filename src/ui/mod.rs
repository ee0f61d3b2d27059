//! # User Interface
//!
//! Colored terminal output and notice rendering.

pub mod log;

pub use log::{debug, error, header, notice, notices, path_link, success, warn, Log};
