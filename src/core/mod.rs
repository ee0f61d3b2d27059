//! Core domain types

pub mod error;
pub mod notice;
pub mod vector;

pub use error::{Error, Result};
pub use notice::{KeyKind, Notice, Reported};
