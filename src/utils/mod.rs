//! Common utilities and helpers

pub mod path;
pub mod time;

pub use time::TimeParser;
