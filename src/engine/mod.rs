//! Command builders: one source with edits, and clip concatenation

pub mod concat;
pub mod source;

pub use concat::ClipList;
pub use source::VideoSource;
