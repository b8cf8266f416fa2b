//! Project gallery: remote repository fetch, filtering, and card rendering

mod builder;
mod repo;
mod source;

pub use builder::*;
pub use repo::*;
pub use source::*;
