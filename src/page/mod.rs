//! Page chrome: theme, header/navigation, and reveal-on-scroll state

mod nav;
mod reveal;
mod theme;

pub use nav::*;
pub use reveal::*;
pub use theme::*;
