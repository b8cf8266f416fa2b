//! Folio Engine - headless page behavior for a single-page portfolio site
//!
//! Theme persistence, mobile navigation, scroll effects, contact-form
//! validation with a swappable submission transport, and a remote-driven
//! project gallery, all operating on plain data behind an abstract
//! document port.

pub mod app;
pub mod color;
pub mod config;
pub mod dom;
pub mod form;
pub mod gallery;
pub mod page;

pub use app::PageApp;
pub use config::PageConfig;
