//! Abstract UI port
//!
//! The engine never touches a real document; it requests presentation
//! effects through this trait so every feature can run against a mock.

use crate::form::FieldName;
use crate::gallery::RenderedCard;

/// Ids of the elements the page contract expects
pub mod elements {
    pub const BODY: &str = "body";
    pub const HEADER: &str = "header";
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const MOBILE_MENU_TOGGLE: &str = "mobile-menu-toggle";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const SUCCESS_MESSAGE: &str = "success-message";
    pub const FORM_ERROR: &str = "form-error";
    pub const PROJECTS_GRID: &str = "projects-grid";
    pub const YEAR: &str = "year";
}

/// Class names the engine toggles
pub mod classes {
    pub const DARK_MODE: &str = "dark-mode";
    pub const SCROLLED: &str = "scrolled";
    pub const MENU_ACTIVE: &str = "active";
}

/// Attribute on the projects grid naming the gallery's source account
pub const GITHUB_USERNAME_ATTR: &str = "data-github-username";

/// Trait for document operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait DocumentPort: Send + Sync {
    /// Whether an element with this id exists in the document
    fn element_exists(&self, id: &str) -> bool;

    /// Read an attribute off an element
    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    /// Replace an element's text content
    fn set_text(&mut self, id: &str, text: &str);

    /// Add or remove a class on an element
    fn set_class(&mut self, id: &str, class: &str, enabled: bool);

    /// Show or hide an element
    fn set_visible(&mut self, id: &str, visible: bool);

    /// Move the `active` marker to the nav link for a section, or clear it
    fn set_active_nav_link<'a>(&mut self, section_id: Option<&'a str>);

    /// Apply or clear a field's error presentation (border highlight plus
    /// inline message)
    fn set_field_error<'a>(&mut self, field: FieldName, message: Option<&'a str>);

    /// Empty the gallery region before a rebuild
    fn clear_gallery(&mut self);

    /// Append one rendered card to the gallery region
    fn append_card(&mut self, card: &RenderedCard);

    /// Mark a reveal-tracked element as visible
    fn reveal(&mut self, id: &str);

    /// Smooth-scroll the viewport to a vertical offset
    fn scroll_to(&mut self, y: f64);
}
