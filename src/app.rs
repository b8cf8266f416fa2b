//! Page application: wires every feature to the document port
//!
//! Each feature checks its required elements once at startup and degrades
//! to a no-op when something is missing; nothing here is fatal to the
//! rest of the page.

use crate::config::PageConfig;
use crate::dom::{classes, elements, DocumentPort, GITHUB_USERNAME_ATTR};
use crate::form::{
    FieldName, FormController, SubmissionOutcome, SubmissionTransport, ValidationResult,
};
use crate::gallery::{build_cards, RepoSource};
use crate::page::{
    active_section, header_scrolled, scroll_target, ElementRect, MobileMenu, RevealTracker,
    SectionMetrics, ThemeController, ThemeStore,
};
use chrono::{Datelike, Utc};

/// Which page features survived the element checks at startup
#[derive(Debug, Clone, Copy)]
struct EnabledFeatures {
    theme: bool,
    menu: bool,
    header: bool,
    form: bool,
    gallery: bool,
    year: bool,
}

impl EnabledFeatures {
    fn detect(dom: &dyn DocumentPort) -> Self {
        let check = |feature: &str, ids: &[&str]| {
            let missing: Vec<&&str> = ids.iter().filter(|id| !dom.element_exists(id)).collect();
            if missing.is_empty() {
                true
            } else {
                tracing::warn!(?missing, "skipping {feature}: required elements absent");
                false
            }
        };

        Self {
            theme: check("theme toggle", &[elements::THEME_TOGGLE]),
            menu: check(
                "mobile menu",
                &[elements::MOBILE_MENU, elements::MOBILE_MENU_TOGGLE],
            ),
            header: check("header scroll effects", &[elements::HEADER]),
            form: check(
                "contact form",
                &[elements::CONTACT_FORM, elements::SUCCESS_MESSAGE],
            ),
            gallery: check("project gallery", &[elements::PROJECTS_GRID]),
            year: check("footer year", &[elements::YEAR]),
        }
    }
}

/// Main application struct
pub struct PageApp {
    /// Page configuration
    pub config: PageConfig,
    /// Theme state, synced to the persistent store
    theme: ThemeController,
    /// Mobile navigation drawer
    menu: MobileMenu,
    /// Contact form state machine
    form: FormController,
    /// Reveal-on-scroll bookkeeping
    reveal: RevealTracker,
    /// Presentation side of the page
    dom: Box<dyn DocumentPort>,
    features: EnabledFeatures,
}

impl PageApp {
    /// Wire up every feature whose elements exist, apply the persisted
    /// theme, and stamp the footer year.
    pub fn new(
        config: PageConfig,
        mut dom: Box<dyn DocumentPort>,
        theme_store: Box<dyn ThemeStore>,
    ) -> Self {
        let features = EnabledFeatures::detect(dom.as_ref());

        let theme = ThemeController::init(theme_store);
        if features.theme {
            dom.set_class(elements::BODY, classes::DARK_MODE, theme.current().is_dark());
        }

        if features.year {
            dom.set_text(elements::YEAR, &Utc::now().year().to_string());
        }

        Self {
            config,
            theme,
            menu: MobileMenu::default(),
            form: FormController::new(),
            reveal: RevealTracker::new(),
            dom,
            features,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Theme toggle button clicked
    pub fn handle_theme_toggle(&mut self) {
        if !self.features.theme {
            return;
        }
        let theme = self.theme.toggle();
        self.dom
            .set_class(elements::BODY, classes::DARK_MODE, theme.is_dark());
        tracing::debug!(?theme, "theme toggled");
    }

    /// Mobile menu button clicked
    pub fn handle_menu_toggle(&mut self) {
        if !self.features.menu {
            return;
        }
        let open = self.menu.toggle();
        self.dom
            .set_class(elements::MOBILE_MENU, classes::MENU_ACTIVE, open);
    }

    /// An in-page nav link was activated: close the drawer and scroll to
    /// the anchor's section.
    pub fn handle_nav_click(
        &mut self,
        href: &str,
        sections: &[SectionMetrics],
        header_height: f64,
    ) {
        if self.features.menu && self.menu.is_open() {
            self.menu.close();
            self.dom
                .set_class(elements::MOBILE_MENU, classes::MENU_ACTIVE, false);
        }
        if let Some(target) = scroll_target(href, sections, header_height) {
            self.dom.scroll_to(target);
        }
    }

    /// Scroll position changed: update the header state, the active nav
    /// link, and reveal any newly-visible elements.
    pub fn handle_scroll(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        header_height: f64,
        sections: &[SectionMetrics],
        observed: &[ElementRect],
    ) {
        if self.features.header {
            self.dom
                .set_class(elements::HEADER, classes::SCROLLED, header_scrolled(scroll_y));
            self.dom
                .set_active_nav_link(active_section(sections, scroll_y, header_height));
        }

        for id in self.reveal.observe(observed, viewport_height) {
            self.dom.reveal(&id);
        }
    }

    /// A field received input or lost focus
    pub fn handle_field_input(&mut self, field: FieldName, value: &str) {
        if !self.features.form {
            return;
        }
        let result = self.form.set_field_value(field, value);
        self.apply_field_result(field, &result);
    }

    /// A field lost focus without a value change
    pub fn handle_field_blur(&mut self, field: FieldName) {
        if !self.features.form {
            return;
        }
        let result = self.form.revalidate_field(field);
        self.apply_field_result(field, &result);
    }

    fn apply_field_result(&mut self, field: FieldName, result: &ValidationResult) {
        self.dom.set_field_error(field, result.message.as_deref());
    }

    /// Submit the contact form through the given transport. Returns `None`
    /// when the page carries no form.
    ///
    /// Rejections surface inline per field; success clears the form and
    /// shows the notice (callers follow up with [`auto_dismiss_notice`]);
    /// a transport failure shows the form-level error notice when the
    /// page has one.
    ///
    /// [`auto_dismiss_notice`]: PageApp::auto_dismiss_notice
    pub async fn handle_submit(
        &mut self,
        transport: &dyn SubmissionTransport,
    ) -> Option<SubmissionOutcome> {
        if !self.features.form {
            return None;
        }
        self.dom.set_visible(elements::SUCCESS_MESSAGE, false);

        let outcome = self.form.submit(transport).await;
        match &outcome {
            SubmissionOutcome::Rejected { field_errors } => {
                for &field in FieldName::ALL.iter() {
                    self.dom
                        .set_field_error(field, field_errors.get(&field).map(String::as_str));
                }
            }
            SubmissionOutcome::Succeeded => {
                for &field in FieldName::ALL.iter() {
                    self.dom.set_field_error(field, None);
                }
                self.dom.set_visible(elements::SUCCESS_MESSAGE, true);
            }
            SubmissionOutcome::Failed { message } => {
                if self.dom.element_exists(elements::FORM_ERROR) {
                    self.dom.set_text(elements::FORM_ERROR, message);
                    self.dom.set_visible(elements::FORM_ERROR, true);
                } else {
                    tracing::warn!(%message, "no form-error element to surface failure");
                }
            }
        }
        Some(outcome)
    }

    /// Wait out the configured notice lifetime, then hide it
    pub async fn auto_dismiss_notice(&mut self) {
        tokio::time::sleep(self.config.success_dismiss()).await;
        self.form.dismiss_notice();
        self.dom.set_visible(elements::SUCCESS_MESSAGE, false);
    }

    /// One gallery-build pass: fetch, filter, render.
    ///
    /// Fetch failures are logged and swallowed; the gallery region keeps
    /// its prior state.
    pub async fn load_gallery(&mut self, source: &dyn RepoSource) {
        if !self.features.gallery {
            return;
        }

        let username = match self.gallery_username() {
            Some(username) => username,
            None => {
                tracing::warn!("skipping gallery: no source account configured");
                return;
            }
        };

        match build_cards(source, &username).await {
            Ok(cards) => {
                self.dom.clear_gallery();
                for card in &cards {
                    self.dom.append_card(card);
                }
                tracing::debug!(count = cards.len(), "gallery rendered");
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load gallery");
            }
        }
    }

    fn gallery_username(&self) -> Option<String> {
        self.config
            .github_username
            .clone()
            .or_else(|| self.dom.attribute(elements::PROJECTS_GRID, GITHUB_USERNAME_ATTR))
    }
}
