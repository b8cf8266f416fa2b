//! Repository entries as received from the remote source, and the cards
//! rendered from them

use serde::Deserialize;

/// One repository as the remote source reports it (snake_case JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

impl Repository {
    /// Forks and archived repositories never reach the gallery
    pub fn is_displayable(&self) -> bool {
        !self.fork && !self.archived
    }
}

/// One fully-derived gallery card, ready for the document port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub name: String,
    pub description: String,
    pub repo_url: String,
    pub image_url: String,
    pub homepage_url: Option<String>,
}
