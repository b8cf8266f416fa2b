//! Builds the rendered card set for one gallery pass

use super::repo::{RenderedCard, Repository};
use super::source::{FetchError, RepoSource};
use crate::color::derive_color;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Shown when a repository carries no description
const DESCRIPTION_PLACEHOLDER: &str = "GitHub repository";

/// Placeholder image dimensions and text color
const IMAGE_SIZE: &str = "600x400";
const IMAGE_TEXT_COLOR: &str = "ffffff";

/// `encodeURIComponent` escape set: everything but alphanumerics and
/// `- _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Fetch, filter, and render one pass of gallery cards.
///
/// Relative order follows the source; forks and archived entries are
/// dropped. A rebuild replaces any prior set wholesale.
pub async fn build_cards(
    source: &dyn RepoSource,
    username: &str,
) -> Result<Vec<RenderedCard>, FetchError> {
    let repos = source.list_repos(username).await?;
    let total = repos.len();

    let cards: Vec<RenderedCard> = repos
        .into_iter()
        .filter(Repository::is_displayable)
        .map(render_card)
        .collect();

    tracing::debug!(total, shown = cards.len(), "gallery pass built");
    Ok(cards)
}

fn render_card(repo: Repository) -> RenderedCard {
    let color = derive_color(&repo.name);
    let text = utf8_percent_encode(&repo.name, URI_COMPONENT);
    let image_url = format!(
        "https://dummyimage.com/{IMAGE_SIZE}/{}/{IMAGE_TEXT_COLOR}&text={text}",
        color.to_hex()
    );

    RenderedCard {
        description: repo
            .description
            .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
        repo_url: repo.html_url,
        image_url,
        homepage_url: repo.homepage.filter(|h| !h.is_empty()),
        name: repo.name,
    }
}
