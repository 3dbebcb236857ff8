use kestrel_core::search::{SearchHit, SearchQuery, clean_result_url};
use kestrel_extract::{PageNode, ProfilePage};

use crate::Result;
use crate::session::BrowserSession;

/// Anchor selector for profile links on a rendered results page.
const PROFILE_LINKS: &str = "a[href*='linkedin.com/in/']";

/// Run one person's search and collect candidate profile URLs from the
/// rendered results page. `None` means the search worked but produced
/// no usable profile link.
pub async fn find_profile(
    session: &BrowserSession,
    query: &SearchQuery,
) -> Result<Option<SearchHit>> {
    tracing::info!("Searching: {}", query.as_query());
    session.goto(&query.to_url()).await?;

    let page = session.page();
    let links = match page.find_all(PROFILE_LINKS).await {
        Ok(links) => links,
        Err(e) => {
            tracing::debug!("Profile link query failed: {}", e);
            return Ok(None);
        }
    };

    let mut candidates = Vec::new();
    for link in links {
        match link.attribute("href").await {
            Ok(Some(href)) => {
                if let Some(cleaned) = clean_result_url(&href) {
                    candidates.push(cleaned);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::debug!("href read failed: {}", e),
        }
    }

    let hit = SearchHit::from_candidates(candidates);
    match &hit {
        Some(hit) => tracing::info!(
            "Found profile: {} (+{} alternates)",
            hit.primary_url,
            hit.additional_urls.len()
        ),
        None => tracing::info!("No profile links found in search results"),
    }

    Ok(hit)
}
