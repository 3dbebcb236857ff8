//! The generic accept-first-nonempty routine every fallback chain in
//! this crate runs through.

use std::future::Future;

use crate::catalog::{ProfileField, SelectorCatalog};
use crate::error::QueryResult;
use crate::page::{PageNode, ProfilePage};

/// Minimum accepted length for description-like text. Filters
/// boilerplate nodes that structurally match but carry no content.
/// Short title-style text has no minimum beyond being non-empty.
pub(crate) const MIN_LONG_TEXT: usize = 10;

/// Walk an ordered selector list and return the first trimmed text
/// whose length exceeds `min_len`. A per-selector query failure counts
/// as a miss for that selector only; later candidates are ignored once
/// one is accepted. Returns an empty string when no pattern yields an
/// accepted candidate.
pub(crate) async fn first_accepted_text<N, F, Fut>(
    selectors: &'static [&'static str],
    min_len: usize,
    mut find: F,
) -> String
where
    N: PageNode,
    F: FnMut(&'static str) -> Fut,
    Fut: Future<Output = QueryResult<Vec<N>>>,
{
    for &selector in selectors {
        let nodes = match find(selector).await {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::debug!("Selector '{}' failed: {}", selector, e);
                continue;
            }
        };

        for node in nodes {
            let text = match node.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!("Text read under '{}' failed: {}", selector, e);
                    continue;
                }
            };

            let trimmed = text.trim();
            if trimmed.len() > min_len {
                tracing::debug!("Selector '{}' accepted: {}", selector, trimmed);
                return trimmed.to_string();
            }
        }
    }

    String::new()
}

/// First accepted match for `field` through its catalog chain.
pub async fn extract_field<P: ProfilePage>(
    catalog: &SelectorCatalog,
    page: &P,
    field: ProfileField,
) -> String {
    let (selectors, min_len) = match field {
        ProfileField::Company | ProfileField::JobTitle => (catalog.summary, 0),
        ProfileField::Description => (catalog.headline, MIN_LONG_TEXT),
    };

    first_accepted_text(selectors, min_len, |selector| page.find_all(selector)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{FixtureNode, FixturePage};

    #[tokio::test]
    async fn test_accepts_first_qualifying_candidate() {
        let page = FixturePage::new().with_nodes(
            "div.text-body-medium.break-words",
            vec![
                FixtureNode::text("  Senior Engineer at Acme Corp  "),
                FixtureNode::text("Something else entirely"),
            ],
        );

        let text = first_accepted_text(
            SelectorCatalog::default().summary,
            MIN_LONG_TEXT,
            |selector| page.find_all(selector),
        )
        .await;

        assert_eq!(text, "Senior Engineer at Acme Corp");
    }

    #[tokio::test]
    async fn test_short_candidates_are_rejected_for_long_fields() {
        let page = FixturePage::new()
            .with_nodes(
                "div.text-body-medium.break-words",
                vec![FixtureNode::text("--"), FixtureNode::text("")],
            )
            .with_nodes(
                ".pv-text-details__left-panel .text-body-medium",
                vec![FixtureNode::text("Director of Engineering at Initech")],
            );

        let text = extract_field(
            &SelectorCatalog::default(),
            &page,
            ProfileField::Description,
        )
        .await;

        assert_eq!(text, "Director of Engineering at Initech");
    }

    #[tokio::test]
    async fn test_query_failure_falls_through_to_next_selector() {
        let page = FixturePage::new()
            .with_failing("div.text-body-medium.break-words")
            .with_nodes(
                "div[data-generated-suggestion-target*='profileActionDelegate']",
                vec![FixtureNode::text("Head of Research at Acme Corp")],
            );

        let text = extract_field(&SelectorCatalog::default(), &page, ProfileField::JobTitle).await;
        assert_eq!(text, "Head of Research at Acme Corp");
    }

    #[tokio::test]
    async fn test_exhausted_chain_returns_empty() {
        let page = FixturePage::new();

        let text = extract_field(
            &SelectorCatalog::default(),
            &page,
            ProfileField::Description,
        )
        .await;

        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_extract_field_is_idempotent() {
        let page = FixturePage::new().with_nodes(
            "div.text-body-medium.break-words",
            vec![FixtureNode::text("Principal Scientist at Globex")],
        );

        let catalog = SelectorCatalog::default();
        let first = extract_field(&catalog, &page, ProfileField::Description).await;
        let second = extract_field(&catalog, &page, ProfileField::Description).await;

        assert_eq!(first, second);
        assert_eq!(first, "Principal Scientist at Globex");
    }
}
