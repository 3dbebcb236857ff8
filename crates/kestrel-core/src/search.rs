use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::records::{PersonRecord, is_placeholder};

lazy_static! {
    /// Public profile URLs: optional country/www subdomain, `/in/` slug.
    static ref PROFILE_URL: Regex =
        Regex::new(r"^https?://(?:[a-z]{2,3}\.)?linkedin\.com/in/[^/?#]+").unwrap();
}

/// Max alternate URLs retained besides the primary hit.
const MAX_ADDITIONAL_URLS: usize = 4;

/// A `site:`-scoped web search for one person's public profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    /// Name terms always; company and location only when they carry a
    /// real value.
    pub fn for_person(person: &PersonRecord) -> Self {
        let mut terms = vec![
            person.first_name.trim().to_string(),
            person.last_name.trim().to_string(),
        ];

        for extra in [&person.company, &person.location] {
            if !is_placeholder(extra) {
                terms.push(extra.trim().to_string());
            }
        }

        Self { terms }
    }

    pub fn as_query(&self) -> String {
        format!("site:linkedin.com/in {}", self.terms.join(" "))
    }

    /// Rendered search-engine results URL for this query.
    pub fn to_url(&self) -> String {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.as_query())
            .finish();
        format!("https://www.google.com/search?{}", encoded)
    }
}

/// The profile URLs one search produced, in result order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub primary_url: String,
    pub additional_urls: Vec<String>,
}

impl SearchHit {
    /// Build from cleaned candidate URLs; `None` when nothing survived
    /// cleanup.
    pub fn from_candidates(urls: Vec<String>) -> Option<Self> {
        let unique = dedup_urls(urls);
        let mut iter = unique.into_iter();
        let primary_url = iter.next()?;
        Some(Self {
            primary_url,
            additional_urls: iter.take(MAX_ADDITIONAL_URLS).collect(),
        })
    }
}

/// Normalize one search-result href into a bare profile URL.
///
/// Unwraps search-engine redirect links (`/url?q=<target>`), drops
/// query/fragment tracking, and rejects anything that is not a profile
/// link.
pub fn clean_result_url(href: &str) -> Option<String> {
    let href = href.trim();

    let target = if href.contains("/url?") {
        // Redirect hrefs come back relative from the raw attribute;
        // resolve them against the results-page origin before reading
        // the target parameter.
        let parsed = match url::Url::parse(href) {
            Ok(parsed) => parsed,
            Err(_) => url::Url::parse("https://www.google.com")
                .ok()?
                .join(href)
                .ok()?,
        };
        parsed
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())?
    } else {
        href.to_string()
    };

    PROFILE_URL
        .find(&target)
        .map(|matched| matched.as_str().to_string())
}

/// Order-preserving de-duplication.
pub fn dedup_urls(urls: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_includes_company_and_location() {
        let person = PersonRecord {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            company: "Acme Corp".to_string(),
            location: "Austin, TX".to_string(),
            ..Default::default()
        };

        let query = SearchQuery::for_person(&person);
        assert_eq!(query.as_query(), "site:linkedin.com/in Jane Doe Acme Corp Austin, TX");
    }

    #[test]
    fn test_query_drops_placeholder_terms() {
        let person = PersonRecord {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            company: "Not Specified".to_string(),
            location: "nan".to_string(),
            ..Default::default()
        };

        let query = SearchQuery::for_person(&person);
        assert_eq!(query.as_query(), "site:linkedin.com/in Jane Doe");
    }

    #[test]
    fn test_query_url_is_percent_encoded() {
        let person = PersonRecord {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };

        let url = SearchQuery::for_person(&person).to_url();
        assert!(url.starts_with("https://www.google.com/search?q="));
        assert!(url.contains("site%3Alinkedin.com%2Fin+Jane+Doe"));
    }

    #[test]
    fn test_clean_url_passes_profile_links() {
        let cleaned = clean_result_url("https://www.linkedin.com/in/jane-doe-12345");
        assert_eq!(
            cleaned.as_deref(),
            Some("https://www.linkedin.com/in/jane-doe-12345")
        );
    }

    #[test]
    fn test_clean_url_strips_tracking_suffix() {
        let cleaned = clean_result_url("https://uk.linkedin.com/in/jane-doe?trk=search#about");
        assert_eq!(cleaned.as_deref(), Some("https://uk.linkedin.com/in/jane-doe"));
    }

    #[test]
    fn test_clean_url_unwraps_redirects() {
        let href =
            "https://www.google.com/url?q=https%3A%2F%2Fwww.linkedin.com%2Fin%2Fjane-doe&sa=U";
        let cleaned = clean_result_url(href);
        assert_eq!(cleaned.as_deref(), Some("https://www.linkedin.com/in/jane-doe"));
    }

    #[test]
    fn test_clean_url_unwraps_relative_redirects() {
        let href = "/url?q=https%3A%2F%2Fwww.linkedin.com%2Fin%2Fjane-doe&sa=U&ved=xyz";
        let cleaned = clean_result_url(href);
        assert_eq!(cleaned.as_deref(), Some("https://www.linkedin.com/in/jane-doe"));
    }

    #[test]
    fn test_clean_url_rejects_non_profile_links() {
        assert_eq!(clean_result_url("https://www.linkedin.com/company/acme"), None);
        assert_eq!(clean_result_url("https://example.com/in/jane"), None);
    }

    #[test]
    fn test_dedup_preserves_order() {
        let urls = vec![
            "https://www.linkedin.com/in/a".to_string(),
            "https://www.linkedin.com/in/b".to_string(),
            "https://www.linkedin.com/in/a".to_string(),
        ];

        let unique = dedup_urls(urls);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0], "https://www.linkedin.com/in/a");
        assert_eq!(unique[1], "https://www.linkedin.com/in/b");
    }

    #[test]
    fn test_hit_caps_additional_urls() {
        let urls = (0..8)
            .map(|i| format!("https://www.linkedin.com/in/person-{}", i))
            .collect();

        let hit = SearchHit::from_candidates(urls).unwrap();
        assert_eq!(hit.primary_url, "https://www.linkedin.com/in/person-0");
        assert_eq!(hit.additional_urls.len(), 4);
    }

    #[test]
    fn test_hit_requires_at_least_one_url() {
        assert!(SearchHit::from_candidates(vec![]).is_none());
    }
}
