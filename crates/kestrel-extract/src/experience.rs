use crate::catalog::SelectorCatalog;
use crate::extract::first_accepted_text;
use crate::page::{PageNode, ProfilePage};

/// One parsed candidate from the Experience section. Scoped to a
/// single extraction and discarded after ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub date_text: String,
    pub is_current: bool,
}

impl ExperienceEntry {
    fn is_complete(&self) -> bool {
        !self.job_title.is_empty() && !self.company.is_empty()
    }
}

/// Current employer and title from the Experience section.
///
/// Public profile markup has no machine-readable date field, so
/// document order stands in for recency and a "Present"/"Current"
/// marker in the date text is the only stronger signal. A marked entry
/// carrying both fields wins outright; otherwise the first entry
/// carrying both fields does. `("", "")` when the section or any
/// qualifying entry is missing.
pub async fn rank_current_job<P: ProfilePage>(
    catalog: &SelectorCatalog,
    page: &P,
) -> (String, String) {
    let Some(section) = find_section(catalog, page).await else {
        tracing::debug!("Experience section not found");
        return (String::new(), String::new());
    };

    let entries = find_entries(catalog, &section).await;
    if entries.is_empty() {
        tracing::debug!("No experience entries found");
        return (String::new(), String::new());
    }
    tracing::debug!("Found {} experience entries", entries.len());

    let mut first_complete: Option<(String, String)> = None;

    for (index, node) in entries.iter().enumerate() {
        let entry = parse_entry(catalog, node).await;
        tracing::debug!(
            "Entry {}: title='{}', company='{}', dates='{}', current={}",
            index + 1,
            entry.job_title,
            entry.company,
            entry.date_text,
            entry.is_current
        );

        if !entry.is_complete() {
            continue;
        }
        if entry.is_current {
            tracing::debug!("Selected current job: {} at {}", entry.job_title, entry.company);
            return (entry.company, entry.job_title);
        }
        if first_complete.is_none() {
            first_complete = Some((entry.company, entry.job_title));
        }
    }

    first_complete.unwrap_or_default()
}

/// Resolve the Experience section container through its fallback list.
async fn find_section<P: ProfilePage>(catalog: &SelectorCatalog, page: &P) -> Option<P::Node> {
    for &selector in catalog.experience_section {
        match page.find_all(selector).await {
            Ok(mut nodes) if !nodes.is_empty() => {
                tracing::debug!("Found Experience section with selector: {}", selector);
                return Some(nodes.remove(0));
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("Section selector '{}' failed: {}", selector, e),
        }
    }
    None
}

/// Enumerate entry elements, falling back through the alternate entry
/// selectors when the primary yields nothing.
async fn find_entries<N: PageNode>(catalog: &SelectorCatalog, section: &N) -> Vec<N> {
    for &selector in catalog.experience_entries {
        match section.find_all(selector).await {
            Ok(nodes) if !nodes.is_empty() => {
                tracing::debug!("Found {} entries with selector: {}", nodes.len(), selector);
                return nodes;
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("Entry selector '{}' failed: {}", selector, e),
        }
    }
    Vec::new()
}

/// Parse one entry sub-tree; each field runs its own fallback chain.
async fn parse_entry<N: PageNode>(catalog: &SelectorCatalog, node: &N) -> ExperienceEntry {
    let job_title =
        first_accepted_text(catalog.entry_title, 0, |selector| node.find_all(selector)).await;
    let company =
        first_accepted_text(catalog.entry_company, 0, |selector| node.find_all(selector)).await;
    let date_text =
        first_accepted_text(catalog.entry_dates, 0, |selector| node.find_all(selector)).await;

    let is_current = date_text.contains("Present") || date_text.contains("Current");

    ExperienceEntry {
        job_title,
        company,
        date_text,
        is_current,
    }
}
