//! Ordered selector lists describing where each profile field is
//! likely to live. The markup these point at is versioned and not
//! contractually stable, so every list is a fallback chain: most
//! specific and reliable first, priority = list position.

/// Profile fields the extractor can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Company,
    JobTitle,
    Description,
}

/// Headline/description text in the profile top card.
const HEADLINE: &[&str] = &[
    "div.text-body-medium.break-words[data-generated-suggestion-target*='profileActionDelegate']",
    "div.text-body-medium.break-words",
    ".pv-text-details__left-panel .text-body-medium",
    ".pv-top-card--list-bullet .text-body-medium",
];

/// Summary line used to back-fill title and company when the
/// Experience section comes up short.
const SUMMARY: &[&str] = &[
    "div.text-body-medium.break-words",
    "div[data-generated-suggestion-target*='profileActionDelegate']",
    ".pv-text-details__left-panel .text-body-medium",
    ".pv-text-details__left-panel .break-words",
    ".pv-top-card--list-bullet .text-body-medium",
    ".pv-top-card--list-bullet .break-words",
];

const EXPERIENCE_SECTION: &[&str] = &[
    "#experience",
    "[data-test-id='experience-section']",
    ".pv-profile-section.experience",
    "section[aria-labelledby*='experience']",
];

const EXPERIENCE_ENTRIES: &[&str] = &[
    "li.artdeco-list__item",
    ".pv-entity__position-group-pager",
    ".pv-entity__summary-info",
];

const ENTRY_TITLE: &[&str] = &[
    ".pv-entity__summary-info h3",
    ".pv-entity__summary-info .t-16.t-black.t-bold",
    ".pv-entity__summary-info .t-14.t-black.t-bold",
    ".pv-entity__summary-info-v2 h3",
    ".pv-entity__summary-info-v2 .t-16.t-black.t-bold",
];

const ENTRY_COMPANY: &[&str] = &[
    ".pv-entity__secondary-title",
    ".pv-entity__summary-info h4",
    ".pv-entity__summary-info .t-14.t-black--light.t-normal",
    ".pv-entity__summary-info-v2 h4",
    ".pv-entity__summary-info-v2 .t-14.t-black--light.t-normal",
];

const ENTRY_DATES: &[&str] = &[
    ".pv-entity__dates .t-14.t-black--light.t-normal",
    ".pv-entity__summary-info .t-14.t-black--light.t-normal",
    ".pv-entity__summary-info-v2 .t-14.t-black--light.t-normal",
    ".pvs-entity__caption-wrapper",
];

/// The full selector catalog for one profile layout. Static and
/// read-only in production; injectable so tests can run synthetic
/// selector sets.
#[derive(Debug, Clone)]
pub struct SelectorCatalog {
    pub headline: &'static [&'static str],
    pub summary: &'static [&'static str],
    pub experience_section: &'static [&'static str],
    pub experience_entries: &'static [&'static str],
    pub entry_title: &'static [&'static str],
    pub entry_company: &'static [&'static str],
    pub entry_dates: &'static [&'static str],
}

impl Default for SelectorCatalog {
    fn default() -> Self {
        Self {
            headline: HEADLINE,
            summary: SUMMARY,
            experience_section: EXPERIENCE_SECTION,
            experience_entries: EXPERIENCE_ENTRIES,
            entry_title: ENTRY_TITLE,
            entry_company: ENTRY_COMPANY,
            entry_dates: ENTRY_DATES,
        }
    }
}
