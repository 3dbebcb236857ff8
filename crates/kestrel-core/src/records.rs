use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::SearchHit;

/// Values the source spreadsheets use for "unknown".
const PLACEHOLDERS: [&str; 3] = ["Not Specified", "nan", "NaN"];

/// True when a roster field carries no usable value.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || PLACEHOLDERS.contains(&trimmed)
}

/// One input roster row. Extra CSV columns are ignored; missing ones
/// default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default, alias = "Email")]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
}

impl PersonRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// A row can only be searched when both name parts are real values.
    pub fn is_searchable(&self) -> bool {
        !is_placeholder(&self.first_name) && !is_placeholder(&self.last_name)
    }
}

/// Best-effort extraction result for one profile URL.
///
/// Unresolved fields are empty strings, never absent: callers cannot
/// distinguish "field absent on profile" from "present but
/// unextractable", and that is deliberate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub url: String,
    pub company: String,
    pub job_title: String,
    pub description: String,
    pub scraped_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// A record with every field unresolved, stamped now.
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            company: String::new(),
            job_title: String::new(),
            description: String::new(),
            scraped_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.company.is_empty() && self.job_title.is_empty() && self.description.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
    Found,
    NotFound,
    Skipped,
}

impl EnrichmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichmentStatus::Found => "found",
            EnrichmentStatus::NotFound => "not_found",
            EnrichmentStatus::Skipped => "skipped",
        }
    }
}

/// One output roster row: the input person plus whatever enrichment
/// produced for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub location: String,
    pub profile_url: String,
    pub additional_urls: String,
    pub headline: String,
    pub current_title: String,
    pub current_company: String,
    pub description: String,
    pub status: EnrichmentStatus,
    pub enriched_at: DateTime<Utc>,
}

impl EnrichedRecord {
    fn base(person: &PersonRecord, status: EnrichmentStatus) -> Self {
        Self {
            email: person.email.clone(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            company: person.company.clone(),
            location: person.location.clone(),
            profile_url: String::new(),
            additional_urls: String::new(),
            headline: String::new(),
            current_title: String::new(),
            current_company: String::new(),
            description: String::new(),
            status,
            enriched_at: Utc::now(),
        }
    }

    /// Row was skipped before search (unusable name data).
    pub fn skipped(person: &PersonRecord) -> Self {
        Self::base(person, EnrichmentStatus::Skipped)
    }

    /// Search produced no profile URL.
    pub fn not_found(person: &PersonRecord) -> Self {
        Self::base(person, EnrichmentStatus::NotFound)
    }

    /// Search hit plus the extraction result for its primary URL.
    pub fn found(person: &PersonRecord, hit: &SearchHit, profile: &ProfileRecord) -> Self {
        let mut record = Self::base(person, EnrichmentStatus::Found);
        record.profile_url = hit.primary_url.clone();
        record.additional_urls = hit.additional_urls.join("; ");
        record.headline = truncate_chars(&profile.description, 200);
        record.current_title = profile.job_title.clone();
        record.current_company = profile.company.clone();
        record.description = profile.description.clone();
        record.enriched_at = profile.scraped_at;
        record
    }
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
