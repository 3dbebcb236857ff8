use chrono::Utc;
use kestrel_core::records::ProfileRecord;

use crate::catalog::{ProfileField, SelectorCatalog};
use crate::experience::rank_current_job;
use crate::extract;
use crate::page::{PageSession, ProfilePage};
use crate::parse::parse_title_company;

/// Composes the extraction strategies into one best-effort call.
///
/// The public entry point never fails: any sub-step failure leaves its
/// field empty and extraction continues with the next strategy. The
/// extractor holds no per-call state, so one instance may serve many
/// concurrent extractions as long as each owns its page handle.
#[derive(Debug, Clone, Default)]
pub struct ProfileExtractor {
    catalog: SelectorCatalog,
}

impl ProfileExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: SelectorCatalog) -> Self {
        Self { catalog }
    }

    /// Extract a best-effort `(company, job_title, description)` record
    /// for `url`. Always returns a full record; unresolved fields stay
    /// empty strings.
    pub async fn extract_profile<S: PageSession>(&self, session: &S, url: &str) -> ProfileRecord {
        tracing::info!("Extracting profile info from: {}", url);

        let mut record = ProfileRecord::empty(url);

        let page = match session.load(url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", url, e);
                return record;
            }
        };

        let (company, job_title) = self.current_position(&page).await;
        record.company = company;
        record.job_title = job_title;

        record.description = self.extract_field(&page, ProfileField::Description).await;
        record.scraped_at = Utc::now();

        if record.is_empty() {
            tracing::warn!("No profile fields resolved for {}", url);
        } else {
            tracing::info!("Extracted profile info for {}", url);
        }

        record
    }

    /// Experience section first; the summary-line parse back-fills only
    /// whichever of the two fields remains empty.
    async fn current_position<P: ProfilePage>(&self, page: &P) -> (String, String) {
        let (mut company, mut job_title) = rank_current_job(&self.catalog, page).await;

        if company.is_empty() || job_title.is_empty() {
            tracing::debug!("Experience section incomplete, trying summary line");

            let summary = extract::first_accepted_text(
                self.catalog.summary,
                extract::MIN_LONG_TEXT,
                |selector| page.find_all(selector),
            )
            .await;

            if !summary.is_empty() {
                tracing::debug!("Found profile summary text: {}", summary);
                let (parsed_company, parsed_title) = parse_title_company(&summary);
                if company.is_empty() {
                    company = parsed_company;
                }
                if job_title.is_empty() {
                    job_title = parsed_title;
                }
            }
        }

        (company, job_title)
    }

    /// First accepted match for `field` through its selector catalog.
    pub async fn extract_field<P: ProfilePage>(&self, page: &P, field: ProfileField) -> String {
        extract::extract_field(&self.catalog, page, field).await
    }
}
