use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use kestrel_browser::{BrowserSession, ChromeFinder, ChromeLauncher, ProfileManager};
use kestrel_core::records::ProfileRecord;
use kestrel_extract::ProfileExtractor;

use super::kill_process_by_pid;

/// Single-URL extraction, for eyeballing what the scraper resolves on
/// one profile before committing a whole roster to it.
pub fn execute(
    url: &str,
    format: &str,
    chrome_path: Option<PathBuf>,
    port: u16,
    temp_profile: bool,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        // Step 1: Find Chrome binary
        println!("🔍 Locating Chrome...");
        let chrome_binary = ChromeFinder::new(chrome_path).find()?;
        println!("✅ Found Chrome at: {}", chrome_binary.display());

        // Step 2: Setup profile
        let profile = if temp_profile {
            println!("📁 Using temporary profile");
            ProfileManager::temporary()?
        } else {
            let root = dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
                .join(".kestrel")
                .join("profiles");
            let profile = ProfileManager::worker(&root, 0)?;
            println!("📁 Using profile: {}", profile.path().display());
            profile
        };

        // Step 3: Launch Chrome and extract
        let launcher =
            ChromeLauncher::new(chrome_binary, profile.path().to_path_buf(), None).with_port(port);

        println!("🚀 Launching Chrome...");
        let mut chrome = launcher.launch()?;
        let chrome_pid = chrome.id();

        let outcome = extract_one(url, launcher.debugging_port(), format).await;

        kill_process_by_pid(chrome_pid);
        let _ = tokio::task::spawn_blocking(move || chrome.wait()).await;

        outcome
    });

    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

async fn extract_one(url: &str, port: u16, format: &str) -> Result<()> {
    let session = BrowserSession::connect(port).await?;
    let record = ProfileExtractor::new().extract_profile(&session, url).await;
    session.close().await;

    print_record(&record, format)
}

fn print_record(record: &ProfileRecord, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(record)?),
        _ => {
            println!();
            println!("=== EXTRACTION RESULTS ===");
            println!("URL:         {}", record.url);
            println!("Company:     '{}'", record.company);
            println!("Job title:   '{}'", record.job_title);
            println!("Description: '{}'", record.description);
            println!("Scraped at:  {}", record.scraped_at);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_is_well_formed() {
        let record = ProfileRecord::empty("https://www.linkedin.com/in/jane-doe");
        let json = serde_json::to_string_pretty(&record).unwrap();

        assert!(json.contains("\"url\""));
        assert!(json.contains("\"company\": \"\""));
        assert!(json.contains("\"job_title\": \"\""));
    }

    #[test]
    fn test_print_record_accepts_both_formats() {
        let record = ProfileRecord::empty("https://www.linkedin.com/in/jane-doe");
        assert!(print_record(&record, "pretty").is_ok());
        assert!(print_record(&record, "json").is_ok());
    }
}
