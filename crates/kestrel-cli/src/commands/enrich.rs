use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tokio::sync::mpsc;

use kestrel_browser::{
    BrowserSession, ChromeFinder, ChromeLauncher, LoginState, ProfileManager, check_login,
    find_profile,
};
use kestrel_core::batch::{assign_workers, split_into_batches};
use kestrel_core::records::{EnrichedRecord, EnrichmentStatus, PersonRecord};
use kestrel_core::roster::{ResultWriter, RosterReader};
use kestrel_core::search::SearchQuery;
use kestrel_extract::ProfileExtractor;

use super::kill_process_by_pid;

pub struct EnrichOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub workers: usize,
    pub batch_size: usize,
    pub limit: Option<usize>,
    pub delay_ms: u64,
    pub chrome_path: Option<PathBuf>,
    pub port_base: u16,
    pub skip_login_check: bool,
}

/// Per-worker settings shared by every record in a shard.
struct WorkerConfig {
    chrome_binary: PathBuf,
    profile_root: PathBuf,
    port_base: u16,
    delay_ms: u64,
    skip_login_check: bool,
}

pub fn execute(options: EnrichOptions) -> Result<()> {
    let mut records = RosterReader::from_file(&options.input)?;

    if let Some(limit) = options.limit {
        if records.len() > limit {
            records.truncate(limit);
            println!("📋 Limited to first {} records", limit);
        }
    }

    if records.is_empty() {
        anyhow::bail!("No records found in {}", options.input.display());
    }
    println!(
        "📋 Loaded {} records from {}",
        records.len(),
        options.input.display()
    );

    // Step 1: Find Chrome binary (shared by every worker)
    println!("🔍 Locating Chrome...");
    let finder = ChromeFinder::new(options.chrome_path.clone());
    let chrome_binary = finder.find()?;
    println!("✅ Found Chrome at: {}", chrome_binary.display());

    let profile_root = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
        .join(".kestrel")
        .join("profiles");

    // Step 2: Shard the roster across workers, batch by batch
    let workers = options.workers.max(1);
    let total = records.len();
    let batches = split_into_batches(records, options.batch_size);
    let assignment = assign_workers(batches.len(), workers);

    let mut shards: Vec<Vec<PersonRecord>> = (0..workers).map(|_| Vec::new()).collect();
    for (batch, worker) in batches.into_iter().zip(assignment) {
        shards[worker].extend(batch);
    }

    println!("🚀 Processing {} records with {} worker(s)", total, workers);

    // Step 3: Run the workers on a dedicated runtime
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let results = runtime.block_on(async {
        let progress = ProgressBar::new(total as u64);
        progress.set_style(ProgressStyle::with_template(
            "{spinner} [{bar:40}] {pos}/{len} {msg}",
        )?);

        let (tx, mut rx) = mpsc::unbounded_channel::<EnrichedRecord>();

        let mut tasks = Vec::new();
        for (worker_id, shard) in shards.into_iter().enumerate() {
            if shard.is_empty() {
                continue;
            }

            let config = WorkerConfig {
                chrome_binary: chrome_binary.clone(),
                profile_root: profile_root.clone(),
                port_base: options.port_base,
                delay_ms: options.delay_ms,
                skip_login_check: options.skip_login_check,
            };

            let tx = tx.clone();
            let progress = progress.clone();
            tasks.push(tokio::spawn(async move {
                run_worker(worker_id, shard, config, tx, progress).await
            }));
        }
        drop(tx);

        let mut results = Vec::new();
        while let Some(record) = rx.recv().await {
            results.push(record);
        }

        for task in tasks {
            if let Err(e) = task.await? {
                tracing::error!("Worker failed: {}", e);
            }
        }

        progress.finish_and_clear();
        anyhow::Ok(results)
    })?;

    // Step 4: Write the enriched roster
    let output_path = options
        .output
        .unwrap_or_else(|| ResultWriter::timestamped_path(Path::new(".")));
    ResultWriter::to_file(&results, &output_path)?;

    // Step 5: Summary
    let found = results
        .iter()
        .filter(|r| r.status == EnrichmentStatus::Found)
        .count();
    println!();
    println!("=== ENRICHMENT SUMMARY ===");
    println!("Total records processed: {}", results.len());
    println!("Profiles found: {}", found);
    if !results.is_empty() {
        println!(
            "Hit rate: {:.1}%",
            found as f64 / results.len() as f64 * 100.0
        );
    }
    println!("✅ Results written to: {}", output_path.display());

    // Explicitly shutdown runtime with timeout to prevent hanging on blocking tasks
    runtime.shutdown_timeout(Duration::from_millis(100));

    Ok(())
}

/// Launch this worker's Chrome, process its shard, then tear Chrome
/// down regardless of how the shard went.
async fn run_worker(
    worker_id: usize,
    shard: Vec<PersonRecord>,
    config: WorkerConfig,
    tx: mpsc::UnboundedSender<EnrichedRecord>,
    progress: ProgressBar,
) -> Result<()> {
    let profile = ProfileManager::worker(&config.profile_root, worker_id)?;
    let port = config.port_base + worker_id as u16;

    let launcher = ChromeLauncher::new(
        config.chrome_binary.clone(),
        profile.path().to_path_buf(),
        None,
    )
    .with_port(port);

    tracing::info!("Worker {}: launching Chrome on port {}", worker_id, port);
    let mut chrome = launcher.launch()?;
    let chrome_pid = chrome.id();

    let outcome = process_shard(worker_id, shard, &config, port, &tx, &progress).await;

    kill_process_by_pid(chrome_pid);
    let _ = tokio::task::spawn_blocking(move || chrome.wait()).await;

    outcome
}

async fn process_shard(
    worker_id: usize,
    shard: Vec<PersonRecord>,
    config: &WorkerConfig,
    port: u16,
    tx: &mpsc::UnboundedSender<EnrichedRecord>,
    progress: &ProgressBar,
) -> Result<()> {
    let session = BrowserSession::connect(port).await?;

    if !config.skip_login_check {
        ensure_login(worker_id, &session).await?;
    }

    let extractor = ProfileExtractor::new();
    let shard_len = shard.len();

    for (index, person) in shard.into_iter().enumerate() {
        tracing::info!(
            "Worker {}: processing {}/{}: {}",
            worker_id,
            index + 1,
            shard_len,
            person.full_name()
        );

        let record = enrich_person(&session, &extractor, &person).await;

        progress.set_message(person.full_name());
        progress.inc(1);

        if tx.send(record).is_err() {
            break;
        }

        // Be respectful with delays between records.
        if index + 1 < shard_len {
            politeness_delay(config.delay_ms).await;
        }
    }

    session.close().await;
    Ok(())
}

/// Search for one person's profile and extract it. Every failure mode
/// degrades to a status on the output row; nothing here aborts the
/// shard.
async fn enrich_person(
    session: &BrowserSession,
    extractor: &ProfileExtractor,
    person: &PersonRecord,
) -> EnrichedRecord {
    if !person.is_searchable() {
        tracing::warn!("Skipping {}: missing name data", person.full_name());
        return EnrichedRecord::skipped(person);
    }

    let query = SearchQuery::for_person(person);
    let hit = match find_profile(session, &query).await {
        Ok(Some(hit)) => hit,
        Ok(None) => return EnrichedRecord::not_found(person),
        Err(e) => {
            tracing::error!("Search failed for {}: {}", person.full_name(), e);
            return EnrichedRecord::not_found(person);
        }
    };

    let profile = extractor.extract_profile(session, &hit.primary_url).await;
    EnrichedRecord::found(person, &hit, &profile)
}

/// Loop until the session is authenticated, prompting the operator to
/// log in through the worker's browser window.
async fn ensure_login(worker_id: usize, session: &BrowserSession) -> Result<()> {
    loop {
        match check_login(session).await? {
            LoginState::LoggedIn => {
                println!("✅ Worker {}: logged in", worker_id);
                return Ok(());
            }
            LoginState::Unknown => {
                println!("⚠️  Worker {}: login status unclear, continuing", worker_id);
                return Ok(());
            }
            LoginState::LoginRequired => {
                println!();
                println!("🔐 LOGIN REQUIRED - worker {}", worker_id);
                println!("Please log in using the browser window that opened,");
                println!("then press any key here to continue...");

                let key = tokio::task::spawn_blocking(|| {
                    let term = console::Term::stdout();
                    term.read_char()
                })
                .await??;
                tracing::debug!("Got keypress '{}', re-checking login", key);
            }
        }
    }
}

/// Jittered pause so workers don't hit the site in lockstep.
async fn politeness_delay(delay_ms: u64) {
    let jitter = rand::thread_rng().gen_range(0..=500);
    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
}
