use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use crate::{Error, Result};

/// Base CDP port; worker `i` listens on `base + i`.
pub const DEFAULT_DEBUG_PORT: u16 = 9222;

/// Desktop user agent presented to the site. Automation builds of
/// Chrome otherwise advertise themselves in the default UA string.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Manages the Chrome process for one scraping session.
pub struct ChromeLauncher {
    chrome_path: PathBuf,
    profile_path: PathBuf,
    initial_url: Option<String>,
    debugging_port: u16,
}

impl ChromeLauncher {
    pub fn new(chrome_path: PathBuf, profile_path: PathBuf, initial_url: Option<String>) -> Self {
        Self {
            chrome_path,
            profile_path,
            initial_url,
            debugging_port: DEFAULT_DEBUG_PORT,
        }
    }

    /// Override the CDP port so concurrent workers don't collide.
    pub fn with_port(mut self, port: u16) -> Self {
        self.debugging_port = port;
        self
    }

    /// Launch the Chrome process.
    pub fn launch(&self) -> Result<Child> {
        let args = self.build_args();

        Command::new(&self.chrome_path)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Browser(format!("Failed to launch Chrome: {}", e)))
    }

    /// Build Chrome command-line arguments.
    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--remote-debugging-port={}", self.debugging_port),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--no-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
            "--disable-blink-features=AutomationControlled".to_string(),
            format!("--user-agent={}", USER_AGENT),
            format!("--user-data-dir={}", self.profile_path.display()),
        ];

        // Add initial URL with proper scheme
        if let Some(url) = &self.initial_url {
            let url = if !url.starts_with("http://") && !url.starts_with("https://") {
                format!("https://{}", url)
            } else {
                url.clone()
            };
            args.push(url);
        } else {
            args.push("about:blank".to_string());
        }

        args
    }

    /// Get the debugging port.
    pub fn debugging_port(&self) -> u16 {
        self.debugging_port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn launcher(url: Option<&str>) -> ChromeLauncher {
        ChromeLauncher::new(
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/tmp/profile"),
            url.map(str::to_string),
        )
    }

    #[test]
    fn test_launcher_builds_stealth_args() {
        let args = launcher(Some("https://www.linkedin.com/feed/")).build_args();

        assert!(args.contains(&"--remote-debugging-port=9222".to_string()));
        assert!(args.contains(&"--no-sandbox".to_string()));
        assert!(args.contains(&"--disable-blink-features=AutomationControlled".to_string()));
        assert!(args.iter().any(|a| a.starts_with("--user-agent=")));
        assert!(args.iter().any(|a| a.starts_with("--user-data-dir=")));
        assert!(args.contains(&"https://www.linkedin.com/feed/".to_string()));
    }

    #[test]
    fn test_launcher_defaults_to_blank_page() {
        let args = launcher(None).build_args();
        assert!(args.contains(&"about:blank".to_string()));
    }

    #[test]
    fn test_launcher_adds_https_scheme() {
        let args = launcher(Some("www.linkedin.com")).build_args();
        assert!(args.contains(&"https://www.linkedin.com".to_string()));
    }

    #[test]
    fn test_launcher_port_override() {
        let launcher = launcher(None).with_port(9225);
        assert_eq!(launcher.debugging_port(), 9225);
        assert!(
            launcher
                .build_args()
                .contains(&"--remote-debugging-port=9225".to_string())
        );
    }
}
