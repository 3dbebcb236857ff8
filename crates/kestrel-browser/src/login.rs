use kestrel_extract::ProfilePage;

use crate::Result;
use crate::session::BrowserSession;

/// Feed URL used to probe authentication state.
const FEED_URL: &str = "https://www.linkedin.com/feed/";

/// Selectors that only render for an authenticated session.
const LOGIN_INDICATORS: &[&str] = &[
    "[data-test-id='main-feed']",
    "[data-test-id='global-nav']",
    "input[placeholder*='Search']",
    "[data-test-id='profile-nav-item']",
    "[data-test-id='messaging-nav-item']",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    LoggedIn,
    LoginRequired,
    /// Neither an indicator nor a login redirect was seen; callers
    /// proceed optimistically.
    Unknown,
}

/// Classify a post-navigation URL. Login walls redirect to a small set
/// of well-known paths.
pub fn classify_url(url: &str) -> LoginState {
    let url = url.to_lowercase();
    if url.contains("login") || url.contains("signin") || url.contains("authwall") {
        LoginState::LoginRequired
    } else {
        LoginState::Unknown
    }
}

/// Drive the feed page and decide whether this session is
/// authenticated.
pub async fn check_login(session: &BrowserSession) -> Result<LoginState> {
    session.goto(FEED_URL).await?;

    let page = session.page();
    for &indicator in LOGIN_INDICATORS {
        match page.find_all(indicator).await {
            Ok(nodes) if !nodes.is_empty() => {
                tracing::info!("Logged-in indicator matched: {}", indicator);
                return Ok(LoginState::LoggedIn);
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("Indicator probe '{}' failed: {}", indicator, e),
        }
    }

    let state = classify_url(&session.current_url().await?);
    if state == LoginState::Unknown {
        tracing::info!("Login status unclear, continuing");
    }
    Ok(state)
}
