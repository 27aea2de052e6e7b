// PortalNav - app/logout.rs
//
// Logout lifecycle. The remote session-termination request runs on a
// background thread; the UI thread polls for its outcome and then performs
// the local cleanup.
//
// The outcome of the request never changes what happens locally: success,
// HTTP error status, and network failure all converge on `end_session`.
// No retry, no cancellation, no timeout override.

use crate::app::session::SessionStore;
use crate::util::constants::{LOGGED_IN_KEY, LOGIN_ROUTE, LOGOUT_ENDPOINT};
use crate::util::error::LogoutError;
use std::sync::mpsc;

// =============================================================================
// Seams
// =============================================================================

/// Terminates the session on the backend.
pub trait LogoutClient: Send {
    fn terminate_session(&self) -> Result<(), LogoutError>;
}

/// Moves the shell to another route.
pub trait Navigator {
    fn push(&mut self, route: &str);
}

// =============================================================================
// HTTP client
// =============================================================================

/// `POST {base_url}/api/v1/logout` over a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpLogoutClient {
    url: String,
    token: Option<String>,
}

impl HttpLogoutClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: format!("{}{LOGOUT_ENDPOINT}", base_url.trim_end_matches('/')),
            token: None,
        }
    }

    /// Send the session credential as the `token` cookie.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LogoutClient for HttpLogoutClient {
    fn terminate_session(&self) -> Result<(), LogoutError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| LogoutError::Client { source: e })?;

        let mut request = client.post(&self.url);
        if let Some(ref token) = self.token {
            request = request.header(reqwest::header::COOKIE, format!("token={token}"));
        }

        let response = request.send().map_err(|e| LogoutError::Request {
            url: self.url.clone(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogoutError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        tracing::debug!(url = %self.url, status = status.as_u16(), "Remote session terminated");
        Ok(())
    }
}

// =============================================================================
// Cleanup
// =============================================================================

/// Local logout: drop the credential, clear the logged-in flag and key,
/// and redirect to the login route.
///
/// A store failure is logged and the remaining steps still run.
pub fn end_session<S, N>(store: &mut S, navigator: &mut N)
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    if let Err(e) = store.clear() {
        tracing::warn!(error = %e, "Failed to clear session credential");
    }
    if let Err(e) = store.set_logged_in(false) {
        tracing::warn!(error = %e, "Failed to reset logged-in flag");
    }
    if let Err(e) = store.set(LOGGED_IN_KEY, "") {
        tracing::warn!(error = %e, key = LOGGED_IN_KEY, "Failed to clear session key");
    }
    navigator.push(LOGIN_ROUTE);
    tracing::info!("Logged out");
}

/// Record a finished termination request. Failures are diagnostic only.
fn report_outcome(outcome: &Result<(), LogoutError>) {
    if let Err(e) = outcome {
        tracing::warn!(error = %e, "Remote logout failed; clearing local session anyway");
    }
}

/// Synchronous logout: terminate remotely, then clean up locally regardless.
pub fn logout<C, S, N>(client: &C, store: &mut S, navigator: &mut N)
where
    C: LogoutClient + ?Sized,
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    let outcome = client.terminate_session();
    report_outcome(&outcome);
    end_session(store, navigator);
}

// =============================================================================
// LogoutManager
// =============================================================================

/// Message from the background logout thread.
#[derive(Debug)]
pub enum LogoutProgress {
    /// The request finished; the payload is diagnostic only.
    Finished(Result<(), LogoutError>),
}

/// Runs the termination request off the UI thread.
pub struct LogoutManager {
    progress_rx: Option<mpsc::Receiver<LogoutProgress>>,
}

impl LogoutManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Whether a request is still outstanding.
    pub fn in_flight(&self) -> bool {
        self.progress_rx.is_some()
    }

    /// Spawn the termination request. Returns false (and does nothing) when a
    /// request is already in flight.
    pub fn start(&mut self, client: Box<dyn LogoutClient>) -> bool {
        if self.in_flight() {
            tracing::debug!("Logout already in progress");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            let outcome = client.terminate_session();
            // Receiver dropped means the UI is gone; nothing left to clean up.
            let _ = tx.send(LogoutProgress::Finished(outcome));
        });

        tracing::info!("Logout requested");
        true
    }

    /// Non-blocking poll. Returns the outcome once, then the manager is idle.
    ///
    /// A thread that died without reporting still counts as finished, so the
    /// local cleanup is never stranded.
    pub fn poll(&mut self) -> Option<LogoutProgress> {
        let rx = self.progress_rx.as_ref()?;
        let message = match rx.try_recv() {
            Ok(msg) => msg,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => {
                tracing::warn!("Logout thread exited without reporting");
                LogoutProgress::Finished(Ok(()))
            }
        };
        self.progress_rx = None;
        Some(message)
    }

    /// Poll and, once the request has finished, run the local cleanup.
    /// Returns true when the cleanup ran.
    pub fn complete<S, N>(&mut self, store: &mut S, navigator: &mut N) -> bool
    where
        S: SessionStore + ?Sized,
        N: Navigator + ?Sized,
    {
        match self.poll() {
            Some(LogoutProgress::Finished(outcome)) => {
                report_outcome(&outcome);
                end_session(store, navigator);
                true
            }
            None => false,
        }
    }
}

impl Default for LogoutManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::MemorySessionStore;
    use std::time::{Duration, Instant};

    struct FixedClient(fn() -> Result<(), LogoutError>);

    impl LogoutClient for FixedClient {
        fn terminate_session(&self) -> Result<(), LogoutError> {
            (self.0)()
        }
    }

    fn succeeds() -> Result<(), LogoutError> {
        Ok(())
    }

    fn rejected() -> Result<(), LogoutError> {
        Err(LogoutError::Status {
            url: "http://backend/api/v1/logout".to_string(),
            status: 500,
        })
    }

    #[derive(Default)]
    struct Routes(Vec<String>);

    impl Navigator for Routes {
        fn push(&mut self, route: &str) {
            self.0.push(route.to_string());
        }
    }

    fn logged_in_store() -> MemorySessionStore {
        let mut store = MemorySessionStore::logged_in_with_token("secret");
        store.set(LOGGED_IN_KEY, "true").unwrap();
        store
    }

    #[test]
    fn test_url_joins_base_and_endpoint() {
        assert_eq!(
            HttpLogoutClient::new("http://localhost:9090/").url(),
            "http://localhost:9090/api/v1/logout"
        );
    }

    #[test]
    fn test_success_and_failure_reach_same_state() {
        let mut ok_store = logged_in_store();
        let mut ok_routes = Routes::default();
        logout(&FixedClient(succeeds), &mut ok_store, &mut ok_routes);

        let mut err_store = logged_in_store();
        let mut err_routes = Routes::default();
        logout(&FixedClient(rejected), &mut err_store, &mut err_routes);

        assert_eq!(ok_store.data(), err_store.data());
        assert_eq!(ok_routes.0, err_routes.0);
        assert!(!ok_store.is_logged_in());
        assert_eq!(ok_store.get(LOGGED_IN_KEY).as_deref(), Some(""));
        assert_eq!(ok_store.data().token, None);
        assert_eq!(ok_routes.0, vec!["/login".to_string()]);
    }

    #[test]
    fn test_manager_runs_cleanup_after_background_failure() {
        let mut manager = LogoutManager::new();
        assert!(manager.start(Box::new(FixedClient(rejected))));
        assert!(!manager.start(Box::new(FixedClient(succeeds))), "second start ignored");

        let mut store = logged_in_store();
        let mut routes = Routes::default();
        let deadline = Instant::now() + Duration::from_secs(5);
        while !manager.complete(&mut store, &mut routes) {
            assert!(Instant::now() < deadline, "logout thread never reported");
            std::thread::sleep(Duration::from_millis(5));
        }

        assert!(!manager.in_flight());
        assert!(!store.is_logged_in());
        assert_eq!(routes.0, vec!["/login".to_string()]);
    }

    #[test]
    fn test_idle_manager_polls_nothing() {
        let mut manager = LogoutManager::new();
        assert!(manager.poll().is_none());
    }
}
