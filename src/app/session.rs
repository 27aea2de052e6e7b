// PortalNav - app/session.rs
//
// Local session state: the process-wide "logged in" flag, the session
// credential, and a small string key-value store.
//
// The state is reached only through the `SessionStore` trait so the logout
// flow can be driven against either the persisted file store or an
// in-memory store.
//
// The file store is saved atomically (write temp, rename final) after every
// mutation, so a crash never leaves a half-written session behind.
// Load errors are discarded: a corrupt or incompatible file starts fresh.

use crate::util::constants::SESSION_FILE_NAME;
use crate::util::error::SessionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Version mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

// =============================================================================
// SessionStore capability
// =============================================================================

/// Injected access to local session state.
pub trait SessionStore {
    /// Drop the local session credential.
    fn clear(&mut self) -> Result<(), SessionError>;

    /// Update the process-wide "logged in" flag.
    fn set_logged_in(&mut self, logged_in: bool) -> Result<(), SessionError>;

    fn is_logged_in(&self) -> bool;

    /// Session credential, if one is held.
    fn token(&self) -> Option<String>;

    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
}

// =============================================================================
// On-disk data structure
// =============================================================================

/// Complete persistent session snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version; must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    #[serde(default)]
    pub logged_in: bool,

    /// Session credential issued by the backend. Never logged.
    #[serde(default)]
    pub token: Option<String>,

    /// Free-form local key-value pairs (e.g. `userLoggedIn`).
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl SessionData {
    pub fn new() -> Self {
        Self {
            version: SESSION_VERSION,
            ..Default::default()
        }
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Session store that lives only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    data: SessionData,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            data: SessionData::new(),
        }
    }

    /// Store pre-populated with a logged-in session and credential.
    pub fn logged_in_with_token(token: &str) -> Self {
        let mut data = SessionData::new();
        data.logged_in = true;
        data.token = Some(token.to_string());
        Self { data }
    }

    pub fn data(&self) -> &SessionData {
        &self.data
    }
}

impl SessionStore for MemorySessionStore {
    fn clear(&mut self) -> Result<(), SessionError> {
        self.data.token = None;
        Ok(())
    }

    fn set_logged_in(&mut self, logged_in: bool) -> Result<(), SessionError> {
        self.data.logged_in = logged_in;
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        self.data.logged_in
    }

    fn token(&self) -> Option<String> {
        self.data.token.clone()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.data.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.data.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// File-backed store
// =============================================================================

/// Session store persisted as JSON in the platform data directory.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    data: SessionData,
}

impl FileSessionStore {
    /// Open the store at `path`, starting fresh when the file is missing,
    /// malformed, or from another schema version.
    pub fn open(path: PathBuf) -> Self {
        let data = load(&path).unwrap_or_else(SessionData::new);
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &SessionData {
        &self.data
    }

    fn persist(&self) -> Result<(), SessionError> {
        save(&self.data, &self.path)
    }
}

impl SessionStore for FileSessionStore {
    fn clear(&mut self) -> Result<(), SessionError> {
        self.data.token = None;
        self.persist()
    }

    fn set_logged_in(&mut self, logged_in: bool) -> Result<(), SessionError> {
        self.data.logged_in = logged_in;
        self.persist()
    }

    fn is_logged_in(&self) -> bool {
        self.data.logged_in
    }

    fn token(&self) -> Option<String> {
        self.data.token.clone()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.data.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.data.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp, then rename).
///
/// Creates all parent directories as needed.
pub fn save(data: &SessionData, path: &Path) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SessionError::Io {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| SessionError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| SessionError::Io {
        path: tmp.clone(),
        operation: "write",
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        SessionError::Io {
            path: path.to_path_buf(),
            operation: "rename",
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error; the caller treats that as "start fresh".
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed, starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch, starting fresh"
        );
        return None;
    }

    tracing::info!(path = %path.display(), logged_in = data.logged_in, "Session file loaded");
    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_persists_every_mutation() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());

        let mut store = FileSessionStore::open(path.clone());
        store.set_logged_in(true).unwrap();
        store.set("userLoggedIn", "true").unwrap();

        let reopened = FileSessionStore::open(path);
        assert!(reopened.is_logged_in());
        assert_eq!(reopened.get("userLoggedIn").as_deref(), Some("true"));
    }

    #[test]
    fn test_clear_drops_token_only() {
        let mut store = MemorySessionStore::logged_in_with_token("secret");
        store.set("theme", "dark").unwrap();
        store.clear().unwrap();
        assert_eq!(store.data().token, None);
        assert!(store.is_logged_in());
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nonexistent.json")).is_none());
    }

    #[test]
    fn test_malformed_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        let store = FileSessionStore::open(path);
        assert_eq!(store.data(), &SessionData::new());
    }

    #[test]
    fn test_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut data = SessionData::new();
        data.version = 99;
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_save_overwrites_stale_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        let mut data = SessionData::new();
        data.logged_in = true;
        save(&data, &path).unwrap();

        assert_eq!(load(&path), Some(data));
        assert!(!path.with_extension("json.tmp").exists());
    }
}
