//! Admin session management.
//!
//! Authentication is a plaintext comparison against the single built-in
//! admin account; this is demo-grade by design, there is no server to
//! validate against. What a successful login produces is an explicit
//! session object (random token + issue time) persisted beside the content
//! store, which every mutating command checks before proceeding.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FolioError, Result};
use crate::storage::RecordStore;

pub const ADMIN_EMAIL: &str = "admin@portfolio.com";
pub const ADMIN_PASSWORD: &str = "Admin@2024";

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub email: String,
    pub issued_at: DateTime<Utc>,
}

fn session_path(store: &RecordStore) -> PathBuf {
    store.dir().join(SESSION_FILE)
}

/// Check the credentials against the built-in admin account and persist a
/// fresh session on success. Any other pair fails without touching the
/// session file.
pub fn login(store: &RecordStore, email: &str, password: &str) -> Result<Session> {
    if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
        return Err(FolioError::InvalidCredentials);
    }

    let session = Session {
        token: Uuid::new_v4().to_string(),
        email: email.to_string(),
        issued_at: Utc::now(),
    };

    let json = serde_json::to_vec_pretty(&session)?;
    fs::write(session_path(store), json)?;
    Ok(session)
}

/// The current session, if any. An unreadable session file counts as no
/// session.
pub fn current(store: &RecordStore) -> Option<Session> {
    let bytes = fs::read(session_path(store)).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Gate for admin operations: every mutating command calls this before
/// touching the store.
pub fn require(store: &RecordStore) -> Result<Session> {
    current(store).ok_or(FolioError::NotAuthenticated)
}

pub fn logout(store: &RecordStore) {
    let _ = fs::remove_file(session_path(store));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_login_with_admin_credentials_establishes_session() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        let session = login(&store, ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        assert_eq!(session.email, ADMIN_EMAIL);
        assert!(!session.token.is_empty());

        assert!(current(&store).is_some());
        assert!(require(&store).is_ok());
    }

    #[test]
    fn test_login_with_wrong_password_leaves_no_session() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        let result = login(&store, ADMIN_EMAIL, "wrong");
        assert!(matches!(result, Err(FolioError::InvalidCredentials)));
        assert!(current(&store).is_none());
    }

    #[test]
    fn test_login_with_wrong_email_leaves_no_session() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        let result = login(&store, "someone@example.com", ADMIN_PASSWORD);
        assert!(matches!(result, Err(FolioError::InvalidCredentials)));
        assert!(current(&store).is_none());
    }

    #[test]
    fn test_require_fails_without_login() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        assert!(matches!(require(&store), Err(FolioError::NotAuthenticated)));
    }

    #[test]
    fn test_logout_discards_session() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        login(&store, ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        logout(&store);

        assert!(current(&store).is_none());
    }

    #[test]
    fn test_each_login_issues_a_fresh_token() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        let first = login(&store, ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        let second = login(&store, ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        assert_ne!(first.token, second.token);
    }
}
