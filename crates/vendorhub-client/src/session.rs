//! Persisted client session.
//!
//! Two entries live in the session directory: `google_token` (the raw
//! identity token) and `google_user` (the decoded user as JSON). Either
//! both exist or the session is absent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use vendorhub_core::error::{AppError, ErrorKind};
use vendorhub_core::result::AppResult;
use vendorhub_entity::identity::IdentityUser;

use crate::token::decode_unverified;

/// Entry holding the raw identity token.
pub const TOKEN_KEY: &str = "google_token";
/// Entry holding the decoded user JSON.
pub const USER_KEY: &str = "google_user";

/// A logged-in user: the bearer credential plus its decoded claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: IdentityUser,
}

impl Session {
    /// The session user's email.
    pub fn email(&self) -> &str {
        &self.user.email
    }
}

/// File-backed store for the current session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store entries under `dir`. The directory is created on login.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Decode `token` and persist it as the current session.
    ///
    /// No client-side expiry check is made.
    pub fn login(&self, token: &str) -> AppResult<Session> {
        let token = token.trim();
        let user = decode_unverified(token)?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to create session directory", e)
        })?;
        fs::write(self.path(TOKEN_KEY), token)?;
        fs::write(self.path(USER_KEY), serde_json::to_vec_pretty(&user)?)?;

        info!(email = %user.email, "Session stored");
        Ok(Session {
            token: token.to_string(),
            user,
        })
    }

    /// Load the persisted session.
    ///
    /// Missing or unreadable entries clear whatever is left and yield
    /// `None`.
    pub fn restore(&self) -> AppResult<Option<Session>> {
        let token = read_entry(&self.path(TOKEN_KEY))?;
        let user = read_entry(&self.path(USER_KEY))?;

        let session = match (token, user) {
            (Some(token), Some(user)) if !token.trim().is_empty() => {
                serde_json::from_str::<IdentityUser>(&user)
                    .ok()
                    .map(|user| Session {
                        token: token.trim().to_string(),
                        user,
                    })
            }
            _ => None,
        };

        if session.is_none() {
            debug!("No usable session; clearing entries");
            self.logout()?;
        }
        Ok(session)
    }

    /// Remove both entries. Succeeds when nothing is stored.
    pub fn logout(&self) -> AppResult<()> {
        for key in [TOKEN_KEY, USER_KEY] {
            match fs::remove_file(self.path(key)) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

fn read_entry(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
