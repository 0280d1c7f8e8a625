use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::SessionError;
use super::model::Session;

const SESSION_FILE_NAME: &str = "session.toml";
const SESSION_FILE_VERSION: u32 = 1;

/// Storage abstraction for the persisted session.
///
/// `token` and `has_logged_in_user` have default implementations on top of
/// [`SessionStore::session`]; stores only need to load, save and clear.
pub trait SessionStore: Send + Sync {
    fn session(&self) -> Result<Option<Session>, SessionError>;
    fn set_session(&self, session: &Session) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;

    /// Stored access token, `None` when absent or blank.
    fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self
            .session()?
            .filter(Session::is_logged_in)
            .map(|session| session.access_token().to_string()))
    }

    /// Persisted logged-in flag.
    fn has_logged_in_user(&self) -> Result<bool, SessionError> {
        Ok(self
            .session()?
            .is_some_and(|session| session.is_logged_in()))
    }
}

/// File-backed session store writing a single TOML file.
///
/// # Example
/// ```no_run
/// use secondhand::session::{FileSessionStore, Session, SessionStore};
///
/// let store = FileSessionStore::new_default();
/// store.set_session(&Session::new("access"))?;
/// assert_eq!(store.token()?.as_deref(), Some("access"));
/// # Ok::<(), secondhand::session::SessionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn new_default() -> Self {
        Self::new(default_session_dir())
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(SESSION_FILE_NAME)
    }

    /// Sibling of the session file; renamed over it once fully written.
    fn staging_path(&self) -> PathBuf {
        self.base_dir
            .join(format!(".{SESSION_FILE_NAME}.{}.tmp", std::process::id()))
    }

    /// Replace the session file so readers see either the old or the new session.
    fn write_file(&self, contents: &[u8]) -> Result<(), SessionError> {
        fs::create_dir_all(&self.base_dir)?;
        let staging = self.staging_path();

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let written = options.open(&staging).and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        });
        if let Err(err) = written.and_then(|()| fs::rename(&staging, self.path())) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }

        #[cfg(unix)]
        fs::set_permissions(self.path(), fs::Permissions::from_mode(0o600))?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn session(&self) -> Result<Option<Session>, SessionError> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionError::Io(err.to_string())),
        };
        let file: SessionFile = toml::from_str(&raw)?;
        if file.version != SESSION_FILE_VERSION {
            return Err(SessionError::UnsupportedVersion(file.version));
        }
        let session = Session::from_parts(file.access_token, file.logged_in)?
            .with_user(file.name, file.email);
        Ok(Some(session))
    }

    fn set_session(&self, session: &Session) -> Result<(), SessionError> {
        let file = SessionFile {
            version: SESSION_FILE_VERSION,
            access_token: session.access_token().to_string(),
            logged_in: session.is_logged_in(),
            name: session.name().map(str::to_string),
            email: session.email().map(str::to_string),
            saved_at: Utc::now(),
        };
        let serialized = toml::to_string(&file)?;
        self.write_file(serialized.as_bytes())?;
        tracing::debug!(path = %self.path().display(), "session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Io(err.to_string())),
        }
    }
}

/// In-process session store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Session>>, SessionError> {
        self.session
            .lock()
            .map_err(|_| SessionError::Io("session lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn session(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.lock()?.clone())
    }

    fn set_session(&self, session: &Session) -> Result<(), SessionError> {
        *self.lock()? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.lock()? = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    access_token: String,
    logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    saved_at: DateTime<Utc>,
}

pub(crate) fn default_session_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".secondhand"))
        .unwrap_or_else(|| PathBuf::from(".secondhand"))
}
