use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::session::model::Session;
use business::domain::session::storage::{
    EMAIL_KEY, SessionStorage, SessionStorageError, TOKEN_KEY,
};

/// Persists the session as a flat JSON object keyed by [`TOKEN_KEY`] and [`EMAIL_KEY`].
///
/// A missing or empty file reads as an empty session. Writes go to a sibling
/// temporary file that is then renamed over the existing file.
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_entries(&self, entries: &BTreeMap<&str, &str>) -> Result<(), SessionStorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|_| SessionStorageError::Write)?;
        }

        let content =
            serde_json::to_string_pretty(entries).map_err(|_| SessionStorageError::Write)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|_| SessionStorageError::Write)?;
        fs::rename(&tmp, &self.path).map_err(|_| SessionStorageError::Write)
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Session, SessionStorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Session::default()),
            Err(_) => return Err(SessionStorageError::Read),
        };
        if content.trim().is_empty() {
            return Ok(Session::default());
        }

        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|_| SessionStorageError::Corrupted)?;
        Ok(Session::new(
            entries.get(TOKEN_KEY).cloned().unwrap_or_default(),
            entries.get(EMAIL_KEY).cloned().unwrap_or_default(),
        ))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStorageError> {
        let mut entries = BTreeMap::new();
        if let Some(token) = &session.token {
            entries.insert(TOKEN_KEY, token.as_str());
        }
        if let Some(email) = &session.email {
            entries.insert(EMAIL_KEY, email.as_str());
        }
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), SessionStorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(_) => Err(SessionStorageError::Write),
        }
    }
}
