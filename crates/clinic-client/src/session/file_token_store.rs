use crate::{ClientError, ClientResult, Credential, TokenStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// On-disk shape of the session file
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    /// RFC 3339 timestamp of the login that produced the token
    saved_at: String,
}

/// Token store backed by a JSON file.
///
/// Writes go to a temp file that is synced and then renamed over the
/// session file, so a crash mid-write never leaves a half-written token.
/// A corrupted file reads as "no token".
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }

    fn write_atomic(&self, contents: &[u8]) -> ClientResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| {
                ClientError::session_io(format!("Failed to create {}", dir.display()), e)
            })?;
        }

        let temp_path = self.temp_path();

        {
            let mut file = fs::File::create(&temp_path).map_err(|e| {
                ClientError::session_io(format!("Failed to create {}", temp_path.display()), e)
            })?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = file.set_permissions(fs::Permissions::from_mode(0o600)) {
                    warn!(
                        "Failed to restrict permissions on {}: {e}",
                        temp_path.display()
                    );
                }
            }

            file.write_all(contents).map_err(|e| {
                ClientError::session_io(format!("Failed to write {}", temp_path.display()), e)
            })?;

            file.sync_all().map_err(|e| {
                ClientError::session_io(format!("Failed to sync {}", temp_path.display()), e)
            })?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ClientError::session_io(
                format!(
                    "Failed to move {} to {}",
                    temp_path.display(),
                    self.path.display()
                ),
                e,
            )
        })
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> ClientResult<Option<Credential>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(ClientError::session_io(
                    format!("Failed to read {}", self.path.display()),
                    e,
                ));
            }
        };

        match serde_json::from_str::<StoredSession>(&contents) {
            Ok(stored) => Ok(Credential::new(stored.token)),
            Err(e) => {
                warn!(
                    "Session file corrupted at {}: {e}; treating as signed out",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    fn save(&self, credential: &Credential) -> ClientResult<()> {
        let stored = StoredSession {
            token: credential.expose().to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        };

        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| ClientError::session(format!("Failed to serialize session: {e}")))?;

        self.write_atomic(json.as_bytes())?;
        debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed session file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::session_io(
                format!("Failed to remove {}", self.path.display()),
                e,
            )),
        }
    }
}
