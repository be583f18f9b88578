#[cfg(test)]
#[path = "state_store_test.rs"]
mod tests;

use std::fs;
use std::io::Write;
use std::path;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::SessionState;

/// Local-storage analog: the whole session serialized as one JSON record.
pub struct StateStore {
    pub path: path::PathBuf,
}

impl Default for StateStore {
    fn default() -> StateStore {
        return StateStore::new(path::PathBuf::from(Config::get(ConfigKey::StateFile)));
    }
}

impl StateStore {
    pub fn new(path: path::PathBuf) -> StateStore {
        return StateStore { path };
    }

    /// Fail-soft: a missing or unreadable record falls back to defaults so a
    /// corrupt file never blocks startup.
    pub fn load(&self) -> SessionState {
        if !self.path.exists() {
            return SessionState::default();
        }

        match fs::read_to_string(&self.path) {
            Ok(payload) => match serde_json::from_str::<SessionState>(&payload) {
                Ok(session) => return session,
                Err(err) => {
                    tracing::warn!(error = ?err, "session state file is malformed, starting fresh");
                    return SessionState::default();
                }
            },
            Err(err) => {
                tracing::warn!(error = ?err, "session state file is unreadable, starting fresh");
                return SessionState::default();
            }
        }
    }

    /// Writes through a temp file so a crash mid-write can't corrupt the
    /// record.
    pub fn save(&self, session: &SessionState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_string_pretty(session)?;
        let tmp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(payload.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, &self.path)?;

        return Ok(());
    }

    pub fn reset(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path)?;
        return Ok(());
    }
}
