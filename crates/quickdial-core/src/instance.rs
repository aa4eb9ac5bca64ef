//! Single-instance coordination.
//!
//! The primary process records its identity as JSON in the per-user config
//! directory. A later invocation discovers a live primary through the record
//! and forwards its launch signal instead of starting a second server.
//! Stale records are removed on sight; the record itself is removed on
//! graceful shutdown.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::InstanceConfig;
use crate::error::{QuickdialError, Result};
use crate::platform;

/// Identity record of the primary process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceRecord {
    /// Process id of the primary.
    pub pid: u32,
    /// Host its RPC server is bound to.
    pub host: String,
    /// Port its RPC server listens on.
    pub port: u16,
    /// When the primary started.
    pub started_at: DateTime<Utc>,
    /// Version of the primary binary.
    pub version: String,
}

impl InstanceRecord {
    /// Build the record for the current process.
    pub fn for_current_process(host: impl Into<String>, port: u16) -> Self {
        Self {
            pid: std::process::id(),
            host: host.into(),
            port,
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// RPC endpoint of the recorded instance.
    pub fn rpc_url(&self) -> String {
        format!("http://{}:{}/rpc", self.host, self.port)
    }

    /// Whether the recorded process is still running.
    pub fn is_alive(&self) -> bool {
        platform::is_process_alive(self.pid)
    }
}

/// Path of the instance record inside `config_dir`.
pub fn record_path(config_dir: &Path) -> PathBuf {
    config_dir.join(InstanceConfig::INSTANCE_FILENAME)
}

/// Write the record for this process.
pub fn write_record(config_dir: &Path, record: &InstanceRecord) -> Result<()> {
    fs::create_dir_all(config_dir).map_err(|e| QuickdialError::Io {
        message: "create config directory".to_string(),
        path: Some(config_dir.to_path_buf()),
        source: Some(e),
    })?;

    let path = record_path(config_dir);
    let serialized = serde_json::to_string_pretty(record)?;

    fs::write(&path, serialized).map_err(|e| QuickdialError::Io {
        message: "write instance record".to_string(),
        path: Some(path.clone()),
        source: Some(e),
    })?;

    debug!("Wrote instance record to {:?}", path);
    Ok(())
}

/// Read the record, if one exists.
///
/// A corrupt record is treated as absent (and logged); the next primary
/// overwrites it.
pub fn read_record(config_dir: &Path) -> Result<Option<InstanceRecord>> {
    let path = record_path(config_dir);
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path).map_err(|e| QuickdialError::Io {
        message: "read instance record".to_string(),
        path: Some(path.clone()),
        source: Some(e),
    })?;

    match serde_json::from_str(&contents) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            warn!("Ignoring corrupt instance record {:?}: {}", path, e);
            Ok(None)
        }
    }
}

/// Find a live primary instance.
///
/// Stale records (dead process, or this process's own pid left over from a
/// previous life) are removed and `None` is returned.
pub fn find_live(config_dir: &Path) -> Option<InstanceRecord> {
    let record = match read_record(config_dir) {
        Ok(Some(record)) => record,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read instance record: {}", e);
            return None;
        }
    };

    if record.pid == std::process::id() || !record.is_alive() {
        debug!("Removing stale instance record (pid {})", record.pid);
        clear_record(config_dir);
        return None;
    }

    Some(record)
}

/// Remove the record. A missing file is fine.
pub fn clear_record(config_dir: &Path) {
    let path = record_path(config_dir);
    if let Err(e) = fs::remove_file(&path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Failed to remove instance record {:?}: {}", path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let record = InstanceRecord::for_current_process("127.0.0.1", 4123);

        write_record(temp_dir.path(), &record).unwrap();

        let read = read_record(temp_dir.path()).unwrap();
        assert_eq!(read, Some(record));
    }

    #[test]
    fn test_read_missing_record() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(read_record(temp_dir.path()).unwrap(), None);
    }

    #[test]
    fn test_corrupt_record_treated_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(record_path(temp_dir.path()), "not json {").unwrap();

        assert_eq!(read_record(temp_dir.path()).unwrap(), None);
    }

    #[test]
    fn test_find_live_removes_dead_record() {
        let temp_dir = TempDir::new().unwrap();
        let record = InstanceRecord {
            pid: 4_000_000_000,
            host: "127.0.0.1".to_string(),
            port: 4123,
            started_at: Utc::now(),
            version: "0.0.0".to_string(),
        };
        write_record(temp_dir.path(), &record).unwrap();

        assert!(find_live(temp_dir.path()).is_none());
        assert!(!record_path(temp_dir.path()).exists());
    }

    #[test]
    fn test_find_live_ignores_own_pid() {
        let temp_dir = TempDir::new().unwrap();
        // A record with our own pid is a leftover, not a primary to forward to
        let record = InstanceRecord::for_current_process("127.0.0.1", 4123);
        write_record(temp_dir.path(), &record).unwrap();

        assert!(find_live(temp_dir.path()).is_none());
        assert!(!record_path(temp_dir.path()).exists());
    }

    #[test]
    fn test_rpc_url() {
        let record = InstanceRecord::for_current_process("127.0.0.1", 4123);

        assert_eq!(record.rpc_url(), "http://127.0.0.1:4123/rpc");
    }

    #[test]
    fn test_clear_missing_record_is_silent() {
        let temp_dir = TempDir::new().unwrap();

        clear_record(temp_dir.path());
    }
}
