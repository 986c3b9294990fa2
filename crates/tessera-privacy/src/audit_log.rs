//! Append-only audit sinks.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tessera_core::config::PrivacyConfig;
use tessera_core::errors::TesseraResult;
use tessera_core::traits::IAuditSink;
use tessera_core::SafetyAuditRecord;

/// Audit sink that keeps records in memory, in append order.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    records: Mutex<Vec<SafetyAuditRecord>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record appended so far.
    pub fn records(&self) -> Vec<SafetyAuditRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IAuditSink for InMemoryAuditLog {
    fn append(&self, record: &SafetyAuditRecord) -> TesseraResult<()> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.clone());
        Ok(())
    }
}

/// One line of the JSONL audit file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLine {
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: SafetyAuditRecord,
}

/// Audit sink writing one JSON object per line. Each append is flushed
/// before it returns, so a successful certification always has its record
/// on disk.
pub struct JsonlAuditLog {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonlAuditLog {
    /// Open (or create) the file in append mode.
    pub fn open(path: impl AsRef<Path>) -> TesseraResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line back. Used by tooling and tests.
    pub fn read_all(path: impl AsRef<Path>) -> TesseraResult<Vec<AuditLine>> {
        let raw = std::fs::read_to_string(path)?;
        raw.lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).map_err(Into::into))
            .collect()
    }
}

impl IAuditSink for JsonlAuditLog {
    fn append(&self, record: &SafetyAuditRecord) -> TesseraResult<()> {
        let line = serde_json::to_string(&AuditLine {
            recorded_at: Utc::now(),
            record: record.clone(),
        })?;
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// The sink `[privacy] audit_log_path` asks for: a JSONL file when set,
/// otherwise an in-memory log.
pub fn open_sink(config: &PrivacyConfig) -> TesseraResult<Arc<dyn IAuditSink>> {
    Ok(match &config.audit_log_path {
        Some(path) => Arc::new(JsonlAuditLog::open(path)?),
        None => Arc::new(InMemoryAuditLog::new()),
    })
}
