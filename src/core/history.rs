use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::hash::scan_fingerprint;
use crate::core::types::ScanReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub scanned_at: DateTime<Utc>,
    pub report: ScanReport,
}

/// Caller-owned ordered scan history. The engine never reads or writes
/// this; it exists so a front end can keep its list across scans without
/// the core holding any cross-request state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanHistory {
    entries: Vec<HistoryEntry>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading history file {}", path.display()))?;
        let history = serde_json::from_str(&data)
            .with_context(|| format!("parsing history file {}", path.display()))?;
        Ok(history)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating history dir {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(self).context("serializing history")?;
        fs::write(path, json)
            .with_context(|| format!("writing history file {}", path.display()))?;
        Ok(())
    }

    /// Append a report; returns the entry's stable fingerprint id.
    pub fn record(&mut self, report: ScanReport) -> String {
        let id = scan_fingerprint(&report.original_message);
        self.entries.push(HistoryEntry {
            id: id.clone(),
            scanned_at: Utc::now(),
            report,
        });
        id
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
