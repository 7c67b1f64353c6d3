//! Round-trip conformance checks.
//!
//! A payload conforms when decoding it, re-encoding the result and decoding
//! that again yields the same value. [`check_tree`] runs the check over every
//! `*.json` file below a directory in parallel.

use crate::payload::Payload;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

/// Outcome of one successful round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTripReport {
    /// Concrete type the payload decoded into.
    pub type_name: String,
    pub discriminator: Option<String>,
    /// Top-level keys that no model property claimed.
    pub additional_keys: Vec<String>,
    /// Whether the second decode matched the first.
    pub stable: bool,
}

/// Round-trip report of one file; `error` is set when the file could not be checked.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: Utf8PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RoundTripReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.report.as_ref().is_some_and(|r| r.stable)
    }
}

/// Decode, re-encode and decode `text` again.
pub fn check_payload(text: &str) -> Result<RoundTripReport> {
    let first: Payload = text.parse().context("Failed to decode payload")?;
    let encoded = first
        .to_value()
        .context("Failed to re-encode payload")?;
    let second = Payload::from_value(&encoded).context("Failed to decode re-encoded payload")?;

    Ok(RoundTripReport {
        type_name: first.type_name().to_string(),
        discriminator: first.discriminator().map(str::to_string),
        additional_keys: first.additional_data().keys().cloned().collect(),
        stable: first == second,
    })
}

pub fn check_file(path: &Utf8Path) -> Result<RoundTripReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    check_payload(&text).with_context(|| format!("Round trip failed for {}", path))
}

/// Check every `*.json` file below `root`. Reports come back sorted by path.
pub fn check_tree(root: &Utf8Path) -> Result<Vec<FileReport>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("Failed to walk {}", root))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(path) = Utf8PathBuf::from_path_buf(entry.into_path()) else {
            tracing::warn!("skipping non UTF-8 path below {}", root);
            continue;
        };
        if path.extension() == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    tracing::debug!(count = files.len(), %root, "checking payload files");

    Ok(files
        .into_par_iter()
        .map(|path| match check_file(&path) {
            Ok(report) => {
                if !report.stable {
                    tracing::warn!(%path, "payload is not stable across a round trip");
                }
                FileReport {
                    path,
                    report: Some(report),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(%path, "{:#}", e);
                FileReport {
                    path,
                    report: None,
                    error: Some(format!("{:#}", e)),
                }
            }
        })
        .collect())
}
