//! The record store: load, save, and CRUD over the exam collection.

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info};
use uuid::Uuid;

use examtrack_core::model::{ExamDraft, ExamPatch, ExamRecord};

use crate::error::StoreError;

/// Durable store over a single JSON data file.
///
/// Construct one at application start and pass it to whatever needs it.
/// The statistics engine never sees the store itself, only the owned
/// copies [`RecordStore::snapshot`] hands out.
pub struct RecordStore {
    path: PathBuf,
    records: Vec<ExamRecord>,
}

impl RecordStore {
    /// Open the store at `path`, loading any existing records.
    ///
    /// A missing file starts an empty collection; a file that exists but
    /// fails to parse is an error rather than silent data loss.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records: Vec<ExamRecord> = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            serde_json::from_str(&text)?
        } else {
            Vec::new()
        };
        debug!(path = %path.display(), count = records.len(), "opened record store");
        Ok(Self { path, records })
    }

    /// Persist the collection as pretty JSON, creating parent directories
    /// as needed.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Validate and append a new record, filling defaults: a fresh id,
    /// today's date, and derived not-attempted/score/percentage.
    pub fn add(&mut self, draft: ExamDraft) -> Result<ExamRecord, StoreError> {
        let record = ExamRecord::from_draft(draft, Local::now().date_naive())?;
        info!(id = %record.id, name = %record.exam_name, "adding exam record");
        self.records.push(record.clone());
        self.save()?;
        Ok(record)
    }

    /// Apply a sparse patch to the record with `id`.
    ///
    /// Only supplied fields overwrite; the stored record is replaced with
    /// the merged copy rather than mutated in place. The merged record is
    /// held to the same invariants as creation, so a patch cannot produce
    /// a zero total or a blank name that `add` would have rejected.
    pub fn update(&mut self, id: Uuid, patch: &ExamPatch) -> Result<ExamRecord, StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let merged = self.records[index].merged(patch);
        merged.validate()?;
        self.records[index] = merged.clone();
        self.save()?;
        Ok(merged)
    }

    /// Remove the record with `id`.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.records.remove(index);
        self.save()
    }

    /// Remove every record.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        self.save()
    }

    /// Owned copy of the collection in insertion order. The statistics
    /// engine operates on snapshots, never on a live view.
    pub fn snapshot(&self) -> Vec<ExamRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose subject matches `subject` exactly.
    pub fn by_subject(&self, subject: &str) -> Vec<ExamRecord> {
        self.records
            .iter()
            .filter(|r| r.subject.as_deref() == Some(subject))
            .cloned()
            .collect()
    }

    /// The whole collection as pretty JSON, order preserved.
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Replace the collection from an exported JSON array and persist it.
    ///
    /// Malformed JSON or a non-array payload is an error and leaves the
    /// existing collection untouched. Returns the imported record count.
    pub fn import_json(&mut self, text: &str) -> Result<usize, StoreError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_array() {
            return Err(StoreError::NotAnArray);
        }
        let imported: Vec<ExamRecord> = serde_json::from_value(value)?;
        info!(count = imported.len(), "importing exam records");
        self.records = imported;
        self.save()?;
        Ok(self.records.len())
    }
}
