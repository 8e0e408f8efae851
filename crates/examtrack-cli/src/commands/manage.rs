//! The `examtrack update`, `delete`, and `clear` commands.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use examtrack_core::model::ExamPatch;
use examtrack_store::RecordStore;

fn open(data_file: &Path) -> Result<RecordStore> {
    RecordStore::open(data_file)
        .with_context(|| format!("failed to open {}", data_file.display()))
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    data_file: &Path,
    id: Uuid,
    name: Option<String>,
    subject: Option<String>,
    date: Option<NaiveDate>,
    total: Option<u32>,
    correct: Option<u32>,
    incorrect: Option<u32>,
    not_attempted: Option<u32>,
    score: Option<f64>,
) -> Result<()> {
    let patch = ExamPatch {
        exam_name: name,
        subject,
        date,
        total,
        correct,
        incorrect,
        not_attempted,
        score,
        percentage: None,
    };
    if patch.is_empty() {
        bail!("nothing to update: supply at least one field flag");
    }

    let mut store = open(data_file)?;
    let record = store.update(id, &patch)?;
    println!("Updated {} ({}%)", record.exam_name, record.percentage);
    Ok(())
}

pub fn delete(data_file: &Path, id: Uuid) -> Result<()> {
    let mut store = open(data_file)?;
    store.delete(id)?;
    println!("Deleted {id}");
    Ok(())
}

pub fn clear(data_file: &Path, yes: bool) -> Result<()> {
    if !yes {
        bail!("refusing to delete all records without --yes");
    }
    let mut store = open(data_file)?;
    let count = store.len();
    store.clear()?;
    println!("Deleted {count} record(s)");
    Ok(())
}
