//! The `examtrack add` command.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use examtrack_core::model::ExamDraft;
use examtrack_store::RecordStore;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    data_file: &Path,
    name: String,
    subject: Option<String>,
    date: Option<NaiveDate>,
    total: u32,
    correct: u32,
    incorrect: u32,
    not_attempted: Option<u32>,
    score: Option<f64>,
) -> Result<()> {
    let mut store = RecordStore::open(data_file)
        .with_context(|| format!("failed to open {}", data_file.display()))?;

    let record = store.add(ExamDraft {
        exam_name: name,
        subject,
        date,
        total,
        correct,
        incorrect,
        not_attempted,
        score,
        percentage: None,
    })?;

    println!(
        "Added {} ({}%) with id {}",
        record.exam_name, record.percentage, record.id
    );
    Ok(())
}
