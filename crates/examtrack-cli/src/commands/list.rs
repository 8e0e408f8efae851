//! The `examtrack list` command.

use std::path::Path;

use anyhow::{bail, Context, Result};
use comfy_table::Table;

use examtrack_core::stats;
use examtrack_store::RecordStore;

pub fn execute(data_file: &Path, limit: usize, format: &str) -> Result<()> {
    let store = RecordStore::open(data_file)
        .with_context(|| format!("failed to open {}", data_file.display()))?;
    let recent = stats::recent(&store.snapshot(), limit);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&recent)?);
            return Ok(());
        }
        "table" => {}
        other => bail!("unknown format: {other} (expected table or json)"),
    }

    if recent.is_empty() {
        println!("No exams recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Exam", "Subject", "Score", "Id"]);
    for r in &recent {
        table.add_row(vec![
            r.date.to_string(),
            r.exam_name.clone(),
            r.subject.clone().unwrap_or_default(),
            format!("{}/{} ({}%)", r.correct, r.total, r.percentage),
            r.id.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
