//! The `examtrack trend` command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;

use examtrack_core::stats;
use examtrack_store::RecordStore;

pub fn execute(data_file: &Path, window: usize) -> Result<()> {
    let store = RecordStore::open(data_file)
        .with_context(|| format!("failed to open {}", data_file.display()))?;
    let series = stats::moving_average(&store.snapshot(), window);

    if series.is_empty() {
        println!("No exams recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Score", "Smoothed"]);
    for point in &series {
        table.add_row(vec![
            point.date.to_string(),
            format!("{}%", point.percentage),
            format!("{:.1}%", point.smoothed),
        ]);
    }
    println!("{table}");
    Ok(())
}
