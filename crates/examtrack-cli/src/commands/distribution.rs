//! The `examtrack distribution` command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;

use examtrack_core::stats::{self, BAND_LABELS};
use examtrack_store::RecordStore;

pub fn execute(data_file: &Path) -> Result<()> {
    let store = RecordStore::open(data_file)
        .with_context(|| format!("failed to open {}", data_file.display()))?;
    let dist = stats::score_distribution(&store.snapshot());

    let mut table = Table::new();
    table.set_header(vec!["Band", "Exams"]);
    for (label, count) in BAND_LABELS.iter().zip(dist.counts) {
        table.add_row(vec![label.to_string(), count.to_string()]);
    }
    println!("{table}");
    Ok(())
}
