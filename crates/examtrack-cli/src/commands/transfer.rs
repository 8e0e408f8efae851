//! The `examtrack export` and `import` commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use examtrack_store::RecordStore;

pub fn export(data_file: &Path, output: Option<PathBuf>) -> Result<()> {
    let store = RecordStore::open(data_file)
        .with_context(|| format!("failed to open {}", data_file.display()))?;
    let json = store.export_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write export to {}", path.display()))?;
            println!("Exported {} record(s) to {}", store.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn import(data_file: &Path, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    debug!(bytes = text.len(), "read import payload");

    let mut store = RecordStore::open(data_file)
        .with_context(|| format!("failed to open {}", data_file.display()))?;
    let count = store.import_json(&text)?;
    println!("Imported {count} record(s)");
    Ok(())
}
