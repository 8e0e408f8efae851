//! The `examtrack stats` command.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use comfy_table::Table;
use serde::Serialize;

use examtrack_core::stats::{self, OverallStats, SubjectStats};
use examtrack_store::RecordStore;

#[derive(Serialize)]
struct StatsOutput {
    overall: OverallStats,
    subjects: BTreeMap<String, SubjectStats>,
}

pub fn execute(data_file: &Path, format: &str) -> Result<()> {
    let store = RecordStore::open(data_file)
        .with_context(|| format!("failed to open {}", data_file.display()))?;
    let snapshot = store.snapshot();
    let overall = stats::overall(&snapshot);
    let subjects = stats::by_subject(&snapshot);

    match format {
        "json" => {
            let output = StatsOutput { overall, subjects };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }
        "table" => {}
        other => bail!("unknown format: {other} (expected table or json)"),
    }

    println!("Exams: {}", overall.total_exams);
    println!("Average score: {:.1}%", overall.average_score);
    println!("Best score: {}%", overall.best_score);
    println!("Last score: {}%", overall.last_score);
    println!(
        "Answers: {} correct, {} incorrect, {} not attempted",
        overall.total_correct, overall.total_incorrect, overall.total_not_attempted
    );

    if !subjects.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Subject", "Exams", "Best", "Average"]);
        for (subject, s) in &subjects {
            table.add_row(vec![
                subject.clone(),
                s.count.to_string(),
                format!("{}%", s.best_score),
                format!("{:.1}%", s.average_score),
            ]);
        }
        println!("\n{table}");
    }
    Ok(())
}
