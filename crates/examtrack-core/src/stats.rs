//! Aggregate statistics over exam record snapshots.
//!
//! Every function here is pure: it takes a snapshot slice, never mutates
//! it, and returns the same output for the same input. Empty input always
//! yields zero-valued results so callers need no special casing.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ExamRecord;

/// Display labels for the five score-distribution bands, in band order.
pub const BAND_LABELS: [&str; 5] = ["0-59%", "60-69%", "70-79%", "80-89%", "90-100%"];

/// Overall statistics across the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_exams: usize,
    /// Mean percentage, rounded half away from zero to one decimal place.
    pub average_score: f64,
    /// Maximum percentage.
    pub best_score: u32,
    /// Percentage of the most recent record. Later-inserted wins date ties.
    pub last_score: u32,
    pub total_correct: u64,
    pub total_incorrect: u64,
    pub total_not_attempted: u64,
}

/// Rollup for a single subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStats {
    pub count: usize,
    pub best_score: u32,
    /// Unrounded mean percentage; display layers apply their own rounding.
    pub average_score: f64,
}

/// Counts per score band, in the fixed order of [`BAND_LABELS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub counts: [u64; 5],
}

impl ScoreDistribution {
    /// Sum over all bands; always equals the input record count.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// One point of the moving-average trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub percentage: u32,
    /// Mean percentage over the centered window around this point.
    pub smoothed: f64,
}

/// Compute overall statistics for a snapshot.
pub fn overall(records: &[ExamRecord]) -> OverallStats {
    if records.is_empty() {
        return OverallStats {
            total_exams: 0,
            average_score: 0.0,
            best_score: 0,
            last_score: 0,
            total_correct: 0,
            total_incorrect: 0,
            total_not_attempted: 0,
        };
    }

    let total_exams = records.len();
    let mean = records.iter().map(|r| r.percentage as f64).sum::<f64>() / total_exams as f64;
    let best_score = records.iter().map(|r| r.percentage).max().unwrap_or(0);
    let last_score = recent(records, 1).first().map(|r| r.percentage).unwrap_or(0);

    OverallStats {
        total_exams,
        average_score: (mean * 10.0).round() / 10.0,
        best_score,
        last_score,
        total_correct: records.iter().map(|r| r.correct as u64).sum(),
        total_incorrect: records.iter().map(|r| r.incorrect as u64).sum(),
        total_not_attempted: records.iter().map(|r| r.not_attempted as u64).sum(),
    }
}

/// Partition records by subject and aggregate each partition.
///
/// Records with no subject, or an empty-string subject, are excluded from
/// the rollup. `BTreeMap` gives consumers a deterministic alphabetical
/// iteration order for charts and tables.
pub fn by_subject(records: &[ExamRecord]) -> BTreeMap<String, SubjectStats> {
    let mut totals: BTreeMap<String, (usize, u32, f64)> = BTreeMap::new();
    for r in records {
        let Some(subject) = r.subject.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let entry = totals.entry(subject.to_string()).or_insert((0, 0, 0.0));
        entry.0 += 1;
        entry.1 = entry.1.max(r.percentage);
        entry.2 += r.percentage as f64;
    }

    totals
        .into_iter()
        .map(|(subject, (count, best_score, sum))| {
            (
                subject,
                SubjectStats {
                    count,
                    best_score,
                    average_score: sum / count as f64,
                },
            )
        })
        .collect()
}

/// The `limit` most-recent records, sorted by date descending.
///
/// Among records sharing a date, the later-inserted one sorts first. The
/// input slice is never reordered; the sort works on an indexed copy.
pub fn recent(records: &[ExamRecord], limit: usize) -> Vec<ExamRecord> {
    if limit == 0 {
        return Vec::new();
    }
    let mut indexed: Vec<(usize, &ExamRecord)> = records.iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| b.date.cmp(&a.date).then(ib.cmp(ia)));
    indexed
        .into_iter()
        .take(limit)
        .map(|(_, r)| r.clone())
        .collect()
}

/// Bucket records into the five fixed percentage bands.
///
/// Bands are contiguous and non-overlapping; the last band is closed at
/// 100. Zero-count bands are kept so chart output is always five-wide.
pub fn score_distribution(records: &[ExamRecord]) -> ScoreDistribution {
    let mut counts = [0u64; 5];
    for r in records {
        let band = match r.percentage {
            0..=59 => 0,
            60..=69 => 1,
            70..=79 => 2,
            80..=89 => 3,
            // 90-100; percentages above 100 do not occur
            _ => 4,
        };
        counts[band] += 1;
    }
    ScoreDistribution { counts }
}

/// Centered moving average over the date-ascending sequence.
///
/// For index `i` of the length-`L` sequence the window is the half-open
/// range `[max(0, i - floor(W/2)), min(L, i + ceil(W/2)))`, so windows
/// shrink at the boundaries instead of wrapping or padding. Equal dates
/// keep insertion order (stable ascending sort). A zero window yields an
/// empty series.
pub fn moving_average(records: &[ExamRecord], window: usize) -> Vec<TrendPoint> {
    if window == 0 {
        return Vec::new();
    }

    let mut chronological: Vec<&ExamRecord> = records.iter().collect();
    chronological.sort_by_key(|r| r.date);

    let len = chronological.len();
    let mut series = Vec::with_capacity(len);
    for (i, record) in chronological.iter().enumerate() {
        let start = i.saturating_sub(window / 2);
        let end = (i + window.div_ceil(2)).min(len);
        let slice = &chronological[start..end];
        let smoothed =
            slice.iter().map(|r| r.percentage as f64).sum::<f64>() / slice.len() as f64;
        series.push(TrendPoint {
            date: record.date,
            percentage: record.percentage,
            smoothed,
        });
    }
    series
}
