//! Core record types for examtrack.
//!
//! An [`ExamRecord`] is created from an [`ExamDraft`] at the store
//! boundary, where defaults are filled and validation happens, and is
//! updated by merging an [`ExamPatch`] into a fresh copy. Stored records
//! are never mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// One reported exam result.
///
/// Field names serialize in camelCase so exports stay compatible with the
/// JSON shape the original dashboard kept in browser storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    /// Unique identifier, assigned at creation and never reused.
    pub id: Uuid,
    /// Display name of the exam.
    pub exam_name: String,
    /// Optional subject label. `None` is distinct from an empty string.
    #[serde(default)]
    pub subject: Option<String>,
    /// Calendar date the exam was taken. Used only for ordering.
    pub date: NaiveDate,
    /// Total number of questions.
    pub total: u32,
    /// Questions answered correctly.
    pub correct: u32,
    /// Questions answered incorrectly.
    pub incorrect: u32,
    /// Questions left unanswered.
    pub not_attempted: u32,
    /// Raw score. Equals `correct` by convention, but kept independent to
    /// accommodate partial-credit exams.
    pub score: f64,
    /// Score as 0-100, rounded once at creation and stored thereafter.
    pub percentage: u32,
}

/// Creation input for a record. Optional fields are filled with defaults
/// when the record is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamDraft {
    pub exam_name: String,
    #[serde(default)]
    pub subject: Option<String>,
    /// Defaults to the store's notion of "today" when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    /// Derived as `total - correct - incorrect` when omitted. A supplied
    /// value is trusted as-is, even if inconsistent with the counts.
    #[serde(default)]
    pub not_attempted: Option<u32>,
    /// Defaults to `correct`.
    #[serde(default)]
    pub score: Option<f64>,
    /// Derived as `round(score / total * 100)` when omitted.
    #[serde(default)]
    pub percentage: Option<u32>,
}

/// Sparse update applied over an existing record. Absent fields leave the
/// record unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamPatch {
    pub exam_name: Option<String>,
    pub subject: Option<String>,
    pub date: Option<NaiveDate>,
    pub total: Option<u32>,
    pub correct: Option<u32>,
    pub incorrect: Option<u32>,
    pub not_attempted: Option<u32>,
    pub score: Option<f64>,
    pub percentage: Option<u32>,
}

impl ExamPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.exam_name.is_none()
            && self.subject.is_none()
            && self.date.is_none()
            && self.total.is_none()
            && self.correct.is_none()
            && self.incorrect.is_none()
            && self.not_attempted.is_none()
            && self.score.is_none()
            && self.percentage.is_none()
    }
}

impl ExamRecord {
    /// Build a record from a draft, assigning a fresh id and filling
    /// defaults. `fallback_date` is used when the draft carries no date.
    ///
    /// Rejects an empty name, a zero total, and answered counts that
    /// exceed the total when not-attempted has to be derived. A supplied
    /// not-attempted value is trusted without cross-checking.
    pub fn from_draft(draft: ExamDraft, fallback_date: NaiveDate) -> Result<Self, ValidationError> {
        if draft.exam_name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if draft.total == 0 {
            return Err(ValidationError::ZeroTotal);
        }

        let not_attempted = match draft.not_attempted {
            Some(n) => n,
            None => draft
                .correct
                .checked_add(draft.incorrect)
                .and_then(|answered| draft.total.checked_sub(answered))
                .ok_or(ValidationError::CountsExceedTotal {
                    total: draft.total,
                    correct: draft.correct,
                    incorrect: draft.incorrect,
                })?,
        };

        let score = draft.score.unwrap_or(draft.correct as f64);
        let percentage = match draft.percentage {
            Some(p) => p,
            None => derive_percentage(score, draft.total),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            exam_name: draft.exam_name,
            subject: draft.subject,
            date: draft.date.unwrap_or(fallback_date),
            total: draft.total,
            correct: draft.correct,
            incorrect: draft.incorrect,
            not_attempted,
            score,
            percentage,
        })
    }

    /// Check the invariants creation enforces, for re-use after a merge:
    /// a non-empty name and a non-zero total. Derived-count consistency is
    /// not rechecked; a supplied not-attempted is trusted at creation and
    /// stays trusted here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exam_name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.total == 0 {
            return Err(ValidationError::ZeroTotal);
        }
        Ok(())
    }

    /// Return a new record with the patch's supplied fields overwriting
    /// this one. The id never changes. When the patch touches `score` or
    /// `total` without supplying a percentage, the percentage is derived
    /// again from the merged values.
    pub fn merged(&self, patch: &ExamPatch) -> ExamRecord {
        let mut next = self.clone();
        if let Some(name) = &patch.exam_name {
            next.exam_name = name.clone();
        }
        if let Some(subject) = &patch.subject {
            next.subject = Some(subject.clone());
        }
        if let Some(date) = patch.date {
            next.date = date;
        }
        if let Some(total) = patch.total {
            next.total = total;
        }
        if let Some(correct) = patch.correct {
            next.correct = correct;
        }
        if let Some(incorrect) = patch.incorrect {
            next.incorrect = incorrect;
        }
        if let Some(not_attempted) = patch.not_attempted {
            next.not_attempted = not_attempted;
        }
        if let Some(score) = patch.score {
            next.score = score;
        }
        match patch.percentage {
            Some(p) => next.percentage = p,
            None if (patch.score.is_some() || patch.total.is_some()) && next.total > 0 => {
                next.percentage = derive_percentage(next.score, next.total);
            }
            None => {}
        }
        next
    }
}

/// `round(score / total * 100)`, half away from zero.
fn derive_percentage(score: f64, total: u32) -> u32 {
    (score / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, total: u32, correct: u32, incorrect: u32) -> ExamDraft {
        ExamDraft {
            exam_name: name.into(),
            total,
            correct,
            incorrect,
            ..ExamDraft::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn from_draft_fills_defaults() {
        let record = ExamRecord::from_draft(draft("Mock Test 1", 50, 40, 5), today()).unwrap();
        assert_eq!(record.date, today());
        assert_eq!(record.not_attempted, 5);
        assert_eq!(record.score, 40.0);
        assert_eq!(record.percentage, 80);
        assert!(record.subject.is_none());
    }

    #[test]
    fn from_draft_rounds_percentage_half_up() {
        // 25 / 40 = 62.5% -> 63
        let record = ExamRecord::from_draft(draft("Rounding", 40, 25, 15), today()).unwrap();
        assert_eq!(record.percentage, 63);
    }

    #[test]
    fn from_draft_respects_partial_credit_score() {
        let mut d = draft("Partial", 10, 7, 3);
        d.score = Some(7.5);
        let record = ExamRecord::from_draft(d, today()).unwrap();
        assert_eq!(record.score, 7.5);
        assert_eq!(record.percentage, 75);
        assert_eq!(record.correct, 7);
    }

    #[test]
    fn from_draft_trusts_supplied_not_attempted() {
        let mut d = draft("Inconsistent", 10, 9, 9);
        d.not_attempted = Some(3);
        let record = ExamRecord::from_draft(d, today()).unwrap();
        assert_eq!(record.not_attempted, 3);
    }

    #[test]
    fn from_draft_rejects_zero_total() {
        let err = ExamRecord::from_draft(draft("Empty", 0, 0, 0), today()).unwrap_err();
        assert_eq!(err, ValidationError::ZeroTotal);
    }

    #[test]
    fn from_draft_rejects_blank_name() {
        let err = ExamRecord::from_draft(draft("   ", 10, 5, 5), today()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn from_draft_rejects_underivable_not_attempted() {
        let err = ExamRecord::from_draft(draft("Overflow", 10, 8, 5), today()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CountsExceedTotal {
                total: 10,
                correct: 8,
                incorrect: 5,
            }
        );
    }

    #[test]
    fn merged_overwrites_only_supplied_fields() {
        let record = ExamRecord::from_draft(draft("Original", 20, 10, 10), today()).unwrap();
        let patch = ExamPatch {
            exam_name: Some("Renamed".into()),
            subject: Some("math".into()),
            ..ExamPatch::default()
        };
        let next = record.merged(&patch);
        assert_eq!(next.id, record.id);
        assert_eq!(next.exam_name, "Renamed");
        assert_eq!(next.subject.as_deref(), Some("math"));
        assert_eq!(next.total, 20);
        assert_eq!(next.percentage, record.percentage);
        // the original is untouched
        assert_eq!(record.exam_name, "Original");
    }

    #[test]
    fn merged_recomputes_percentage_on_score_change() {
        let record = ExamRecord::from_draft(draft("Scored", 20, 10, 10), today()).unwrap();
        assert_eq!(record.percentage, 50);
        let patch = ExamPatch {
            score: Some(15.0),
            ..ExamPatch::default()
        };
        assert_eq!(record.merged(&patch).percentage, 75);
    }

    #[test]
    fn validate_catches_merged_invariant_breaks() {
        let record = ExamRecord::from_draft(draft("Valid", 20, 10, 10), today()).unwrap();
        assert_eq!(record.validate(), Ok(()));

        let zeroed = record.merged(&ExamPatch {
            total: Some(0),
            ..ExamPatch::default()
        });
        assert_eq!(zeroed.validate(), Err(ValidationError::ZeroTotal));

        let unnamed = record.merged(&ExamPatch {
            exam_name: Some("  ".into()),
            ..ExamPatch::default()
        });
        assert_eq!(unnamed.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn merged_keeps_explicit_percentage() {
        let record = ExamRecord::from_draft(draft("Explicit", 20, 10, 10), today()).unwrap();
        let patch = ExamPatch {
            score: Some(15.0),
            percentage: Some(42),
            ..ExamPatch::default()
        };
        assert_eq!(record.merged(&patch).percentage, 42);
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = ExamRecord::from_draft(draft("Serde", 10, 8, 1), today()).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"examName\""));
        assert!(json.contains("\"notAttempted\""));

        let back: ExamRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
