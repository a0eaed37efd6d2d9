use std::sync::{Arc, LazyLock};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::types::TimelinePoint;

/// Record kind whose payload carries the authoritative date of an entry.
const TIMEFRAME_KIND: &str = "timeframe";

static YEAR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("year-run pattern is valid"));

/// One loosely-typed content record attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub payload: String,
}

impl ContentRecord {
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }
}

/// A user-submitted entity as delivered by the upstream data layer.
///
/// The shape is deliberately lenient: unknown fields are ignored and missing
/// fields default, because upstream content is user-authored and
/// heterogeneous.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub records: Vec<ContentRecord>,
}

/// Outcome of timestamp resolution for one submission.
///
/// `Unresolved` is a policy outcome, not an error: the entity is simply not
/// placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTimestamp {
    Resolved(i64),
    Unresolved,
}

impl ResolvedTimestamp {
    #[must_use]
    pub fn millis(self) -> Option<i64> {
        match self {
            Self::Resolved(millis) => Some(millis),
            Self::Unresolved => None,
        }
    }
}

/// Resolves a submission to a single epoch-milliseconds timestamp.
///
/// Resolution order:
/// 1. the first record whose kind is `"timeframe"` (case-insensitive),
///    parsed as a bare 4-digit year or a general date-time string;
/// 2. the submission's creation timestamp, parsed the same way;
/// 3. the first 4-digit run found in record payloads, then title, then
///    description, treated as a year.
///
/// Bare years expand to January 1, 00:00:00 UTC of that year; all parsing
/// is UTC.
#[must_use]
pub fn resolve_timestamp(submission: &Submission) -> ResolvedTimestamp {
    let timeframe = submission
        .records
        .iter()
        .find(|record| record.kind.eq_ignore_ascii_case(TIMEFRAME_KIND));

    if let Some(record) = timeframe {
        if let Some(millis) = parse_date_text(&record.payload) {
            return ResolvedTimestamp::Resolved(millis);
        }
    }

    if let Some(created_at) = submission.created_at.as_deref() {
        if let Some(millis) = parse_date_text(created_at) {
            return ResolvedTimestamp::Resolved(millis);
        }
    }

    if let Some(millis) = embedded_year_millis(submission) {
        return ResolvedTimestamp::Resolved(millis);
    }

    ResolvedTimestamp::Unresolved
}

/// Derives the timeline point set from raw submissions.
///
/// Submissions without a resolvable timestamp are silently excluded; the
/// caller never sees an error for malformed content.
#[must_use]
pub fn points_from_submissions(submissions: Vec<Submission>) -> Vec<TimelinePoint> {
    let mut points = Vec::with_capacity(submissions.len());
    for submission in submissions {
        match resolve_timestamp(&submission) {
            ResolvedTimestamp::Resolved(millis) => {
                points.push(TimelinePoint::new(millis, Arc::new(submission)));
            }
            ResolvedTimestamp::Unresolved => {
                tracing::debug!(id = %submission.id, "excluding submission without resolvable timestamp");
            }
        }
    }
    points
}

/// Parses a payload as a bare 4-digit year or a general date-time string.
fn parse_date_text(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = trimmed.parse().ok()?;
        return year_start_millis(year);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc).timestamp_millis());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed.and_utc().timestamp_millis());
        }
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }

    None
}

/// Scans record payloads, then title, then description for a 4-digit run.
fn embedded_year_millis(submission: &Submission) -> Option<i64> {
    let record_payloads = submission.records.iter().map(|record| record.payload.as_str());
    let texts = record_payloads.chain([submission.title.as_str(), submission.description.as_str()]);

    for text in texts {
        if let Some(found) = YEAR_RUN.find(text) {
            let year: i32 = found.as_str().parse().ok()?;
            return year_start_millis(year);
        }
    }

    None
}

fn year_start_millis(year: i32) -> Option<i64> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp_millis())
}
