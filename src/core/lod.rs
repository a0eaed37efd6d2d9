use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::domain::{MILLIS_PER_DAY, MILLIS_PER_YEAR};

const MILLIS_PER_MONTH: f64 = 30.0 * MILLIS_PER_DAY;

/// Minimum pixels per year before yearly ticks become legible.
const YEAR_SPACING_MIN_PX: f64 = 120.0;
/// Minimum pixels per month before monthly ticks become legible.
const MONTH_SPACING_MIN_PX: f64 = 100.0;

/// Hard cap on enumerated ticks per pass; ranges denser than this are
/// clipped rather than allowed to allocate unboundedly.
const MAX_TICKS_PER_PASS: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickUnit {
    Year,
    Month,
    Day,
}

/// One positioned, formatted tick on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub time_millis: f64,
    pub label: String,
}

/// The tick granularity chosen for the current zoom density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSpec {
    pub unit: TickUnit,
    pub interval_millis: f64,
}

/// Chooses the coarsest tick unit whose pixel spacing stays legible.
///
/// Evaluated coarsest-first so a zoomed-out view never selects a unit that
/// would crowd labels. The spacing thresholds are empirical; the precedence
/// order is the contract.
#[must_use]
pub fn select_tick_spec(millis_per_pixel: f64) -> TickSpec {
    debug_assert!(
        millis_per_pixel.is_finite() && millis_per_pixel > 0.0,
        "millis_per_pixel must be finite and positive, got {millis_per_pixel}"
    );

    let px_per_year = MILLIS_PER_YEAR / millis_per_pixel;
    let px_per_month = MILLIS_PER_MONTH / millis_per_pixel;

    if px_per_year > YEAR_SPACING_MIN_PX {
        TickSpec {
            unit: TickUnit::Year,
            interval_millis: MILLIS_PER_YEAR,
        }
    } else if px_per_month > MONTH_SPACING_MIN_PX {
        TickSpec {
            unit: TickUnit::Month,
            interval_millis: MILLIS_PER_MONTH,
        }
    } else {
        TickSpec {
            unit: TickUnit::Day,
            interval_millis: MILLIS_PER_DAY,
        }
    }
}

impl TickSpec {
    /// Formats a tick label for the given time, in UTC.
    #[must_use]
    pub fn label(&self, time_millis: f64) -> String {
        let Some(dt) = datetime_from_millis(time_millis) else {
            return String::new();
        };

        match self.unit {
            TickUnit::Year => dt.format("%Y").to_string(),
            TickUnit::Month => dt.format("%b %Y").to_string(),
            TickUnit::Day => dt.format("%b %d, %Y").to_string(),
        }
    }

    /// Enumerates calendar-aligned ticks covering `[start, end]`.
    ///
    /// Ticks land on year/month/day boundaries rather than at fixed
    /// millisecond strides, so labels always name a real calendar unit.
    #[must_use]
    pub fn ticks_between(&self, start_millis: f64, end_millis: f64) -> Vec<Tick> {
        if !(start_millis.is_finite() && end_millis.is_finite()) || end_millis < start_millis {
            return Vec::new();
        }
        let Some(start) = datetime_from_millis(start_millis) else {
            return Vec::new();
        };

        let mut ticks = Vec::new();
        let mut cursor = match self.unit {
            TickUnit::Year => NaiveDate::from_ymd_opt(start.year(), 1, 1),
            TickUnit::Month => NaiveDate::from_ymd_opt(start.year(), start.month(), 1),
            TickUnit::Day => Some(start.date_naive()),
        };

        while let Some(date) = cursor {
            let millis = date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp_millis());
            let Some(millis) = millis else { break };
            let time_millis = millis as f64;
            if time_millis > end_millis || ticks.len() >= MAX_TICKS_PER_PASS {
                break;
            }
            if time_millis >= start_millis {
                ticks.push(Tick {
                    time_millis,
                    label: self.label(time_millis),
                });
            }
            cursor = match self.unit {
                TickUnit::Year => NaiveDate::from_ymd_opt(date.year() + 1, 1, 1),
                TickUnit::Month => next_month_start(date),
                TickUnit::Day => date.succ_opt(),
            };
        }

        ticks
    }
}

fn next_month_start(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

fn datetime_from_millis(time_millis: f64) -> Option<DateTime<Utc>> {
    if !time_millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(time_millis.round() as i64)
}
