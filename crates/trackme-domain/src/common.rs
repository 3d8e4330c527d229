//! Shared traits, period resolution, and cadence arithmetic.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Alert threshold percentage applied to budgets created without one.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 80.0;

/// Default look-ahead window, in days, for upcoming occurrences and deadlines.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 30;

/// Exposes a stable identifier for engine records.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Budgeting cadences a budget can be anchored to.
///
/// `Unknown` absorbs unrecognized wire values so a malformed budget degrades
/// to inertness instead of failing a whole derivation pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
    #[serde(other)]
    Unknown,
}

impl BudgetPeriod {
    /// Returns whether `candidate` falls in the same period-instance as
    /// `reference`: same month and year for `Monthly`, same year for
    /// `Yearly`. `Unknown` never matches.
    pub fn same_period(self, reference: NaiveDate, candidate: NaiveDate) -> bool {
        match self {
            BudgetPeriod::Monthly => {
                reference.year() == candidate.year() && reference.month() == candidate.month()
            }
            BudgetPeriod::Yearly => reference.year() == candidate.year(),
            BudgetPeriod::Unknown => false,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Yearly => "Yearly",
            BudgetPeriod::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Cadence of a recurring rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    #[serde(other)]
    Unknown,
}

impl Frequency {
    /// Steps `from` forward by one unit of the cadence. Month and year steps
    /// clamp the day to the target month's length. `Unknown` yields `None`.
    pub fn next_date(self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            Frequency::Daily => Some(from + Duration::days(1)),
            Frequency::Weekly => Some(from + Duration::days(7)),
            Frequency::Monthly => Some(step_month(from)),
            Frequency::Yearly => Some(step_year(from)),
            Frequency::Unknown => None,
        }
    }

    /// Rescales a per-occurrence amount to a per-month figure for aggregate
    /// reporting. `Unknown` contributes nothing.
    pub fn monthly_equivalent(self, amount: f64) -> f64 {
        match self {
            Frequency::Daily => amount * 30.0,
            Frequency::Weekly => amount * 4.0,
            Frequency::Monthly => amount,
            Frequency::Yearly => amount / 12.0,
            Frequency::Unknown => 0.0,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
            Frequency::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

fn step_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn step_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_of_next - Duration::days(1)).day()
}
