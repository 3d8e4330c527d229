//! Domain model for recurring transaction rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Frequency, Identifiable};
use crate::transaction::TransactionKind;

/// A rule that periodically materializes into a concrete transaction.
///
/// `last_generated` is the only idempotency marker: it is written exactly
/// once per materialized occurrence, by the scheduler's mark-generated
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringRule {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category_id: Uuid,
    #[serde(default)]
    pub description: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    /// Inclusive upper bound; the rule stops generating past this date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_generated: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecurringRule {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category_id: Uuid,
        description: impl Into<String>,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category_id,
            description: description.into(),
            frequency,
            start_date,
            end_date: None,
            last_generated: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Next date the rule would materialize: one frequency step from
    /// `last_generated`, or from `start_date` before the first generation.
    /// `None` signals an unrecognized frequency.
    pub fn next_occurrence(&self) -> Option<NaiveDate> {
        let base = self.last_generated.unwrap_or(self.start_date);
        self.frequency.next_date(base)
    }

    /// Whether the rule should materialize as of `today`. Inactive, not yet
    /// started, and expired rules are never due. A rule that has never
    /// generated is due immediately on or after its start date.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        if !self.is_active {
            return false;
        }
        if today < self.start_date {
            return false;
        }
        if let Some(end) = self.end_date {
            if today > end {
                return false;
            }
        }
        match self.last_generated {
            None => true,
            Some(_) => self
                .next_occurrence()
                .is_some_and(|next| today >= next),
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Identifiable for RecurringRule {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Fleet-wide recurring rollup. Monthly figures cover active rules only,
/// rescaled to their monthly-equivalent amounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecurringStats {
    pub total: usize,
    pub active: usize,
    pub paused: usize,
    pub expenses: usize,
    pub income: usize,
    pub monthly_expenses: f64,
    pub monthly_income: f64,
    pub monthly_net: f64,
}

/// A rule paired with its projected next occurrence, for look-ahead views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingOccurrence {
    pub rule: RecurringRule,
    pub next_occurrence: NaiveDate,
}
