//! Budget definitions plus the derived utilization and alert shapes.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::common::{BudgetPeriod, Identifiable, DEFAULT_ALERT_THRESHOLD};

/// Reserved scope string recognized on the wire.
pub const OVERALL_SCOPE: &str = "overall";

/// A spending target for one category (or all of them) anchored to the
/// period-instance containing `start_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub scope: BudgetScope,
    pub amount: f64,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    /// Percentage (1-100) at which the near-limit alert fires.
    pub alert_threshold: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(scope: BudgetScope, amount: f64, period: BudgetPeriod, start_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            scope,
            amount,
            period,
            start_date,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_alert_threshold(mut self, threshold: f64) -> Self {
        self.alert_threshold = threshold;
        self
    }

    /// Returns whether `date` falls inside this budget's period-instance.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.period.same_period(self.start_date, date)
    }

    /// Returns whether a transaction in `category_id` counts against this
    /// budget. An overall budget matches every category.
    pub fn matches_category(&self, category_id: Uuid) -> bool {
        match self.scope {
            BudgetScope::Overall => true,
            BudgetScope::Category(id) => id == category_id,
        }
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// What a budget applies to: one category, or all categories combined.
///
/// Serialized as the reserved string `"overall"` or a category uuid; this is
/// the only place the sentinel is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetScope {
    Overall,
    Category(Uuid),
}

impl Serialize for BudgetScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BudgetScope::Overall => serializer.serialize_str(OVERALL_SCOPE),
            BudgetScope::Category(id) => id.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BudgetScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == OVERALL_SCOPE {
            return Ok(BudgetScope::Overall);
        }
        Uuid::parse_str(&raw).map(BudgetScope::Category).map_err(|_| {
            de::Error::invalid_value(
                de::Unexpected::Str(&raw),
                &"\"overall\" or a category uuid",
            )
        })
    }
}

impl fmt::Display for BudgetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetScope::Overall => f.write_str(OVERALL_SCOPE),
            BudgetScope::Category(id) => write!(f, "{id}"),
        }
    }
}

/// Derived spend-against-budget figures. Never persisted; recomputed from the
/// current transaction snapshot on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetUtilization {
    pub budget_amount: f64,
    pub spent: f64,
    /// May be negative once the budget is exceeded.
    pub remaining: f64,
    /// Defined as 0 when the budgeted amount is 0.
    pub percentage: f64,
    pub is_over_budget: bool,
    pub is_near_limit: bool,
    pub expense_count: usize,
}

impl BudgetUtilization {
    /// Neutral result for probing a budget that does not exist.
    pub fn zeroed() -> Self {
        Self {
            budget_amount: 0.0,
            spent: 0.0,
            remaining: 0.0,
            percentage: 0.0,
            is_over_budget: false,
            is_near_limit: false,
            expense_count: 0,
        }
    }
}

/// One alert per budget that is over its amount or at its threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetAlert {
    pub budget_id: Uuid,
    pub scope: BudgetScope,
    pub kind: AlertKind,
    pub percentage: f64,
    pub spent: f64,
    pub budget_amount: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Over,
    Near,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertKind::Over => "Over",
            AlertKind::Near => "Near",
        };
        f.write_str(label)
    }
}
