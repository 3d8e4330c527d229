//! Domain model for savings goals.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

pub const DEFAULT_GOAL_CATEGORY: &str = "other";
pub const DEFAULT_GOAL_ICON: &str = "\u{1F3AF}";
pub const DEFAULT_GOAL_COLOR: &str = "#6366f1";

/// A savings goal. `is_completed` is derived from the amounts but persisted,
/// and the transition is two-way: editing amounts downward un-completes the
/// goal and clears `completed_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Free-form tag ("emergency", "vacation", ...); not an expense category.
    pub category: String,
    pub icon: String,
    pub color: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            deadline: None,
            category: DEFAULT_GOAL_CATEGORY.to_string(),
            icon: DEFAULT_GOAL_ICON.to_string(),
            color: DEFAULT_GOAL_COLOR.to_string(),
            is_completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Seeds the starting amount for goals created with prior savings.
    pub fn with_initial_amount(mut self, amount: f64) -> Self {
        self.current_amount = amount;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn target_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Identifiable for Goal {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Derived progress figures, clamped for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalProgress {
    /// Capped at 100 even when overfunded; 0 when the target is 0.
    pub percentage: f64,
    /// Never negative.
    pub remaining: f64,
    pub is_completed: bool,
}

/// Fleet-wide goal rollup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub total_target: f64,
    pub total_saved: f64,
    pub total_remaining: f64,
    pub overall_progress: f64,
}

/// An incomplete goal paired with the days left to its deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingDeadline {
    pub goal: Goal,
    pub days_until: i64,
}
