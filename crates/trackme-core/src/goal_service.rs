//! Goal progress derivation and completion-state transitions.

use chrono::NaiveDate;
use uuid::Uuid;

use trackme_domain::{Goal, GoalProgress, GoalStats, UpcomingDeadline};

use crate::{time::Clock, CoreError};

/// Stateless goal utilities over caller-owned collections.
pub struct GoalService;

impl GoalService {
    /// Percentage (clamped at 100), remaining amount (clamped at 0), and
    /// effective completion. A zero target yields a neutral result.
    pub fn progress(goal: &Goal) -> GoalProgress {
        if goal.target_amount <= 0.0 {
            return GoalProgress {
                percentage: 0.0,
                remaining: 0.0,
                is_completed: false,
            };
        }
        GoalProgress {
            percentage: (goal.current_amount / goal.target_amount * 100.0).min(100.0),
            remaining: (goal.target_amount - goal.current_amount).max(0.0),
            is_completed: goal.is_completed || goal.target_reached(),
        }
    }

    /// Signed days to the deadline; negative means overdue, `None` means the
    /// goal has no deadline.
    pub fn days_until_deadline(goal: &Goal, today: NaiveDate) -> Option<i64> {
        goal.deadline.map(|deadline| (deadline - today).num_days())
    }

    /// Monthly contribution needed to hit the target by the deadline. `None`
    /// without a deadline or once it has passed; negative when overfunded.
    pub fn required_monthly_savings(goal: &Goal, today: NaiveDate) -> Option<f64> {
        let days = Self::days_until_deadline(goal, today)?;
        if days <= 0 {
            return None;
        }
        let remaining = goal.target_amount - goal.current_amount;
        Some(remaining / (days as f64 / 30.0))
    }

    /// Adds to the saved amount. Overfunding is permitted; the total is never
    /// clamped to the target.
    pub fn contribute(goal: &mut Goal, amount: f64, clock: &dyn Clock) -> Result<(), CoreError> {
        if amount <= 0.0 {
            return Err(CoreError::Validation(
                "contribution amount must be positive".into(),
            ));
        }
        goal.current_amount += amount;
        Self::apply_completion_transition(goal, clock);
        goal.touch(clock.now());
        Ok(())
    }

    /// Id-addressed contribution returning the updated record for the caller
    /// to persist.
    pub fn contribute_to(
        goals: &mut [Goal],
        id: Uuid,
        amount: f64,
        clock: &dyn Clock,
    ) -> Result<Goal, CoreError> {
        let goal = goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(CoreError::GoalNotFound(id))?;
        Self::contribute(goal, amount, clock)?;
        Ok(goal.clone())
    }

    /// Direct edit of the amounts. Unlike contributions this can move the
    /// saved amount downward, so the completion transition runs both ways:
    /// reaching the target completes the goal, dropping below it clears
    /// `is_completed` and `completed_at`.
    pub fn update_amounts(
        goal: &mut Goal,
        target_amount: Option<f64>,
        current_amount: Option<f64>,
        clock: &dyn Clock,
    ) -> Result<(), CoreError> {
        if let Some(target) = target_amount {
            if target <= 0.0 {
                return Err(CoreError::Validation(
                    "target amount must be positive".into(),
                ));
            }
            goal.target_amount = target;
        }
        if let Some(current) = current_amount {
            if current < 0.0 {
                return Err(CoreError::Validation(
                    "current amount must not be negative".into(),
                ));
            }
            goal.current_amount = current;
        }
        Self::apply_completion_transition(goal, clock);
        goal.touch(clock.now());
        Ok(())
    }

    /// Totals and overall progress across the goal set.
    pub fn stats(goals: &[Goal]) -> GoalStats {
        let mut stats = GoalStats {
            total: goals.len(),
            ..GoalStats::default()
        };
        for goal in goals {
            if goal.is_completed {
                stats.completed += 1;
            } else {
                stats.active += 1;
            }
            stats.total_target += goal.target_amount;
            stats.total_saved += goal.current_amount;
        }
        stats.total_remaining = stats.total_target - stats.total_saved;
        stats.overall_progress = if stats.total_target > 0.0 {
            stats.total_saved / stats.total_target * 100.0
        } else {
            0.0
        };
        stats
    }

    /// Incomplete goals whose deadline is within `window_days`, ascending by
    /// days left. Overdue goals are excluded.
    pub fn upcoming_deadlines(
        goals: &[Goal],
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingDeadline> {
        let mut upcoming: Vec<UpcomingDeadline> = goals
            .iter()
            .filter(|goal| !goal.is_completed)
            .filter_map(|goal| {
                let days_until = Self::days_until_deadline(goal, today)?;
                if days_until < 0 || days_until > window_days {
                    return None;
                }
                Some(UpcomingDeadline {
                    goal: goal.clone(),
                    days_until,
                })
            })
            .collect();
        upcoming.sort_by_key(|entry| entry.days_until);
        upcoming
    }

    fn apply_completion_transition(goal: &mut Goal, clock: &dyn Clock) {
        if !goal.is_completed && goal.target_reached() {
            goal.is_completed = true;
            goal.completed_at = Some(clock.now());
        } else if goal.is_completed && !goal.target_reached() {
            goal.is_completed = false;
            goal.completed_at = None;
        }
    }
}
