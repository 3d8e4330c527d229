use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("budget not found: {0}")]
    BudgetNotFound(Uuid),
    #[error("recurring rule not found: {0}")]
    RuleNotFound(Uuid),
    #[error("goal not found: {0}")]
    GoalNotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("stale last-generated marker for rule {0}")]
    StaleGeneration(Uuid),
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("storage failure: {0}")]
    Storage(String),
}
