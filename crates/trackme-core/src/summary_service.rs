//! Fleet-wide rollups across budgets, recurring rules, and goals.

use trackme_domain::{Budget, Goal, GoalStats, RecurringRule, RecurringStats, Transaction};

use crate::{
    budget_service::BudgetService, goal_service::GoalService,
    recurring_service::RecurringService,
};

/// Budget counts for the overview card.
#[derive(Debug, Clone, Default)]
pub struct BudgetOverview {
    pub total: usize,
    pub over_budget: usize,
    pub near_limit: usize,
}

/// Combined snapshot across all three record fleets.
#[derive(Debug, Clone)]
pub struct OverviewSummary {
    pub budgets: BudgetOverview,
    pub recurring: RecurringStats,
    pub goals: GoalStats,
}

pub struct SummaryService;

impl SummaryService {
    pub fn overview(
        budgets: &[Budget],
        transactions: &[Transaction],
        rules: &[RecurringRule],
        goals: &[Goal],
    ) -> OverviewSummary {
        let mut overview = BudgetOverview {
            total: budgets.len(),
            ..BudgetOverview::default()
        };
        for entry in BudgetService::utilizations(budgets, transactions) {
            if entry.utilization.is_over_budget {
                overview.over_budget += 1;
            } else if entry.utilization.is_near_limit {
                overview.near_limit += 1;
            }
        }
        OverviewSummary {
            budgets: overview,
            recurring: RecurringService::stats(rules),
            goals: GoalService::stats(goals),
        }
    }
}
