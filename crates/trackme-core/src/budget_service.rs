//! Stateless budget utilization and alerting over transaction snapshots.

use chrono::NaiveDate;

use trackme_domain::{
    AlertKind, Budget, BudgetAlert, BudgetPeriod, BudgetScope, BudgetUtilization, Transaction,
    TransactionKind,
};

/// A budget paired with its derived utilization.
#[derive(Debug, Clone)]
pub struct BudgetUtilizationEntry {
    pub budget: Budget,
    pub utilization: BudgetUtilization,
}

/// Stateless budgeting utilities that operate over caller-owned collections.
pub struct BudgetService;

impl BudgetService {
    /// Derives spend-against-budget figures from the transaction snapshot.
    ///
    /// Counts expense-kind transactions whose date falls in the budget's
    /// period-instance and whose category matches the budget's scope. An
    /// absent budget degrades to a zeroed utilization so callers can probe
    /// budgets that may not exist.
    pub fn utilization(budget: Option<&Budget>, transactions: &[Transaction]) -> BudgetUtilization {
        let Some(budget) = budget else {
            return BudgetUtilization::zeroed();
        };

        let mut spent = 0.0;
        let mut expense_count = 0;
        for txn in transactions {
            if txn.kind != TransactionKind::Expense {
                continue;
            }
            if !budget.covers(txn.date) || !budget.matches_category(txn.category_id) {
                continue;
            }
            spent += txn.amount;
            expense_count += 1;
        }

        let percentage = if budget.amount > 0.0 {
            spent / budget.amount * 100.0
        } else {
            0.0
        };
        let is_over_budget = spent > budget.amount;
        BudgetUtilization {
            budget_amount: budget.amount,
            spent,
            remaining: budget.amount - spent,
            percentage,
            is_over_budget,
            is_near_limit: percentage >= budget.alert_threshold && !is_over_budget,
            expense_count,
        }
    }

    /// Utilization for every budget, preserving input order.
    pub fn utilizations(
        budgets: &[Budget],
        transactions: &[Transaction],
    ) -> Vec<BudgetUtilizationEntry> {
        budgets
            .iter()
            .map(|budget| BudgetUtilizationEntry {
                budget: budget.clone(),
                utilization: Self::utilization(Some(budget), transactions),
            })
            .collect()
    }

    /// One alert per budget that is over its amount or at its threshold,
    /// in budget order. Over takes precedence over near.
    pub fn alerts(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetAlert> {
        budgets
            .iter()
            .filter_map(|budget| {
                let utilization = Self::utilization(Some(budget), transactions);
                let kind = if utilization.is_over_budget {
                    AlertKind::Over
                } else if utilization.is_near_limit {
                    AlertKind::Near
                } else {
                    return None;
                };
                Some(BudgetAlert {
                    budget_id: budget.id,
                    scope: budget.scope,
                    kind,
                    percentage: utilization.percentage,
                    spent: utilization.spent,
                    budget_amount: budget.amount,
                })
            })
            .collect()
    }

    /// Finds the budget for a scope and period whose period-instance contains
    /// `today`. Used by callers to probe for the current month or year before
    /// creating a new budget.
    pub fn for_scope<'a>(
        budgets: &'a [Budget],
        scope: BudgetScope,
        period: BudgetPeriod,
        today: NaiveDate,
    ) -> Option<&'a Budget> {
        budgets.iter().find(|budget| {
            budget.scope == scope && budget.period == period && budget.covers(today)
        })
    }
}
