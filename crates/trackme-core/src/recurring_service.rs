//! Scheduling, generation, and rollups for recurring transaction rules.

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};
use uuid::Uuid;

use trackme_domain::{
    RecurringRule, RecurringStats, Transaction, TransactionKind, UpcomingOccurrence,
};

use crate::{store::TransactionSink, time::Clock, CoreError};

/// Suffix marking transactions materialized from a recurring rule.
const RECURRING_SUFFIX: &str = "(Recurring)";

/// One successful materialization produced by a generation pass.
#[derive(Debug, Clone)]
pub struct GeneratedOccurrence {
    pub rule_id: Uuid,
    pub transaction_id: Uuid,
    pub date: NaiveDate,
}

/// A rule the pass skipped after a failure. The rest of the pass continues.
#[derive(Debug)]
pub struct GenerationFailure {
    pub rule_id: Uuid,
    pub error: CoreError,
}

/// Outcome of one generation pass over the rule set.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedOccurrence>,
    pub failed: Vec<GenerationFailure>,
}

/// Stateless scheduling utilities over caller-owned rule collections.
pub struct RecurringService;

impl RecurringService {
    pub fn next_occurrence(rule: &RecurringRule) -> Option<NaiveDate> {
        rule.next_occurrence()
    }

    pub fn is_due(rule: &RecurringRule, today: NaiveDate) -> bool {
        rule.is_due(today)
    }

    /// Rules due for materialization as of `today`. Evaluated fresh on every
    /// pass; there is no persisted pending queue.
    pub fn select_due(rules: &[RecurringRule], today: NaiveDate) -> Vec<&RecurringRule> {
        rules.iter().filter(|rule| rule.is_due(today)).collect()
    }

    /// Stamps `last_generated`, conditional on the value the caller observed
    /// when it selected the rule. A mismatch means another pass got there
    /// first; the rule is left untouched and the caller must not append a
    /// transaction for this occurrence.
    pub fn mark_generated(
        rule: &mut RecurringRule,
        expected_last: Option<NaiveDate>,
        clock: &dyn Clock,
    ) -> Result<(), CoreError> {
        if rule.last_generated != expected_last {
            return Err(CoreError::StaleGeneration(rule.id));
        }
        rule.last_generated = Some(clock.today());
        rule.touch(clock.now());
        Ok(())
    }

    /// Flips a rule's active toggle by id.
    pub fn toggle_active(
        rules: &mut [RecurringRule],
        id: Uuid,
        clock: &dyn Clock,
    ) -> Result<bool, CoreError> {
        let rule = rules
            .iter_mut()
            .find(|rule| rule.id == id)
            .ok_or(CoreError::RuleNotFound(id))?;
        rule.is_active = !rule.is_active;
        rule.touch(clock.now());
        Ok(rule.is_active)
    }

    /// Runs the generation protocol: for each due rule, in input order,
    /// synthesize one transaction dated today, append it via the sink, then
    /// mark the rule generated. Processing is sequential per rule so no rule
    /// can have two transactions generated for the same due occurrence. A
    /// failing rule is recorded and skipped without aborting the pass.
    pub fn run_generation(
        rules: &mut [RecurringRule],
        sink: &mut dyn TransactionSink,
        clock: &dyn Clock,
    ) -> GenerationReport {
        let today = clock.today();
        let mut report = GenerationReport::default();

        for rule in rules.iter_mut() {
            if !rule.is_due(today) {
                continue;
            }
            let observed_last = rule.last_generated;
            let transaction = materialize(rule, today);
            let transaction_id = transaction.id;

            if let Err(error) = sink.append(transaction) {
                warn!("rule {}: transaction append failed: {error}", rule.id);
                report.failed.push(GenerationFailure {
                    rule_id: rule.id,
                    error,
                });
                continue;
            }
            match Self::mark_generated(rule, observed_last, clock) {
                Ok(()) => {
                    debug!("rule {}: materialized occurrence for {today}", rule.id);
                    report.generated.push(GeneratedOccurrence {
                        rule_id: rule.id,
                        transaction_id,
                        date: today,
                    });
                }
                Err(error) => {
                    warn!("rule {}: mark-generated failed: {error}", rule.id);
                    report.failed.push(GenerationFailure {
                        rule_id: rule.id,
                        error,
                    });
                }
            }
        }
        report
    }

    /// Active rules whose next occurrence falls within
    /// `[today, today + window_days]`. Rules with an undefined next
    /// occurrence are excluded.
    pub fn upcoming(
        rules: &[RecurringRule],
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingOccurrence> {
        let horizon = today + Duration::days(window_days);
        rules
            .iter()
            .filter(|rule| rule.is_active)
            .filter_map(|rule| {
                let next_occurrence = rule.next_occurrence()?;
                if next_occurrence < today || next_occurrence > horizon {
                    return None;
                }
                Some(UpcomingOccurrence {
                    rule: rule.clone(),
                    next_occurrence,
                })
            })
            .collect()
    }

    /// Counts and monthly-equivalent totals over the rule set.
    pub fn stats(rules: &[RecurringRule]) -> RecurringStats {
        let mut stats = RecurringStats {
            total: rules.len(),
            ..RecurringStats::default()
        };
        for rule in rules {
            if rule.is_active {
                stats.active += 1;
            } else {
                stats.paused += 1;
            }
            match rule.kind {
                TransactionKind::Expense => stats.expenses += 1,
                TransactionKind::Income => stats.income += 1,
            }
            if !rule.is_active {
                continue;
            }
            let monthly = rule.frequency.monthly_equivalent(rule.amount);
            match rule.kind {
                TransactionKind::Expense => stats.monthly_expenses += monthly,
                TransactionKind::Income => stats.monthly_income += monthly,
            }
        }
        stats.monthly_net = stats.monthly_income - stats.monthly_expenses;
        stats
    }
}

fn materialize(rule: &RecurringRule, date: NaiveDate) -> Transaction {
    let description = if rule.description.is_empty() {
        RECURRING_SUFFIX.to_string()
    } else {
        format!("{} {RECURRING_SUFFIX}", rule.description)
    };
    Transaction::new(rule.kind, rule.amount, rule.category_id, date).with_description(description)
}
