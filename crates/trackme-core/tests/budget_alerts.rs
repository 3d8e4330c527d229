use chrono::NaiveDate;
use uuid::Uuid;

use trackme_core::BudgetService;
use trackme_domain::{AlertKind, Budget, BudgetPeriod, BudgetScope, Transaction, TransactionKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn food_budget_near_limit_scenario() {
    let food = Uuid::new_v4();
    let budget = Budget::new(
        BudgetScope::Category(food),
        5000.0,
        BudgetPeriod::Monthly,
        date(2024, 6, 1),
    );

    let transactions = vec![
        Transaction::new(TransactionKind::Expense, 1500.0, food, date(2024, 6, 2)),
        Transaction::new(TransactionKind::Expense, 1700.0, food, date(2024, 6, 12)),
        Transaction::new(TransactionKind::Expense, 1000.0, food, date(2024, 6, 25)),
        Transaction::new(TransactionKind::Expense, 1000.0, food, date(2024, 5, 20)),
    ];

    let utilization = BudgetService::utilization(Some(&budget), &transactions);
    assert_eq!(utilization.spent, 4200.0);
    assert_eq!(utilization.remaining, 800.0);
    assert!((utilization.percentage - 84.0).abs() < 1e-9);
    assert!(!utilization.is_over_budget);
    assert!(utilization.is_near_limit);
    assert_eq!(utilization.expense_count, 3);
}

#[test]
fn adding_a_matching_expense_never_decreases_spent() {
    let food = Uuid::new_v4();
    let budget = Budget::new(
        BudgetScope::Category(food),
        5000.0,
        BudgetPeriod::Monthly,
        date(2024, 6, 1),
    );
    let mut transactions = vec![Transaction::new(
        TransactionKind::Expense,
        100.0,
        food,
        date(2024, 6, 2),
    )];

    let before = BudgetService::utilization(Some(&budget), &transactions);
    transactions.push(Transaction::new(
        TransactionKind::Expense,
        50.0,
        food,
        date(2024, 6, 3),
    ));
    let after = BudgetService::utilization(Some(&budget), &transactions);

    assert!(after.spent >= before.spent);
    assert!((after.percentage - after.spent / 5000.0 * 100.0).abs() < 1e-9);
}

#[test]
fn alerts_follow_budget_order_with_one_alert_per_budget() {
    let food = Uuid::new_v4();
    let transport = Uuid::new_v4();
    let leisure = Uuid::new_v4();
    let start = date(2024, 6, 1);

    let over = Budget::new(BudgetScope::Category(food), 100.0, BudgetPeriod::Monthly, start);
    let near = Budget::new(
        BudgetScope::Category(transport),
        100.0,
        BudgetPeriod::Monthly,
        start,
    );
    let quiet = Budget::new(
        BudgetScope::Category(leisure),
        100.0,
        BudgetPeriod::Monthly,
        start,
    );
    let budgets = vec![over.clone(), near.clone(), quiet];

    let transactions = vec![
        Transaction::new(TransactionKind::Expense, 150.0, food, date(2024, 6, 5)),
        Transaction::new(TransactionKind::Expense, 85.0, transport, date(2024, 6, 5)),
        Transaction::new(TransactionKind::Expense, 10.0, leisure, date(2024, 6, 5)),
    ];

    let alerts = BudgetService::alerts(&budgets, &transactions);
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].budget_id, over.id);
    assert_eq!(alerts[0].kind, AlertKind::Over);
    assert_eq!(alerts[0].spent, 150.0);
    assert_eq!(alerts[0].budget_amount, 100.0);
    assert_eq!(alerts[1].budget_id, near.id);
    assert_eq!(alerts[1].kind, AlertKind::Near);
}

#[test]
fn overall_and_category_budgets_alert_independently() {
    let food = Uuid::new_v4();
    let start = date(2024, 6, 1);
    let overall = Budget::new(BudgetScope::Overall, 200.0, BudgetPeriod::Monthly, start);
    let per_category = Budget::new(
        BudgetScope::Category(food),
        1000.0,
        BudgetPeriod::Monthly,
        start,
    );

    let transactions = vec![
        Transaction::new(TransactionKind::Expense, 180.0, food, date(2024, 6, 4)),
        Transaction::new(
            TransactionKind::Expense,
            60.0,
            Uuid::new_v4(),
            date(2024, 6, 6),
        ),
    ];

    let alerts = BudgetService::alerts(&[overall.clone(), per_category], &transactions);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].budget_id, overall.id);
    assert_eq!(alerts[0].kind, AlertKind::Over);
    assert_eq!(alerts[0].spent, 240.0);
}
