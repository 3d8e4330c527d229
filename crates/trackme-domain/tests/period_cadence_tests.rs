use chrono::NaiveDate;

use trackme_domain::{BudgetPeriod, Frequency};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn monthly_period_requires_same_month_and_year() {
    let period = BudgetPeriod::Monthly;
    assert!(period.same_period(date(2024, 6, 1), date(2024, 6, 30)));
    assert!(!period.same_period(date(2024, 6, 1), date(2024, 7, 1)));
    assert!(!period.same_period(date(2024, 6, 1), date(2023, 6, 15)));
}

#[test]
fn yearly_period_requires_same_year() {
    let period = BudgetPeriod::Yearly;
    assert!(period.same_period(date(2024, 1, 1), date(2024, 12, 31)));
    assert!(!period.same_period(date(2024, 1, 1), date(2025, 1, 1)));
}

#[test]
fn unrecognized_period_never_matches() {
    let period: BudgetPeriod = serde_json::from_str("\"quarterly\"").expect("deserialize");
    assert_eq!(period, BudgetPeriod::Unknown);
    assert!(!period.same_period(date(2024, 6, 1), date(2024, 6, 1)));
}

#[test]
fn daily_and_weekly_steps_are_linear() {
    assert_eq!(
        Frequency::Daily.next_date(date(2024, 3, 1)),
        Some(date(2024, 3, 2))
    );
    assert_eq!(
        Frequency::Weekly.next_date(date(2024, 3, 1)),
        Some(date(2024, 3, 8))
    );
}

#[test]
fn monthly_step_clamps_to_month_end() {
    assert_eq!(
        Frequency::Monthly.next_date(date(2024, 1, 31)),
        Some(date(2024, 2, 29))
    );
    assert_eq!(
        Frequency::Monthly.next_date(date(2025, 1, 31)),
        Some(date(2025, 2, 28))
    );
    assert_eq!(
        Frequency::Monthly.next_date(date(2024, 12, 15)),
        Some(date(2025, 1, 15))
    );
}

#[test]
fn yearly_step_clamps_leap_day() {
    assert_eq!(
        Frequency::Yearly.next_date(date(2024, 2, 29)),
        Some(date(2025, 2, 28))
    );
    assert_eq!(
        Frequency::Yearly.next_date(date(2024, 3, 1)),
        Some(date(2025, 3, 1))
    );
}

#[test]
fn unknown_frequency_yields_no_date() {
    let frequency: Frequency = serde_json::from_str("\"biweekly\"").expect("deserialize");
    assert_eq!(frequency, Frequency::Unknown);
    assert_eq!(frequency.next_date(date(2024, 1, 1)), None);
}

#[test]
fn monthly_equivalent_normalization() {
    assert_eq!(Frequency::Daily.monthly_equivalent(10.0), 300.0);
    assert_eq!(Frequency::Weekly.monthly_equivalent(700.0), 2800.0);
    assert_eq!(Frequency::Monthly.monthly_equivalent(50.0), 50.0);
    assert_eq!(Frequency::Yearly.monthly_equivalent(120_000.0), 10_000.0);
    assert_eq!(Frequency::Unknown.monthly_equivalent(100.0), 0.0);
}
