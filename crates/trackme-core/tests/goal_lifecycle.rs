use chrono::NaiveDate;

use trackme_core::{FixedClock, GoalService};
use trackme_domain::Goal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn contributions_accumulate_until_completion() {
    let mut goal = Goal::new("Emergency fund", 1000.0).with_deadline(date(2024, 12, 31));
    let clock = FixedClock::on_date(date(2024, 6, 1));

    GoalService::contribute(&mut goal, 400.0, &clock).expect("contribute");
    GoalService::contribute(&mut goal, 350.0, &clock).expect("contribute");
    assert!(!goal.is_completed);

    let progress = GoalService::progress(&goal);
    assert!((progress.percentage - 75.0).abs() < 1e-9);
    assert_eq!(progress.remaining, 250.0);

    GoalService::contribute(&mut goal, 250.0, &clock).expect("contribute");
    assert!(goal.is_completed);
    assert_eq!(goal.completed_at, Some(clock.0));
    assert_eq!(goal.current_amount, 1000.0);
}

#[test]
fn editing_amounts_down_uncompletes_the_goal() {
    let mut goal = Goal::new("Car", 1000.0).with_initial_amount(1000.0);
    let clock = FixedClock::on_date(date(2024, 6, 1));

    // Stored flag catches up with the seeded amounts on the first edit.
    GoalService::update_amounts(&mut goal, None, None, &clock).expect("refresh");
    assert!(goal.is_completed);

    GoalService::update_amounts(&mut goal, None, Some(500.0), &clock).expect("edit down");
    assert!(!goal.is_completed);
    assert!(goal.completed_at.is_none());
    assert!(!GoalService::progress(&goal).is_completed);
}

#[test]
fn raising_the_target_uncompletes_a_finished_goal() {
    let mut goal = Goal::new("Upgrade", 500.0);
    let clock = FixedClock::on_date(date(2024, 6, 1));
    GoalService::contribute(&mut goal, 500.0, &clock).expect("contribute");
    assert!(goal.is_completed);

    GoalService::update_amounts(&mut goal, Some(800.0), None, &clock).expect("raise target");
    assert!(!goal.is_completed);
    assert_eq!(GoalService::progress(&goal).remaining, 300.0);
}

#[test]
fn pace_tightens_as_the_deadline_approaches() {
    let goal = Goal::new("Trip", 3000.0).with_deadline(date(2024, 9, 1));

    let early = GoalService::required_monthly_savings(&goal, date(2024, 6, 3)).expect("early");
    let late = GoalService::required_monthly_savings(&goal, date(2024, 8, 2)).expect("late");
    assert!(late > early);

    let overfunded = Goal::new("Trip", 3000.0)
        .with_initial_amount(3500.0)
        .with_deadline(date(2024, 9, 1));
    let pace = GoalService::required_monthly_savings(&overfunded, date(2024, 6, 3));
    assert!(pace.expect("pace") < 0.0);
}
