//! Billing scenarios for September 2020 (30 days) and August 2020 (31 days)
//! at 3000 cents per user-month.

use chrono::NaiveDate;
use monthly_charge::{
    ProrationCalculator,
    billing::{Month, Subscription, User},
    monthly_charge,
};

const PRICE: u64 = 3000;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date literal")
}

fn alice() -> User {
    User::new(1, "Alice", date("2019-01-01")).with_customer_id(1)
}

fn bob() -> User {
    User::new(2, "Bob", date("2019-01-01")).with_customer_id(1)
}

fn subscription() -> Subscription {
    Subscription::new(PRICE).with_id(1).with_customer_id(1)
}

#[test]
fn test_null_subscription_charges_nothing() {
    assert_eq!(monthly_charge("2020-09", None, &[alice(), bob()]).unwrap(), 0);
}

#[test]
fn test_no_users_charges_nothing() {
    assert_eq!(monthly_charge("2020-09", Some(&subscription()), &[]).unwrap(), 0);
}

#[test]
fn test_one_full_month_user() {
    assert_eq!(monthly_charge("2020-09", Some(&subscription()), &[alice()]).unwrap(), 3000);
}

#[test]
fn test_two_full_month_users() {
    assert_eq!(monthly_charge("2020-09", Some(&subscription()), &[alice(), bob()]).unwrap(), 6000);
}

#[test]
fn test_full_month_and_deactivated_midmonth_thirty_days() {
    let users = [alice(), bob().with_deactivated_on(date("2020-09-15"))];
    assert_eq!(monthly_charge("2020-09", Some(&subscription()), &users).unwrap(), 4500);
}

#[test]
fn test_halves_cover_thirty_day_month_once() {
    let users = [
        User::new(1, "Alice", date("2020-09-16")),
        bob().with_deactivated_on(date("2020-09-15")),
    ];
    assert_eq!(monthly_charge("2020-09", Some(&subscription()), &users).unwrap(), 3000);
}

#[test]
fn test_full_month_and_deactivated_midmonth_thirty_one_days() {
    let users = [alice(), bob().with_deactivated_on(date("2020-08-15"))];
    assert_eq!(monthly_charge("2020-08", Some(&subscription()), &users).unwrap(), 4455);
}

#[test]
fn test_halves_cover_thirty_one_day_month_without_rounding_creep() {
    let users = [
        User::new(1, "Alice", date("2020-08-16")),
        bob().with_deactivated_on(date("2020-08-15")),
    ];
    let month = Month::new(2020, 8).unwrap();
    let breakdown = ProrationCalculator::new().breakdown(month, Some(&subscription()), &users);

    assert_eq!(breakdown.daily_rate_cents, 97);
    assert_eq!(breakdown.total_days, 31);
    assert!(breakdown.rounding_corrected);
    assert_eq!(breakdown.total_cents, 3000);
}

#[test]
fn test_deactivation_plus_full_month_adds_daily_rate_per_day() {
    let month = Month::new(2020, 8).unwrap();
    for day in 1..=30u32 {
        let deactivated_on = NaiveDate::from_ymd_opt(2020, 8, day).unwrap();
        let users = [alice(), bob().with_deactivated_on(deactivated_on)];
        let total = ProrationCalculator::new().charge(month, Some(&subscription()), &users);
        assert_eq!(total, PRICE + u64::from(day) * 97, "deactivated on day {day}");
    }
}

#[test]
fn test_leap_february_full_coverage() {
    let users = [
        User::new(1, "Alice", date("2020-02-10")),
        bob().with_deactivated_on(date("2020-02-09")),
    ];
    assert_eq!(monthly_charge("2020-02", Some(&subscription()), &users).unwrap(), 3000);
}

#[test]
fn test_december_user_activated_next_year_skipped() {
    let users = [alice(), User::new(3, "Carol", date("2021-01-01"))];
    assert_eq!(monthly_charge("2020-12", Some(&subscription()), &users).unwrap(), 3000);
}
