//! Itemized charges for an account whose users change mid-month.
//!
//! Bills August 2020 twice: once for a full-month user plus one who left on
//! the 15th, and once for two users whose halves together cover the month.
//!
//! # Running this example
//!
//! ```bash
//! RUST_LOG=monthly_charge=debug cargo run --example mid_month_changes
//! ```

#![allow(
    clippy::print_stdout,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use chrono::NaiveDate;
use monthly_charge::billing::{ChargeBreakdown, Month, ProrationCalculator, Subscription, User};

fn day(month: u32, day: u32) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::from_ymd_opt(2020, month, day).ok_or_else(|| "invalid date".into())
}

fn print_breakdown(title: &str, breakdown: &ChargeBreakdown) {
    println!("{title}");
    println!(
        "  {} days, daily rate {} cents",
        breakdown.days_in_month, breakdown.daily_rate_cents
    );
    for line in &breakdown.lines {
        let kind = if line.full_month { "full month" } else { "prorated" };
        println!(
            "  {:<8} {:>2} days ({kind}): {} cents",
            line.name, line.billed_days, line.subtotal_cents
        );
    }
    if breakdown.rounding_corrected {
        println!("  billed days cover whole months, rounding creep removed");
    }
    println!("  total: {} cents\n", breakdown.total_cents);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let august = Month::new(2020, 8)?;
    let subscription = Subscription::new(3000);
    let calculator = ProrationCalculator::new();

    let leaving = [
        User::new(1, "Alice", day(1, 1)?),
        User::new(2, "Bob", day(1, 1)?).with_deactivated_on(day(8, 15)?),
    ];
    print_breakdown(
        "Alice stays, Bob leaves on the 15th:",
        &calculator.breakdown(august, Some(&subscription), &leaving),
    );

    let handover = [
        User::new(1, "Alice", day(8, 16)?),
        User::new(2, "Bob", day(1, 1)?).with_deactivated_on(day(8, 15)?),
    ];
    print_breakdown(
        "Bob hands over to Alice on the 16th:",
        &calculator.breakdown(august, Some(&subscription), &handover),
    );

    Ok(())
}
