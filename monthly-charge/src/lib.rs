//! Monthly Charge: Prorated Per-User Subscription Billing
//!
//! Computes the charge for one month of a per-user subscription, in integer
//! cents. Users who joined or left during the month are billed only for the
//! days they were active.
//!
//! # Billing Rules
//!
//! - **Daily rate**: monthly price divided by days in the month, rounded up
//!   to the next cent
//! - **Inclusive days**: users are billed for their activation day and their
//!   deactivation day
//! - **Full months**: a user active from before the month through its end
//!   is billed the monthly price, never the rounded daily sum
//! - **Rounding creep**: when billed days across all users add up to whole
//!   months, the total is exactly that many monthly prices
//! - **No subscription or no users**: the charge is 0
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use monthly_charge::billing::{ProrationCalculator, Subscription, User};
//!
//! # fn example() -> monthly_charge::Result<()> {
//! let day = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap();
//! let subscription = Subscription::new(3000);
//! let users = [
//!     User::new(1, "Alice", day(8, 16)),
//!     User::new(2, "Bob", day(1, 1)).with_deactivated_on(day(8, 15)),
//! ];
//!
//! // 16 + 15 days at 97 cents would be 3007; together they cover August exactly.
//! let total = ProrationCalculator::new().charge("2020-08".parse()?, Some(&subscription), &users);
//! assert_eq!(total, 3000);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`billing`]: months, input records, and the proration calculator
//! - [`error`]: error types for parsing requests and months
//!
//! # Logging
//!
//! The calculator emits [`tracing`] events: a span per calculation, `debug`
//! events per user, and an `info` event when the rounding-creep correction
//! applies. Install a subscriber to see them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod billing;
pub mod error;

pub use billing::{ProrationCalculator, monthly_charge};
pub use error::{ChargeError, Result};
