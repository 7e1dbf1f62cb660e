//! Monthly billing for per-user subscriptions.
//!
//! This module provides the billing month, the input records, and the
//! prorated charge calculation.

pub mod calculator;
pub mod models;
pub mod month;

pub use calculator::{ChargeBreakdown, ProrationCalculator, UserCharge, monthly_charge};
pub use models::{ChargeRequest, Subscription, User};
pub use month::Month;
