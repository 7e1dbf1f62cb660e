//! Prorated monthly charge calculation.
//!
//! Each user is billed for the days of the month they were active, at a
//! daily rate of the monthly price divided by the days in the month, rounded
//! up to the next cent. Users active for the entire month are billed the
//! monthly price directly.
//!
//! Rounding every daily rate up overcharges whenever partial users together
//! cover whole months. When the billed days sum to an exact multiple of the
//! month's length, the total is replaced by that multiple of the monthly
//! price.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{
    models::{Subscription, User},
    month::Month,
};
use crate::error::Result;

/// Charge for a single user within the billing month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCharge {
    /// User identifier.
    pub user_id: u64,
    /// User display name.
    pub name: String,
    /// Days of the month the user was billed for.
    pub billed_days: u32,
    /// Whether the user was billed the flat monthly price.
    pub full_month: bool,
    /// Charge for this user, in cents.
    pub subtotal_cents: u64,
}

/// Itemized result of a charge calculation.
///
/// [`total_cents`](Self::total_cents) is the amount to bill. The line items
/// sum to it unless [`rounding_corrected`](Self::rounding_corrected) is set.
///
/// Serializes in camelCase, matching [`ChargeRequest`](super::ChargeRequest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeBreakdown {
    /// Billing month.
    pub month: Month,
    /// Calendar days in the billing month.
    pub days_in_month: u32,
    /// Monthly price divided by days in month, rounded up.
    pub daily_rate_cents: u64,
    /// One line per user with billable days in the month.
    pub lines: Vec<UserCharge>,
    /// Billed days summed over all users.
    pub total_days: u64,
    /// Whether the total was replaced by a whole multiple of the monthly price.
    pub rounding_corrected: bool,
    /// Amount to bill, in cents.
    pub total_cents: u64,
}

impl ChargeBreakdown {
    fn empty(month: Month, daily_rate_cents: u64) -> Self {
        Self {
            month,
            days_in_month: month.days(),
            daily_rate_cents,
            lines: Vec::new(),
            total_days: 0,
            rounding_corrected: false,
            total_cents: 0,
        }
    }
}

/// Calculates prorated monthly charges.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use monthly_charge::billing::{Month, ProrationCalculator, Subscription, User};
///
/// let august = Month::new(2020, 8)?;
/// let subscription = Subscription::new(3000);
/// let users = [
///     User::new(1, "Alice", NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()),
///     User::new(2, "Bob", NaiveDate::from_ymd_opt(2019, 1, 1).unwrap())
///         .with_deactivated_on(NaiveDate::from_ymd_opt(2020, 8, 15).unwrap()),
/// ];
///
/// let calculator = ProrationCalculator::new();
/// assert_eq!(calculator.charge(august, Some(&subscription), &users), 4455);
/// # Ok::<(), monthly_charge::ChargeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProrationCalculator;

impl ProrationCalculator {
    /// Creates a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the total charge for `month` in cents.
    ///
    /// Returns 0 when there is no subscription or no users.
    #[must_use]
    pub fn charge(
        &self,
        month: Month,
        subscription: Option<&Subscription>,
        users: &[User],
    ) -> u64 {
        self.breakdown(month, subscription, users).total_cents
    }

    /// Calculates the charge for `month` with per-user line items.
    #[must_use]
    #[instrument(
        skip(self, month, subscription, users),
        fields(month = %month, users = users.len())
    )]
    pub fn breakdown(
        &self,
        month: Month,
        subscription: Option<&Subscription>,
        users: &[User],
    ) -> ChargeBreakdown {
        let Some(subscription) = subscription else {
            debug!("no subscription, nothing to charge");
            return ChargeBreakdown::empty(month, 0);
        };

        let monthly_price = subscription.monthly_price_in_cents;
        let days_in_month = u64::from(month.days());
        let daily_rate = monthly_price.div_ceil(days_in_month);
        debug!(monthly_price, days_in_month, daily_rate, "computed daily rate");

        if users.is_empty() {
            debug!("no users, nothing to charge");
            return ChargeBreakdown::empty(month, daily_rate);
        }

        let mut lines = Vec::with_capacity(users.len());
        let mut total_days: u64 = 0;
        let mut total_cost: u64 = 0;

        for user in users {
            let Some(line) = bill_user(month, monthly_price, daily_rate, user) else {
                debug!(user_id = user.id, "user not active during month");
                continue;
            };

            total_days = total_days.saturating_add(u64::from(line.billed_days));
            total_cost = total_cost.saturating_add(line.subtotal_cents);
            debug!(
                user_id = line.user_id,
                billed_days = line.billed_days,
                full_month = line.full_month,
                subtotal = line.subtotal_cents,
                total_days,
                total_cost,
                "user charged"
            );
            lines.push(line);
        }

        let rounding_corrected = !lines.is_empty() && total_days % days_in_month == 0;
        if rounding_corrected {
            let whole_months = total_days / days_in_month;
            info!(
                whole_months,
                uncorrected = total_cost,
                "billed days cover whole months, correcting rounding creep"
            );
            total_cost = whole_months.saturating_mul(monthly_price);
        }

        ChargeBreakdown {
            month,
            days_in_month: month.days(),
            daily_rate_cents: daily_rate,
            lines,
            total_days,
            rounding_corrected,
            total_cents: total_cost,
        }
    }
}

/// Bills one user, or returns `None` if they have no billable days in `month`.
fn bill_user(
    month: Month,
    monthly_price: u64,
    daily_rate: u64,
    user: &User,
) -> Option<UserCharge> {
    let billable_until = user.billable_until();

    if user.activated_on >= month.end() || billable_until.is_some_and(|end| end <= month.start()) {
        return None;
    }

    let full_month =
        user.activated_on < month.start() && billable_until.is_none_or(|end| end >= month.end());
    if full_month {
        return Some(UserCharge {
            user_id: user.id,
            name: user.name.clone(),
            billed_days: month.days(),
            full_month: true,
            subtotal_cents: monthly_price,
        });
    }

    let start = user.activated_on.max(month.start());
    let end = billable_until.map_or(month.end(), |end| end.min(month.end()));
    let billed_days = overlap_days(start, end)?;

    Some(UserCharge {
        user_id: user.id,
        name: user.name.clone(),
        billed_days,
        full_month: false,
        subtotal_cents: u64::from(billed_days).saturating_mul(daily_rate),
    })
}

/// Whole days in `[start, end)`, or `None` if the range is empty.
fn overlap_days(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    u32::try_from(end.signed_duration_since(start).num_days()).ok().filter(|days| *days > 0)
}

/// Calculates the charge for a `YYYY-MM` month string with the default calculator.
///
/// # Errors
///
/// Returns [`ChargeError::InvalidMonth`](crate::ChargeError::InvalidMonth)
/// if `month` is malformed.
///
/// # Examples
///
/// ```
/// use monthly_charge::monthly_charge;
///
/// assert_eq!(monthly_charge("2020-09", None, &[])?, 0);
/// # Ok::<(), monthly_charge::ChargeError>(())
/// ```
pub fn monthly_charge(
    month: &str,
    subscription: Option<&Subscription>,
    users: &[User],
) -> Result<u64> {
    let month: Month = month.parse()?;
    Ok(ProrationCalculator::new().charge(month, subscription, users))
}
