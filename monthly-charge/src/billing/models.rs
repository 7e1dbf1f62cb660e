//! Billing input records.
//!
//! Field names serialize in camelCase (`monthlyPriceInCents`, `activatedOn`)
//! so requests produced by existing account tooling decode unchanged.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::month::Month;
use crate::error::{ChargeError, Result};

/// Subscription pricing for a customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription identifier.
    #[serde(default)]
    pub id: u64,
    /// Owning customer.
    #[serde(default)]
    pub customer_id: u64,
    /// Price of one full month for one user, in cents.
    pub monthly_price_in_cents: u64,
}

impl Subscription {
    /// Creates a subscription with the given monthly price.
    #[must_use]
    pub const fn new(monthly_price_in_cents: u64) -> Self {
        Self { id: 0, customer_id: 0, monthly_price_in_cents }
    }

    /// Sets the subscription identifier.
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning customer.
    #[must_use]
    pub const fn with_customer_id(mut self, customer_id: u64) -> Self {
        self.customer_id = customer_id;
        self
    }
}

/// A user seat and its billable window.
///
/// Both ends of the window are inclusive: a user is billed for the day they
/// were activated and for the day they were deactivated.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use monthly_charge::billing::User;
///
/// let user = User::new(1, "Alice", NaiveDate::from_ymd_opt(2019, 1, 1).unwrap())
///     .with_deactivated_on(NaiveDate::from_ymd_opt(2020, 8, 15).unwrap());
///
/// assert_eq!(user.billable_until(), NaiveDate::from_ymd_opt(2020, 8, 16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    #[serde(default)]
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Owning customer.
    #[serde(default)]
    pub customer_id: u64,
    /// First billable day.
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub activated_on: NaiveDate,
    /// Last billable day, `None` while the user is still active.
    #[serde(default, deserialize_with = "calendar_date::deserialize_option")]
    pub deactivated_on: Option<NaiveDate>,
}

impl User {
    /// Creates an active user.
    #[must_use]
    #[allow(
        clippy::impl_trait_in_params,
        reason = "impl Into<String> is idiomatic for builder methods"
    )]
    pub fn new(id: u64, name: impl Into<String>, activated_on: NaiveDate) -> Self {
        Self { id, name: name.into(), customer_id: 0, activated_on, deactivated_on: None }
    }

    /// Sets the last billable day.
    #[must_use]
    pub fn with_deactivated_on(mut self, deactivated_on: NaiveDate) -> Self {
        self.deactivated_on = Some(deactivated_on);
        self
    }

    /// Sets the owning customer.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: u64) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// Exclusive end of the billable window: the day after deactivation.
    ///
    /// `None` means the window is unbounded.
    #[must_use]
    pub fn billable_until(&self) -> Option<NaiveDate> {
        self.deactivated_on.and_then(|day| day.succ_opt())
    }
}

/// A complete charge calculation input, as read from JSON.
///
/// # Examples
///
/// ```
/// use monthly_charge::billing::ChargeRequest;
///
/// let request = ChargeRequest::from_json(
///     r#"{
///         "month": "2020-09",
///         "subscription": { "monthlyPriceInCents": 3000 },
///         "users": [{ "activatedOn": "2019-01-01", "deactivatedOn": null }]
///     }"#,
/// )?;
///
/// assert_eq!(request.users.len(), 1);
/// # Ok::<(), monthly_charge::ChargeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    /// Billing month.
    pub month: Month,
    /// Subscription, absent when the account has none.
    #[serde(default)]
    pub subscription: Option<Subscription>,
    /// Users on the account.
    pub users: Vec<User>,
}

impl ChargeRequest {
    /// Decodes a request from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ChargeError::InvalidRequest`] if the JSON is malformed or
    /// does not match the request shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ChargeError::InvalidRequest(e.to_string()))
    }

    /// Reads and decodes a request from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ChargeError::Io`] if the file cannot be read, or
    /// [`ChargeError::InvalidRequest`] if it cannot be decoded.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }
}

/// Date decoding that accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are reduced to their UTC calendar day.
mod calendar_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, de::Error};

    fn parse(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.with_timezone(&Utc).date_naive())
        })
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid calendar date: {raw}")))
    }

    pub(super) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid calendar date: {raw}")))
            })
            .transpose()
    }
}
