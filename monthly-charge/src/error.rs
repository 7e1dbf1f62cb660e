//! Error types for the monthly charge calculator.
//!
//! The charge calculation itself cannot fail. Errors only arise at the
//! boundaries: parsing a month string or decoding a JSON charge request.
//! All errors implement
//! [`std::error::Error`] via [`thiserror::Error`].
//!
//! # Examples
//!
//! ```
//! use monthly_charge::error::{ChargeError, Result};
//!
//! fn require_month(raw: &str) -> Result<&str> {
//!     if raw.len() != 7 {
//!         return Err(ChargeError::InvalidMonth(raw.to_owned()));
//!     }
//!     Ok(raw)
//! }
//!
//! assert!(require_month("2020-8").is_err());
//! ```

use thiserror::Error;

/// Result type alias for calculator operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ChargeError>;

/// Errors that can occur while preparing a charge calculation.
///
/// # Error Recovery
///
/// - **Input errors** ([`InvalidMonth`](Self::InvalidMonth),
///   [`InvalidRequest`](Self::InvalidRequest)): fix the input and retry
/// - **I/O errors** ([`Io`](Self::Io)): check the file path and permissions
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum ChargeError {
    /// Month string is not of the form `YYYY-MM` with a month in `1..=12`.
    ///
    /// # Examples
    ///
    /// ```
    /// use monthly_charge::error::ChargeError;
    ///
    /// let err = ChargeError::InvalidMonth("2020-13".to_owned());
    /// assert_eq!(err.to_string(), "Invalid month: 2020-13");
    /// ```
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// A JSON charge request could not be decoded.
    ///
    /// Common causes include missing `month` or `users` fields, dates not in
    /// `YYYY-MM-DD` form, or negative prices.
    #[error("Invalid charge request: {0}")]
    InvalidRequest(String),

    /// Reading a request file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
