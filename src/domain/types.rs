//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, parsed
//! numeric and calendar-date text) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided text did not parse as a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// Provided number parsed but was zero or negative.
    #[error("number must be greater than zero: {0}")]
    NonPositiveNumber(String),
    /// Provided text was neither a calendar date nor an RFC 3339 timestamp.
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Opaque identifier of a sale record, assigned by the remote collection.
///
/// The collaborator is free to hand out numeric or string identifiers, so
/// the wrapper stores the textual form and never interprets it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct SaleId(String);

impl SaleId {
    /// Wraps a non-empty identifier string.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SaleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SaleId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SaleId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SaleId> for String {
    fn from(value: SaleId) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for SaleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        let raw = match Raw::deserialize(deserializer)? {
            Raw::Number(value) => value.to_string(),
            Raw::Text(value) => value,
        };
        SaleId::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Gender options offered by the contact form select control.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Home,
    Dona,
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Home => write!(f, "home"),
            Gender::Dona => write!(f, "dona"),
        }
    }
}

impl FromStr for Gender {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Gender::Home),
            "dona" => Ok(Gender::Dona),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Parses draft text into a strictly positive number.
pub fn parse_positive_number(value: &str) -> Result<f64, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| TypeConstraintError::InvalidNumber(value.to_string()))?;
    if parsed <= 0.0 {
        return Err(TypeConstraintError::NonPositiveNumber(value.to_string()));
    }
    Ok(parsed)
}

/// Parses a calendar date, accepting both `YYYY-MM-DD` values and RFC 3339
/// timestamps. Any time-of-day component is discarded.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| TypeConstraintError::InvalidDate(value.to_string()))
}
