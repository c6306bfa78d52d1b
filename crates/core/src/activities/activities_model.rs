//! Activity domain models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, ParseError as ChronoParseError, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::activities_constants::{
    ACTIVITY_KIND_DEPOSIT, ACTIVITY_KIND_OPTIMIZATION, ACTIVITY_KIND_WITHDRAW,
};
use super::activities_errors::ActivityError;

/// Kind of a displayable event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Deposit,
    Withdraw,
    Optimization,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Deposit => ACTIVITY_KIND_DEPOSIT,
            ActivityKind::Withdraw => ACTIVITY_KIND_WITHDRAW,
            ActivityKind::Optimization => ACTIVITY_KIND_OPTIMIZATION,
        }
    }

    /// Maps a raw transaction `type` onto a user-initiated kind.
    /// Optimizer events never arrive through the transaction feed.
    pub fn from_transaction_type(transaction_type: &str) -> Option<Self> {
        match transaction_type {
            ACTIVITY_KIND_DEPOSIT => Some(ActivityKind::Deposit),
            ACTIVITY_KIND_WITHDRAW => Some(ActivityKind::Withdraw),
            _ => None,
        }
    }

    /// Deposits and withdrawals originate from the user.
    pub fn is_user_initiated(&self) -> bool {
        matches!(self, ActivityKind::Deposit | ActivityKind::Withdraw)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single displayable event in the unified feed.
///
/// Build through [`Activity::deposit`], [`Activity::withdraw`] or
/// [`Activity::optimization`] so that only the fields matching `kind` are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    pub vault_ref: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_ref: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimizer_action: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimizer_result: Option<String>,
}

impl Activity {
    pub fn deposit(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        vault_ref: impl Into<String>,
        amount: Decimal,
        actor_ref: Option<String>,
    ) -> Self {
        Self::user_transaction(ActivityKind::Deposit, id, timestamp, vault_ref, amount, actor_ref)
    }

    pub fn withdraw(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        vault_ref: impl Into<String>,
        amount: Decimal,
        actor_ref: Option<String>,
    ) -> Self {
        Self::user_transaction(ActivityKind::Withdraw, id, timestamp, vault_ref, amount, actor_ref)
    }

    pub fn optimization(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        vault_ref: impl Into<String>,
        action: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Activity {
            id: id.into(),
            kind: ActivityKind::Optimization,
            timestamp,
            vault_ref: vault_ref.into(),
            amount: None,
            actor_ref: None,
            optimizer_action: Some(action.into()),
            optimizer_result: Some(result.into()),
        }
    }

    /// Builds a deposit or withdrawal. `kind` comes from
    /// [`ActivityKind::from_transaction_type`], which only yields user kinds.
    pub(crate) fn user_transaction(
        kind: ActivityKind,
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        vault_ref: impl Into<String>,
        amount: Decimal,
        actor_ref: Option<String>,
    ) -> Self {
        Activity {
            id: id.into(),
            kind,
            timestamp,
            vault_ref: vault_ref.into(),
            amount: Some(amount),
            actor_ref,
            optimizer_action: None,
            optimizer_result: None,
        }
    }

    /// Calendar date of the event (UTC).
    pub fn effective_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Get amount, defaulting to zero if not set
    pub fn amt(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    /// True when exactly the fields appropriate to `kind` are populated.
    pub fn is_well_formed(&self) -> bool {
        if self.kind.is_user_initiated() {
            self.amount.is_some()
                && self.optimizer_action.is_none()
                && self.optimizer_result.is_none()
        } else {
            self.amount.is_none()
                && self.actor_ref.is_none()
                && self.optimizer_action.is_some()
                && self.optimizer_result.is_some()
        }
    }
}

/// Category projection applied to the merged feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFilterMode {
    #[default]
    All,
    User,
    #[serde(alias = "ai")]
    Optimizer,
}

impl ActivityFilterMode {
    pub fn matches(&self, kind: ActivityKind) -> bool {
        match self {
            ActivityFilterMode::All => true,
            ActivityFilterMode::User => kind.is_user_initiated(),
            ActivityFilterMode::Optimizer => kind == ActivityKind::Optimization,
        }
    }
}

impl FromStr for ActivityFilterMode {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ActivityFilterMode::All),
            "user" => Ok(ActivityFilterMode::User),
            "optimizer" | "ai" => Ok(ActivityFilterMode::Optimizer),
            other => Err(ActivityError::InvalidData(format!(
                "Unknown activity filter mode '{}'",
                other
            ))),
        }
    }
}

/// Parses a feed timestamp into an absolute instant.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC) and a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ChronoParseError> {
    let trimmed = value.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default()));
    }

    Err(rfc3339_err)
}

mod timestamp_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Always serialize in ISO 8601 format with UTC timezone
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s).map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid timestamp format: {}. Expected ISO 8601/RFC3339 or YYYY-MM-DD",
                s
            ))
        })
    }
}
