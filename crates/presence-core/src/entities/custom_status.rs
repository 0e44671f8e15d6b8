//! Custom status entity
//!
//! A short-lived annotation (emoji + text) a user attaches atop their
//! presence. At most one entry is active per user; optional expiry is either
//! implied by a preset duration or supplied by the caller.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Preset expiry windows for a custom status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusDuration {
    ThirtyMinutes,
    OneHour,
    FourHours,
    Today,
    ThisWeek,
    /// Caller picks an explicit date and time
    DateAndTime,
    /// Caller supplies an arbitrary future expiry
    Custom,
}

impl StatusDuration {
    /// Expiry instant implied by this duration, measured from `now`.
    ///
    /// Returns `None` for the caller-supplied variants (`DateAndTime`,
    /// `Custom`), which carry their own expiry.
    #[must_use]
    pub fn implied_expiry(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::ThirtyMinutes => Some(now + Duration::minutes(30)),
            Self::OneHour => Some(now + Duration::hours(1)),
            Self::FourHours => Some(now + Duration::hours(4)),
            Self::Today => Some(end_of_day(now)),
            Self::ThisWeek => Some(end_of_week(now)),
            Self::DateAndTime | Self::Custom => None,
        }
    }

    /// Check if this duration carries a caller-supplied expiry
    #[must_use]
    pub fn is_caller_supplied(&self) -> bool {
        matches!(self, Self::DateAndTime | Self::Custom)
    }
}

impl std::fmt::Display for StatusDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ThirtyMinutes => "thirty_minutes",
            Self::OneHour => "one_hour",
            Self::FourHours => "four_hours",
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::DateAndTime => "date_and_time",
            Self::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for StatusDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thirty_minutes" => Ok(Self::ThirtyMinutes),
            "one_hour" => Ok(Self::OneHour),
            "four_hours" => Ok(Self::FourHours),
            "today" => Ok(Self::Today),
            "this_week" => Ok(Self::ThisWeek),
            "date_and_time" => Ok(Self::DateAndTime),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("Invalid duration: {s}")),
        }
    }
}

/// Midnight at the start of the next UTC day
fn end_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    let next = now.date_naive() + Duration::days(1);
    Utc.from_utc_datetime(&next.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// Midnight at the start of the next ISO week (upcoming Monday)
fn end_of_week(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_left = 7 - i64::from(now.date_naive().weekday().num_days_from_monday());
    let next = now.date_naive() + Duration::days(days_left);
    Utc.from_utc_datetime(&next.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// Custom status annotation for a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStatus {
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<StatusDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CustomStatus {
    /// Create a status with just an emoji and text
    #[must_use]
    pub fn new(emoji: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            text: text.into(),
            duration: None,
            expires_at: None,
            created_at: None,
        }
    }

    /// Attach a preset duration
    #[must_use]
    pub fn with_duration(mut self, duration: StatusDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Attach an expiry instant
    #[must_use]
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Stamp the creation instant, called once before persisting
    pub fn pre_save(&mut self, now: DateTime<Utc>) {
        self.created_at = Some(now);
    }

    /// Check whether two statuses carry the same (emoji, text) pair.
    ///
    /// The pair is the identity used for recent-history deduplication and
    /// removal; duration and expiry do not participate.
    #[must_use]
    pub fn same_pair(&self, other: &Self) -> bool {
        self.emoji == other.emoji && self.text == other.text
    }

    /// Validate the candidate against the given instant.
    ///
    /// Pure check, no side effects:
    /// - emoji and text must not both be empty;
    /// - a preset duration requires an expiry equal to the one it implies;
    /// - caller-supplied expiries (date_and_time/custom, or no duration at
    ///   all) must lie strictly in the future.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.emoji.is_empty() && self.text.is_empty() {
            return Err(DomainError::EmptyCustomStatus);
        }

        if let Some(expires_at) = self.expires_at {
            if expires_at <= now {
                return Err(DomainError::ExpiryInPast);
            }
        }

        match self.duration {
            Some(duration) => {
                if let Some(implied) = duration.implied_expiry(now) {
                    match self.expires_at {
                        Some(expires_at) if expires_at == implied => Ok(()),
                        Some(_) => Err(DomainError::ExpiryMismatch {
                            duration: duration.to_string(),
                        }),
                        None => Err(DomainError::MissingExpiry {
                            duration: duration.to_string(),
                        }),
                    }
                } else if self.expires_at.is_none() {
                    // date_and_time/custom must carry their own expiry
                    Err(DomainError::MissingExpiry {
                        duration: duration.to_string(),
                    })
                } else {
                    Ok(())
                }
            }
            // No duration: expiry, when present, already checked above
            None => Ok(()),
        }
    }
}
