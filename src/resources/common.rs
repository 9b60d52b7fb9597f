//! Types shared by several resource modules.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::QueryParams;

/// Upper bound for any `timespan` parameter: 30 days, in seconds.
pub const MAX_TIMESPAN: u64 = 2_592_000;

/// Default `timespan` for history and analytics endpoints: one hour.
pub const DEFAULT_TIMESPAN: u64 = 3600;

/// Default `perPage` for paged endpoints.
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Caps `timespan` at [`MAX_TIMESPAN`].
///
/// Larger values are silently reduced, never rejected.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::resources::{clamp_timespan, MAX_TIMESPAN};
///
/// assert_eq!(clamp_timespan(60), 60);
/// assert_eq!(clamp_timespan(10_000_000), MAX_TIMESPAN);
/// ```
#[must_use]
pub fn clamp_timespan(timespan: u64) -> u64 {
    if timespan > MAX_TIMESPAN {
        tracing::debug!(requested = timespan, "timespan capped at {MAX_TIMESPAN}s");
        MAX_TIMESPAN
    } else {
        timespan
    }
}

/// The period a history query covers.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use meraki_dashboard::resources::TimeWindow;
///
/// let last_day = TimeWindow::Timespan(86_400);
///
/// let fixed = TimeWindow::Range {
///     t0: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
///     t1: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
/// };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeWindow {
    /// Look back this many seconds from now. Capped at [`MAX_TIMESPAN`].
    Timespan(u64),
    /// Explicit start and end, sent as `t0`/`t1` epoch seconds.
    Range {
        /// Start of the window.
        t0: DateTime<Utc>,
        /// End of the window.
        t1: DateTime<Utc>,
    },
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::Timespan(DEFAULT_TIMESPAN)
    }
}

impl TimeWindow {
    /// Writes `t0`/`t1` or `timespan` into `params`.
    pub fn apply(&self, params: &mut QueryParams) {
        match self {
            Self::Timespan(timespan) => params.insert("timespan", clamp_timespan(*timespan)),
            Self::Range { t0, t1 } => {
                params.insert("t0", t0.timestamp());
                params.insert("t1", t1.timestamp());
            }
        }
    }
}

/// Policy applied to a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevicePolicy {
    /// Always allowed.
    Whitelisted,
    /// Always blocked.
    Blocked,
    /// Network defaults apply.
    Normal,
    /// A group policy applies; see `groupPolicyId`.
    #[serde(rename = "Group policy")]
    GroupPolicy,
}

impl DevicePolicy {
    /// Returns the wire representation of the policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Whitelisted => "Whitelisted",
            Self::Blocked => "Blocked",
            Self::Normal => "Normal",
            Self::GroupPolicy => "Group policy",
        }
    }
}

impl fmt::Display for DevicePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes a list as one space-separated string.
pub(crate) fn space_joined<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&values.join(" "))
}

/// [`space_joined`] for optional lists.
#[allow(clippy::ref_option)]
pub(crate) fn optional_space_joined<S>(
    values: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match values {
        Some(values) => space_joined(values, serializer),
        None => serializer.serialize_none(),
    }
}
