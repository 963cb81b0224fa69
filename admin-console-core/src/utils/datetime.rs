//! Serde helpers for record timestamps.
//!
//! Timestamps are written as RFC3339 strings. On input, RFC3339 strings and
//! Unix timestamps (seconds or milliseconds) are both accepted so that data
//! files produced by other tools load without conversion.

use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

/// Raw timestamp as it may appear in a data file
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl RawTimestamp {
    fn into_datetime<E: Error>(self) -> Result<DateTime<Utc>, E> {
        match self {
            RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| E::custom(format!("Invalid RFC3339 timestamp `{s}`: {e}"))),
            RawTimestamp::Signed(ts) => {
                from_unix(ts).ok_or_else(|| E::custom(format!("Invalid Unix timestamp: {ts}")))
            }
            RawTimestamp::Unsigned(ts) => i64::try_from(ts)
                .ok()
                .and_then(from_unix)
                .ok_or_else(|| E::custom(format!("Invalid Unix timestamp: {ts}"))),
        }
    }
}

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?.into_datetime::<D::Error>()
}

/// Same format for `Option<DateTime<Utc>>`; `null` maps to `None`.
pub mod option {
    use super::{DateTime, Deserialize, Deserializer, RawTimestamp, Serializer, Utc};

    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawTimestamp>::deserialize(deserializer)?
            .map(RawTimestamp::into_datetime::<D::Error>)
            .transpose()
    }
}

/// Values above 10^11 are taken as milliseconds, everything else as seconds.
fn from_unix(ts: i64) -> Option<DateTime<Utc>> {
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
