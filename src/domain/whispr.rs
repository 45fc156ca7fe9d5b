//! Whispr domain model.
//!
//! A [`Whispr`] is one anonymous message received by a profile owner. The
//! backend owns the record; the dashboard holds a read-only projection and only
//! ever flips `is_read` or removes the record through a repository.

use super::error::{Result, WhisprError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum whispr length in characters, mirrored from the backend constraint.
pub const MAX_CONTENT_LENGTH: usize = 500;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Closed set of whispr categories.
///
/// The serialized form is the snake_case backend value returned by
/// [`WhisprType::as_str`]. Sorting by type always compares that value, never
/// the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhisprType {
    Question,
    Compliment,
    Roast,
    Confession,
    Rumor,
    Suggestion,
    Secret,
    HotTake,
    Dare,
}

impl WhisprType {
    /// Every variant, in the order filter chips are displayed.
    pub const ALL: [Self; 9] = [
        Self::Question,
        Self::Compliment,
        Self::Roast,
        Self::Confession,
        Self::Rumor,
        Self::Suggestion,
        Self::Secret,
        Self::HotTake,
        Self::Dare,
    ];

    /// Backend string value of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Compliment => "compliment",
            Self::Roast => "roast",
            Self::Confession => "confession",
            Self::Rumor => "rumor",
            Self::Suggestion => "suggestion",
            Self::Secret => "secret",
            Self::HotTake => "hot_take",
            Self::Dare => "dare",
        }
    }

    /// Human-readable label shown on chips and cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Question => "Question",
            Self::Compliment => "Compliment",
            Self::Roast => "Roast",
            Self::Confession => "Confession",
            Self::Rumor => "Rumor",
            Self::Suggestion => "Suggestion",
            Self::Secret => "Secret",
            Self::HotTake => "Hot Take",
            Self::Dare => "Dare",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Question => "❓",
            Self::Compliment => "💖",
            Self::Roast => "🔥",
            Self::Confession => "🤫",
            Self::Rumor => "👀",
            Self::Suggestion => "💡",
            Self::Secret => "🔒",
            Self::HotTake => "🌶️",
            Self::Dare => "🎯",
        }
    }
}

impl fmt::Display for WhisprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WhisprType {
    type Err = WhisprError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| WhisprError::Validation(format!("unknown whispr type: {s}")))
    }
}

/// One anonymous message as projected from the backend.
///
/// # Examples
///
/// ```
/// use whispr_dash::domain::{Whispr, WhisprType};
///
/// let whispr = Whispr::new("w1", "What's your favourite album?", WhisprType::Question, "2024-01-03T10:00:00Z");
/// assert!(!whispr.is_read);
/// assert!(whispr.created_instant().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Whispr {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: WhisprType,
    /// ISO-8601 creation timestamp exactly as the backend sent it.
    pub created_at: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Whispr {
    /// Creates an unread whispr with empty metadata.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        kind: WhisprType,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            kind,
            created_at: created_at.into(),
            is_read: false,
            metadata: serde_json::Map::new(),
        }
    }

    /// Parses `created_at` into an instant, or `None` when it is malformed.
    ///
    /// Accepts RFC 3339 timestamps, offset-less date-times (read as UTC), and
    /// bare `YYYY-MM-DD` dates (midnight UTC).
    #[must_use]
    pub fn created_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.created_at)
    }

    /// Flags the whispr as read. Setting it again is a no-op.
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }

    /// Returns how long ago the whispr was received, relative to `now`.
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use whispr_dash::domain::{Whispr, WhisprType};
    ///
    /// let now = Utc::now();
    /// let sent = (now - Duration::minutes(5)).to_rfc3339();
    /// let whispr = Whispr::new("w1", "hi", WhisprType::Dare, sent);
    /// assert_eq!(whispr.time_ago(now), "5m ago");
    /// ```
    #[must_use]
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let Some(created) = self.created_instant() else {
            return "unknown".to_string();
        };
        let diff = (now - created).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Checks outgoing whispr content against the backend's constraints.
///
/// # Errors
///
/// Returns [`WhisprError::Validation`] when the content is blank or longer
/// than [`MAX_CONTENT_LENGTH`] characters.
pub fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(WhisprError::Validation("whispr content is empty".to_string()));
    }
    let len = content.chars().count();
    if len > MAX_CONTENT_LENGTH {
        return Err(WhisprError::Validation(format!(
            "whispr content is {len} characters, limit is {MAX_CONTENT_LENGTH}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn type_round_trips_through_backend_string() {
        for kind in WhisprType::ALL {
            assert_eq!(kind.as_str().parse::<WhisprType>().unwrap(), kind);
        }
        assert!("gossip".parse::<WhisprType>().is_err());
    }

    #[test]
    fn deserializes_backend_row() {
        let json = r#"{
            "id": "abc",
            "content": "spicy",
            "type": "hot_take",
            "created_at": "2024-05-01T12:30:00.000Z",
            "metadata": {"source": "link"}
        }"#;
        let whispr: Whispr = serde_json::from_str(json).unwrap();
        assert_eq!(whispr.kind, WhisprType::HotTake);
        assert!(!whispr.is_read);
        assert_eq!(whispr.metadata["source"], "link");
    }

    #[test]
    fn parses_supported_timestamp_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        for raw in ["2024-01-03", "2024-01-03T00:00:00", "2024-01-03T00:00:00Z", "2024-01-03T02:00:00+02:00"] {
            let w = Whispr::new("1", "x", WhisprType::Dare, raw);
            assert_eq!(w.created_instant(), Some(expected), "{raw}");
        }
        assert_eq!(Whispr::new("1", "x", WhisprType::Dare, "yesterday").created_instant(), None);
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut w = Whispr::new("1", "x", WhisprType::Secret, "2024-01-01");
        w.mark_read();
        w.mark_read();
        assert!(w.is_read);
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let at = |raw: &str| Whispr::new("1", "x", WhisprType::Rumor, raw).time_ago(now);
        assert_eq!(at("2024-01-10T11:59:30Z"), "just now");
        assert_eq!(at("2024-01-10T09:00:00Z"), "3h ago");
        assert_eq!(at("2024-01-08T12:00:00Z"), "2d ago");
        assert_eq!(at("not a date"), "unknown");
    }

    #[test]
    fn validates_content_length_in_chars() {
        assert!(validate_content("hello").is_ok());
        assert!(validate_content("   ").is_err());
        assert!(validate_content(&"é".repeat(MAX_CONTENT_LENGTH)).is_ok());
        assert!(validate_content(&"a".repeat(MAX_CONTENT_LENGTH + 1)).is_err());
    }
}
