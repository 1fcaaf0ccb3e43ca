use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub mod recording;

pub use recording::{RecordCommand, RecordingRecord, RecordingStatus};

/// Numeric identifier used for channels and events in page paths
pub type Tag = u32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub tag: Tag,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A scheduled broadcast on one channel.
///
/// The event covers the half-open interval `[start, start + duration)`.
/// Its successor is the next element of the owning channel's timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub tag: Tag,
    pub channel: Tag,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    /// Duration in seconds
    pub duration: u32,
}

impl Event {
    pub fn stop(&self) -> DateTime<Utc> {
        self.start + Duration::seconds(i64::from(self.duration))
    }

    /// Whether the event is still on air or yet to start at `now`
    pub fn is_current_or_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.stop() > now
    }

    pub fn is_airing(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.stop()
    }
}
