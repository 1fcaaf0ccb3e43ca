use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tag;

/// Label used when a recording carries no title
pub const UNNAMED_RECORDING: &str = "Unnamed recording";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordingStatus {
    #[default]
    None,
    Scheduled,
    Recording,
    Done,
    Aborted,
    NoTransponder,
    FileError,
    DiskFull,
    BufferError,
}

impl RecordingStatus {
    pub const ALL: [RecordingStatus; 9] = [
        RecordingStatus::None,
        RecordingStatus::Scheduled,
        RecordingStatus::Recording,
        RecordingStatus::Done,
        RecordingStatus::Aborted,
        RecordingStatus::NoTransponder,
        RecordingStatus::FileError,
        RecordingStatus::DiskFull,
        RecordingStatus::BufferError,
    ];

    /// Decode a raw scheduler status code, `None` for codes outside the enumeration
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn code(self) -> i32 {
        Self::ALL
            .iter()
            .position(|status| *status == self)
            .map_or(0, |index| index as i32)
    }

    /// Scheduled or currently being recorded
    pub fn is_pending(self) -> bool {
        matches!(self, RecordingStatus::Scheduled | RecordingStatus::Recording)
    }
}

/// Command delegated to the scheduler from the event page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCommand {
    Record,
    Cancel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordingRecord {
    pub id: u32,
    pub channel: Tag,
    #[serde(default)]
    pub title: Option<String>,
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    #[serde(default)]
    pub status: RecordingStatus,
}

impl RecordingRecord {
    /// Title to display, falling back to the default label when absent or empty
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNNAMED_RECORDING,
        }
    }
}
