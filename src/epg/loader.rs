//! Guide data loading
//!
//! The guide file is a single JSON document with `channels`, `events` and
//! `recordings` arrays. When no file is configured a small fictional demo
//! guide covering the coming week is generated instead.

use chrono::{DateTime, Duration, DurationRound, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use super::{ChannelRegistry, EpgStore, Guide};
use crate::errors::{GuideError, GuideResult};
use crate::models::{Channel, Event, RecordingRecord, RecordingStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideData {
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub recordings: Vec<RecordingRecord>,
}

impl GuideData {
    pub fn from_json(json: &str) -> GuideResult<Self> {
        let data: GuideData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Every event and recording must refer to a registered channel
    pub fn validate(&self) -> GuideResult<()> {
        let known = |tag| self.channels.iter().any(|c| c.tag == tag);

        if let Some(event) = self.events.iter().find(|e| !known(e.channel)) {
            return Err(GuideError::unknown_channel(
                event.channel,
                format!("event {}", event.tag),
            ));
        }
        if let Some(record) = self.recordings.iter().find(|r| !known(r.channel)) {
            return Err(GuideError::unknown_channel(
                record.channel,
                format!("recording {}", record.id),
            ));
        }
        Ok(())
    }

    /// Split into the shared EPG collaborators and the recording list
    pub fn into_parts(self) -> (Guide, Vec<RecordingRecord>) {
        let guide = Guide::new(
            ChannelRegistry::new(self.channels),
            EpgStore::from_events(self.events),
        );
        (guide, self.recordings)
    }
}

pub fn load_guide_file(path: &Path) -> GuideResult<GuideData> {
    let contents = std::fs::read_to_string(path).map_err(|source| GuideError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let data = GuideData::from_json(&contents)?;

    if data.events.is_empty() {
        warn!("Guide file {} contains no events", path.display());
    }
    info!(
        "Loaded guide from {}: {} channels, {} events, {} recordings",
        path.display(),
        data.channels.len(),
        data.events.len(),
        data.recordings.len()
    );
    Ok(data)
}

const DEMO_CHANNELS: [&str; 4] = [
    "StreamCast One",
    "AeroVision",
    "NationalNet Two",
    "CinemaMax",
];

const DEMO_PROGRAMMES: [(&str, Option<&str>); 6] = [
    ("Morning News", Some("Headlines, weather and the day's top stories.")),
    ("Garden Hour", Some("It's planting season: what to sow this week.")),
    ("The \"Big\" Quiz", Some("Contestants race the clock for the jackpot.")),
    ("Documentary", None),
    ("Feature Film", Some("An evening film from the archive.")),
    ("Late Show", Some("Talk, music and guests until late.")),
];

/// Fictional week of programming starting at the top of the current hour
pub fn demo_guide(now: DateTime<Utc>) -> GuideData {
    let origin = now
        .duration_trunc(Duration::hours(1))
        .unwrap_or(now);

    let channels: Vec<Channel> = DEMO_CHANNELS
        .iter()
        .zip(1u32..)
        .map(|(name, tag)| Channel {
            tag,
            name: (*name).to_string(),
            icon: None,
        })
        .collect();

    let mut events = Vec::new();
    let mut next_tag = 1u32;
    for channel in &channels {
        let mut start = origin;
        let mut slot = channel.tag as usize;
        while start < origin + Duration::days(7) {
            let (title, description) = DEMO_PROGRAMMES[slot % DEMO_PROGRAMMES.len()];
            let duration = if slot % 3 == 0 { 5400 } else { 3600 };
            events.push(Event {
                tag: next_tag,
                channel: channel.tag,
                title: title.to_string(),
                description: description.map(str::to_string),
                start,
                duration,
            });
            next_tag += 1;
            slot += 1;
            start += Duration::seconds(i64::from(duration));
        }
    }

    let recordings = events
        .iter()
        .filter(|e| e.channel == 1)
        .take(3)
        .zip([
            RecordingStatus::Recording,
            RecordingStatus::Scheduled,
            RecordingStatus::Scheduled,
        ])
        .zip(1u32..)
        .map(|((event, status), id)| RecordingRecord {
            id,
            channel: event.channel,
            title: Some(event.title.clone()),
            start: event.start,
            stop: event.stop(),
            status,
        })
        .collect();

    debug!("Generated demo guide with {} events", events.len());
    GuideData {
        channels,
        events,
        recordings,
    }
}
