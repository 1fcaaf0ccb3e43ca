//! In-memory EPG event store
//!
//! Events are kept per channel in non-decreasing start order. A channel's
//! timeline is exposed as a slice so callers walk it forward without ever
//! owning the events.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::models::{Event, Tag};

#[derive(Debug, Clone, Default)]
pub struct EpgStore {
    timelines: HashMap<Tag, Vec<Event>>,
    /// event tag -> (channel tag, position in timeline)
    index: HashMap<Tag, (Tag, usize)>,
}

impl EpgStore {
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        let mut timelines: HashMap<Tag, Vec<Event>> = HashMap::new();
        for event in events {
            timelines.entry(event.channel).or_default().push(event);
        }

        let mut store = Self {
            timelines,
            index: HashMap::new(),
        };
        store.reindex();
        store
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (channel, timeline) in &mut self.timelines {
            timeline.sort_by_key(|e| e.start);
            for (position, event) in timeline.iter().enumerate() {
                self.index.insert(event.tag, (*channel, position));
            }
        }
    }

    /// The whole ordered timeline of a channel, empty for unknown channels
    pub fn timeline(&self, channel: Tag) -> &[Event] {
        self.timelines
            .get(&channel)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The timeline starting at the current-or-upcoming event
    pub fn upcoming(&self, channel: Tag, now: DateTime<Utc>) -> &[Event] {
        let timeline = self.timeline(channel);
        match timeline.iter().position(|e| e.is_current_or_upcoming(now)) {
            Some(position) => &timeline[position..],
            None => &[],
        }
    }

    pub fn find_current_or_upcoming(&self, channel: Tag, now: DateTime<Utc>) -> Option<&Event> {
        self.upcoming(channel, now).first()
    }

    /// The event on air at `now`, if any
    pub fn find_current(&self, channel: Tag, now: DateTime<Utc>) -> Option<&Event> {
        self.find_current_or_upcoming(channel, now)
            .filter(|e| e.is_airing(now))
    }

    pub fn find_by_tag(&self, tag: Tag) -> Option<&Event> {
        let (channel, position) = self.index.get(&tag)?;
        self.timelines.get(channel)?.get(*position)
    }

    /// The event on `channel` starting exactly at `start`
    pub fn find_by_time(&self, channel: Tag, start: DateTime<Utc>) -> Option<&Event> {
        let timeline = self.timeline(channel);
        let position = timeline.partition_point(|e| e.start < start);
        timeline.get(position).filter(|e| e.start == start)
    }

    pub fn event_count(&self) -> usize {
        self.index.len()
    }
}
