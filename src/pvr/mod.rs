//! PVR scheduler collaborator
//!
//! The renderers only read recording state through [`Scheduler`]. The
//! in-memory [`PvrScheduler`] keeps one record per (channel, start) pair and
//! applies each submitted command exactly once; there is no retry.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{Event, RecordCommand, RecordingRecord, RecordingStatus, Tag};

pub trait Scheduler {
    /// Recording status of an EPG event, `RecordingStatus::None` when not scheduled
    fn status_of(&self, event: &Event) -> RecordingStatus;

    /// Apply a record or cancel command for `event` on `channel`
    fn submit_command(&mut self, channel: Tag, event: &Event, command: RecordCommand);

    /// All recording records, in no particular order
    fn records(&self) -> &[RecordingRecord];
}

pub type SharedScheduler = Arc<RwLock<PvrScheduler>>;

#[derive(Debug, Clone, Default)]
pub struct PvrScheduler {
    records: Vec<RecordingRecord>,
    next_id: u32,
}

impl PvrScheduler {
    pub fn new(records: Vec<RecordingRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().map_or(1, |id| id + 1);
        Self { records, next_id }
    }

    pub fn into_shared(self) -> SharedScheduler {
        Arc::new(RwLock::new(self))
    }

    fn position_of(&self, channel: Tag, event: &Event) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.channel == channel && r.start == event.start)
    }
}

impl Scheduler for PvrScheduler {
    fn status_of(&self, event: &Event) -> RecordingStatus {
        self.position_of(event.channel, event)
            .map_or(RecordingStatus::None, |position| self.records[position].status)
    }

    fn submit_command(&mut self, channel: Tag, event: &Event, command: RecordCommand) {
        match (command, self.position_of(channel, event)) {
            (RecordCommand::Record, None) => {
                let id = self.next_id;
                self.next_id += 1;
                self.records.push(RecordingRecord {
                    id,
                    channel,
                    title: Some(event.title.clone()),
                    start: event.start,
                    stop: event.stop(),
                    status: RecordingStatus::Scheduled,
                });
                info!("Scheduled recording {} for event {} on channel {}", id, event.tag, channel);
            }
            (RecordCommand::Record, Some(_)) => {
                debug!("Event {} already has a recording, ignoring record command", event.tag);
            }
            (RecordCommand::Cancel, Some(position)) => {
                let removed = self.records.remove(position);
                info!(
                    "Cancelled recording {} ({:?}) for event {}",
                    removed.id, removed.status, event.tag
                );
            }
            (RecordCommand::Cancel, None) => {
                debug!("Event {} has no recording, ignoring cancel command", event.tag);
            }
        }
    }

    fn records(&self) -> &[RecordingRecord] {
        &self.records
    }
}
