//! Day-grouped recording log
//!
//! Records are sorted by start time (stable on ties) and walked once. A new
//! day header is emitted whenever the local calendar day of the start changes.

use chrono::{Datelike, NaiveDate, Weekday};

use super::{day_name, event::status_annotation, format_time_range, sanitize, Layout};
use crate::epg::Guide;
use crate::models::RecordingRecord;

const UNKNOWN_CHANNEL: &str = "Unknown channel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayKey {
    pub weekday: Weekday,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            weekday: date.weekday(),
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

impl DayKey {
    pub fn header(&self) -> String {
        format!(
            "<br><b><i>{}, {}/{}</i></b><br>",
            day_name(self.weekday),
            self.day,
            self.month
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub key: DayKey,
    pub records: Vec<&'a RecordingRecord>,
}

/// Records ordered by start time, ties kept in input order
pub fn sort_records(records: &[RecordingRecord]) -> Vec<&RecordingRecord> {
    let mut sorted: Vec<&RecordingRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.start);
    sorted
}

pub fn group_by_day<'a>(records: &'a [RecordingRecord], layout: &Layout) -> Vec<DayGroup<'a>> {
    let mut groups: Vec<DayGroup<'a>> = Vec::new();

    for record in sort_records(records) {
        let key = DayKey::from(layout.local_date(record.start));
        match groups.last_mut() {
            Some(group) if group.key == key => group.records.push(record),
            _ => groups.push(DayGroup {
                key,
                records: vec![record],
            }),
        }
    }
    groups
}

fn render_record(record: &RecordingRecord, guide: &Guide, layout: &Layout) -> String {
    let profile = layout.profile;

    // Link and hover preview only when the matching EPG event is known
    let link = guide
        .epg
        .find_by_time(record.channel, record.start)
        .filter(|_| profile.is_rich())
        .and_then(|event| {
            event.description.as_deref().map(|description| {
                format!(
                    "<a href=\"/event/{}\" title='{}'>",
                    event.tag,
                    sanitize::escape_hover(description)
                )
            })
        });

    let channel_name = guide
        .channels
        .name_of(record.channel)
        .unwrap_or(UNKNOWN_CHANNEL);

    let mut line = format!(
        "{open}<div style=\"width: {time_width}px;float: left\">{channel}</div>\
         <div style=\"width: {time_width}px;float: left\">{times}</div>\
         <div style=\"width: {title_width}px; float: left\">{title}</div>{close}",
        open = link.as_deref().unwrap_or_default(),
        time_width = profile.time_width(),
        title_width = profile.title_width(),
        channel = sanitize::escape_channel_name(channel_name),
        times = format_time_range(record.start, record.stop, layout),
        title = sanitize::escape_title(record.display_title()),
        close = if link.is_some() { "</a>" } else { "" },
    );

    match status_annotation(record.status, "div") {
        Some(annotation) => line.push_str(&annotation),
        None => line.push_str("<br>"),
    }
    line
}

/// The full recording log body: day headers followed by their records
pub fn render_log(records: &[RecordingRecord], guide: &Guide, layout: &Layout) -> String {
    let mut body = String::new();
    for group in group_by_day(records, layout) {
        body.push_str(&group.key.header());
        for record in group.records {
            body.push_str(&render_record(record, guide, layout));
        }
    }
    body
}
