//! Overview and day-bucketed week views of a channel's timeline
//!
//! The week view walks the timeline once with a [`DayCursor`]. For each of
//! the seven offsets the cursor yields the contiguous run of events whose
//! local weekday equals the target weekday, then resumes where it stopped
//! for the next offset. Target weekdays wrap Saturday to Sunday.
//!
//! The window is seven local dates starting at the date of the first event.
//! Events dated on or after the eighth day are never taken, even when their
//! weekday matches a later bucket.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{day_name, event::render_event, Layout};
use crate::models::{Channel, Event};
use crate::pvr::Scheduler;

pub const OVERVIEW_EVENTS: usize = 3;
pub const DAYS_IN_WEEK: usize = 7;

/// Reduce a requested day offset into the rolling week
pub fn normalize_offset(offset: u32) -> usize {
    offset as usize % DAYS_IN_WEEK
}

/// Forward-only cursor over a timeline slice, grouped by local weekday
pub struct DayCursor<'a> {
    events: &'a [Event],
    position: usize,
    layout: Layout,
    /// First local date past the window
    window_end: Option<NaiveDate>,
}

impl<'a> DayCursor<'a> {
    pub fn new(events: &'a [Event], layout: Layout) -> Self {
        let window_end = events.first().and_then(|e| {
            layout
                .local_date(e.start)
                .checked_add_days(Days::new(DAYS_IN_WEEK as u64))
        });
        Self {
            events,
            position: 0,
            layout,
            window_end,
        }
    }

    /// Local date of the next unconsumed event inside the window
    pub fn peek_date(&self) -> Option<NaiveDate> {
        let end = self.window_end?;
        self.events
            .get(self.position)
            .map(|e| self.layout.local_date(e.start))
            .filter(|date| *date < end)
    }

    /// Local weekday of the next unconsumed event inside the window
    pub fn peek_weekday(&self) -> Option<Weekday> {
        self.peek_date().map(|date| date.weekday())
    }

    /// Consume the run of events starting here whose weekday is `weekday`
    pub fn take_run(&mut self, weekday: Weekday) -> &'a [Event] {
        let start = self.position;
        while self.peek_weekday() == Some(weekday) {
            self.position += 1;
        }
        &self.events[start..self.position]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket<'a> {
    pub offset: usize,
    pub weekday: Weekday,
    pub events: &'a [Event],
}

impl DayBucket<'_> {
    pub fn first_date(&self, layout: &Layout) -> Option<NaiveDate> {
        self.events.first().map(|e| layout.local_date(e.start))
    }
}

/// Partition `upcoming` into seven day buckets anchored at its first event
///
/// Returns no buckets when `upcoming` is empty. Buckets past the end of the
/// timeline, or with no events before the window closes, are present but
/// empty.
pub fn bucketize<'a>(upcoming: &'a [Event], layout: &Layout) -> Vec<DayBucket<'a>> {
    let mut cursor = DayCursor::new(upcoming, *layout);
    let Some(first) = cursor.peek_weekday() else {
        return Vec::new();
    };

    let mut weekday = first;
    let mut buckets = Vec::with_capacity(DAYS_IN_WEEK);
    for offset in 0..DAYS_IN_WEEK {
        buckets.push(DayBucket {
            offset,
            weekday,
            events: cursor.take_run(weekday),
        });
        weekday = weekday.succ();
    }
    buckets
}

/// Up to three lines starting at the current-or-upcoming event
pub fn render_overview<S>(
    upcoming: &[Event],
    current: Option<&Event>,
    scheduler: &S,
    layout: &Layout,
) -> String
where
    S: Scheduler + ?Sized,
{
    upcoming
        .iter()
        .take(OVERVIEW_EVENTS)
        .map(|e| render_event(e, current, scheduler.status_of(e), layout))
        .collect()
}

fn day_header(
    channel: &Channel,
    bucket: &DayBucket<'_>,
    selected: bool,
    layout: &Layout,
) -> String {
    let name = day_name(bucket.weekday);
    let label = match bucket.first_date(layout) {
        Some(date) => format!("{} {}/{}", name, date.day(), date.month()),
        None => name.to_string(),
    };
    let label = if selected {
        format!("<b><u><i>{label}</i></u></b>")
    } else {
        format!("<i>{label}</i>")
    };
    format!(
        "<a href=\"/channel/{}/{}\">{}</a><br>",
        channel.tag, bucket.offset, label
    )
}

/// Seven day headers with the lines of the selected day beneath its header
pub fn render_week<S>(
    channel: &Channel,
    upcoming: &[Event],
    current: Option<&Event>,
    selected_offset: usize,
    scheduler: &S,
    layout: &Layout,
) -> String
where
    S: Scheduler + ?Sized,
{
    let mut body = String::new();
    for bucket in bucketize(upcoming, layout) {
        let selected = bucket.offset == selected_offset;
        body.push_str(&day_header(channel, &bucket, selected, layout));
        if selected {
            for event in bucket.events {
                body.push_str(&render_event(event, current, scheduler.status_of(event), layout));
            }
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordCommand, RecordingStatus, Tag};
    use crate::pvr::PvrScheduler;
    use crate::render::ClientProfile;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chrono_tz::Tz;

    fn layout() -> Layout {
        Layout::new(ClientProfile::Rich, Tz::UTC)
    }

    fn channel() -> Channel {
        Channel {
            tag: 9,
            name: "Nine".to_string(),
            icon: None,
        }
    }

    // 2024-03-08 is a Friday
    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    fn timeline(starts: &[DateTime<Utc>]) -> Vec<Event> {
        starts
            .iter()
            .zip(1 as Tag..)
            .map(|(start, tag)| Event {
                tag,
                channel: 9,
                title: format!("Show {tag}"),
                description: None,
                start: *start,
                duration: 3600,
            })
            .collect()
    }

    #[test]
    fn test_cursor_takes_runs_and_resumes() {
        let events = timeline(&[at(8, 10), at(8, 20), at(9, 9), at(11, 12)]);
        let mut cursor = DayCursor::new(&events, layout());

        assert_eq!(cursor.peek_weekday(), Some(Weekday::Fri));
        assert_eq!(cursor.take_run(Weekday::Fri).len(), 2);
        // A weekday that is not next yields an empty run without moving
        assert!(cursor.take_run(Weekday::Sun).is_empty());
        assert_eq!(cursor.peek_weekday(), Some(Weekday::Sat));
        assert_eq!(cursor.take_run(Weekday::Sat).len(), 1);
        assert_eq!(cursor.peek_weekday(), Some(Weekday::Mon));
        assert_eq!(cursor.take_run(Weekday::Mon).len(), 1);
        assert_eq!(cursor.peek_weekday(), None);
        assert!(cursor.take_run(Weekday::Tue).is_empty());
    }

    #[test]
    fn test_buckets_wrap_past_saturday() {
        // Friday, Saturday, Sunday, Monday
        let events = timeline(&[at(8, 10), at(9, 10), at(10, 10), at(11, 10)]);
        let buckets = bucketize(&events, &layout());

        let weekdays: Vec<Weekday> = buckets.iter().map(|b| b.weekday).collect();
        assert_eq!(
            weekdays,
            vec![
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu
            ]
        );
        let sizes: Vec<usize> = buckets.iter().map(|b| b.events.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_partition_visits_each_event_once() {
        let mut starts = Vec::new();
        let mut t = at(8, 6);
        while t < at(15, 6) {
            starts.push(t);
            t += Duration::minutes(95);
        }
        let events = timeline(&starts);
        let buckets = bucketize(&events, &layout());
        assert_eq!(buckets.len(), DAYS_IN_WEEK);

        let visited: Vec<Tag> = buckets
            .iter()
            .flat_map(|b| b.events.iter().map(|e| e.tag))
            .collect();
        let scanned: Vec<Tag> = events[..visited.len()].iter().map(|e| e.tag).collect();
        assert_eq!(visited, scanned);

        // Events on the eighth day (the following Friday) are beyond the window
        assert!(visited.len() < events.len());
        assert!(events[visited.len()..]
            .iter()
            .all(|e| layout().local_date(e.start).weekday() == Weekday::Fri));

        for bucket in &buckets {
            assert!(bucket
                .events
                .iter()
                .all(|e| layout().local_date(e.start).weekday() == bucket.weekday));
        }
    }

    #[test]
    fn test_missing_day_leaves_empty_bucket() {
        // Friday then Sunday, nothing on Saturday
        let events = timeline(&[at(8, 10), at(10, 10)]);
        let buckets = bucketize(&events, &layout());
        assert_eq!(buckets[1].weekday, Weekday::Sat);
        assert!(buckets[1].events.is_empty());
        assert_eq!(buckets[2].events.len(), 1);
    }

    #[test]
    fn test_events_past_the_window_are_not_bucketed() {
        // Friday 8th, then Saturday 16th which shares a weekday with bucket 1
        let events = timeline(&[at(8, 10), at(16, 10)]);
        let buckets = bucketize(&events, &layout());

        assert_eq!(buckets[0].events.len(), 1);
        assert_eq!(buckets[1].weekday, Weekday::Sat);
        assert!(buckets[1].events.is_empty());
        assert!(buckets.iter().skip(1).all(|b| b.events.is_empty()));

        let body = render_week(&channel(), &events, None, 1, &PvrScheduler::default(), &layout());
        assert!(body.contains("<b><u><i>Saturday</i></u></b>"));
        assert!(!body.contains("16/3"));
        assert!(!body.contains("/event/2\""));
    }

    #[test]
    fn test_sparse_multi_week_timeline() {
        let events = timeline(&[
            at(8, 10),
            at(11, 9),
            at(14, 23),
            at(15, 1),
            at(20, 12),
            at(30, 18),
        ]);
        let layout = layout();
        let buckets = bucketize(&events, &layout);
        let anchor = layout.local_date(events[0].start);

        let visited: Vec<Tag> = buckets
            .iter()
            .flat_map(|b| b.events.iter().map(|e| e.tag))
            .collect();
        assert_eq!(visited, vec![1, 2, 3]);

        for bucket in &buckets {
            for event in bucket.events {
                let date = layout.local_date(event.start);
                assert_eq!(date.weekday(), bucket.weekday);
                assert!((date - anchor).num_days() < DAYS_IN_WEEK as i64);
            }
        }

        let sizes: Vec<usize> = buckets.iter().map(|b| b.events.len()).collect();
        assert_eq!(sizes, vec![1, 0, 0, 1, 0, 0, 1]);
    }

    #[test]
    fn test_empty_timeline_has_no_buckets() {
        assert!(bucketize(&[], &layout()).is_empty());
        let body = render_week(&channel(), &[], None, 0, &PvrScheduler::default(), &layout());
        assert!(body.is_empty());
    }

    #[test]
    fn test_week_renders_only_selected_day() {
        let events = timeline(&[at(8, 10), at(8, 20), at(9, 10), at(10, 10)]);
        let scheduler = PvrScheduler::default();

        let body = render_week(&channel(), &events, None, 1, &scheduler, &layout());
        assert_eq!(body.matches("<a href=\"/channel/9/").count(), DAYS_IN_WEEK);
        assert!(body.contains("<a href=\"/channel/9/1\"><b><u><i>Saturday 9/3</i></u></b></a>"));
        assert!(body.contains("<i>Friday 8/3</i>"));
        assert!(body.contains("<a href=\"/channel/9/6\"><i>Thursday</i></a>"));
        assert!(body.contains("/event/3"));
        assert!(!body.contains("/event/1\""));
        assert!(!body.contains("/event/4\""));

        let body = render_week(&channel(), &events, None, 0, &scheduler, &layout());
        assert!(body.contains("/event/1\""));
        assert!(body.contains("/event/2\""));
        assert!(!body.contains("/event/3\""));
    }

    #[test]
    fn test_overview_stops_after_three_or_timeline_end() {
        let events = timeline(&[at(8, 10), at(8, 11), at(8, 12), at(8, 13)]);
        let mut scheduler = PvrScheduler::default();
        scheduler.submit_command(9, &events[1], RecordCommand::Record);
        assert_eq!(scheduler.status_of(&events[1]), RecordingStatus::Scheduled);

        let body = render_overview(&events, Some(&events[0]), &scheduler, &layout());
        assert_eq!(body.matches("<div><a href").count(), OVERVIEW_EVENTS);
        assert!(!body.contains("/event/4\""));
        assert_eq!(body.matches(">Scheduled<").count(), 1);
        assert_eq!(body.matches("float: left;font-weight:bold").count(), 2);

        let body = render_overview(&events[3..], None, &scheduler, &layout());
        assert_eq!(body.matches("<div><a href").count(), 1);
    }

    #[test]
    fn test_day_boundaries_follow_display_timezone() {
        // 23:30 UTC on Friday is already Saturday in Berlin
        let events = timeline(&[at(8, 20), Utc.with_ymd_and_hms(2024, 3, 8, 23, 30, 0).unwrap()]);
        let berlin = Layout::new(ClientProfile::Rich, chrono_tz::Europe::Berlin);
        let buckets = bucketize(&events, &berlin);
        assert_eq!(buckets[0].events.len(), 1);
        assert_eq!(buckets[1].events.len(), 1);

        let utc = bucketize(&events, &layout());
        assert_eq!(utc[0].events.len(), 2);
    }

    #[test]
    fn test_normalize_offset() {
        assert_eq!(normalize_offset(0), 0);
        assert_eq!(normalize_offset(6), 6);
        assert_eq!(normalize_offset(7), 0);
        assert_eq!(normalize_offset(10), 3);
    }
}
