//! Complete page documents
//!
//! Each function takes references borrowed from the caller's read guards and
//! returns a finished document. Identifier resolution happens in the web
//! handlers; by the time a page renders, its channel or event exists.

use chrono::{DateTime, Utc};

use super::{
    chrome::{boxed, document},
    event::status_annotation,
    format_time_range, pvrlog, sanitize, schedule, Layout,
};
use crate::epg::Guide;
use crate::models::{Channel, Event, RecordingStatus};
use crate::pvr::Scheduler;

fn channel_heading(channel: &Channel) -> String {
    format!(
        "<strong><a href=\"/channel/{}\">{}</a></strong><br>",
        channel.tag,
        sanitize::escape_channel_name(&channel.name)
    )
}

/// `/`: every channel with its next few events
pub fn overview_page<S>(
    title: &str,
    guide: &Guide,
    scheduler: &S,
    layout: &Layout,
    now: DateTime<Utc>,
) -> String
where
    S: Scheduler + ?Sized,
{
    let mut body = String::new();

    for channel in guide.channels.iter() {
        let mut content = String::from("<div class=\"content3\">");

        if layout.profile.is_rich() {
            content.push_str("<div class=\"logo\">");
            if let Some(icon) = &channel.icon {
                content.push_str(&format!(
                    "<a href=\"/channel/{}\"><img src=\"{}\" height=56px></a>",
                    channel.tag,
                    sanitize::sanitize(icon, '"', "%22", sanitize::DESCRIPTION_CAPACITY)
                ));
            }
            content.push_str("</div>");
        }

        content.push_str("<div class=\"over\">");
        content.push_str(&channel_heading(channel));
        content.push_str(&schedule::render_overview(
            guide.epg.upcoming(channel.tag, now),
            guide.epg.find_current(channel.tag, now),
            scheduler,
            layout,
        ));
        content.push_str("</div></div>");

        body.push_str(&boxed(&content));
    }

    document(title, &body)
}

/// `/channel/{tag}/{offset}`: the channel's week with one day expanded
pub fn channel_page<S>(
    title: &str,
    guide: &Guide,
    channel: &Channel,
    day_offset: usize,
    scheduler: &S,
    layout: &Layout,
    now: DateTime<Utc>,
) -> String
where
    S: Scheduler + ?Sized,
{
    let mut content = String::from("<div class=\"content\">");
    content.push_str(&channel_heading(channel));
    content.push_str(&schedule::render_week(
        channel,
        guide.epg.upcoming(channel.tag, now),
        guide.epg.find_current(channel.tag, now),
        day_offset,
        scheduler,
        layout,
    ));
    content.push_str("</div>");

    document(title, &boxed(&content))
}

/// Submit button offered for an event in the given status
pub fn action_button(status: RecordingStatus) -> &'static str {
    match status {
        RecordingStatus::None => "<input type=\"submit\" name=\"rec\" value=\"Record\">",
        status if status.is_pending() => {
            "<input type=\"submit\" name=\"cancel\" value=\"Cancel recording\">"
        }
        _ => "<input type=\"submit\" name=\"cancel\" value=\"Clear error status\">",
    }
}

/// `/event/{tag}`: event details and a record/cancel form
pub fn event_page(title: &str, event: &Event, status: RecordingStatus, layout: &Layout) -> String {
    let profile = layout.profile;
    let mut content = format!(
        "<div class=\"content\">\
         <div style=\"width: {}px;float: left;font-weight:bold\">{}</div>\
         <div style=\"width: {}px; float: left;font-weight:bold\">{}</div>",
        profile.time_width(),
        format_time_range(event.start, event.stop(), layout),
        profile.title_width(),
        sanitize::escape_title(&event.title),
    );

    match status_annotation(status, "div") {
        Some(annotation) => content.push_str(&annotation),
        None => content.push_str("<br>"),
    }

    let description = event
        .description
        .as_deref()
        .map(sanitize::escape_hover)
        .unwrap_or_default();
    content.push_str(&format!("<br>{description}"));
    content.push_str(&format!(
        "<div style=\"text-align: center\">{}</div></div>",
        action_button(status)
    ));

    let body = format!(
        "<form method=\"get\" action=\"/event/{}\">{}</form>\r\n",
        event.tag,
        boxed(&content)
    );
    document(title, &body)
}

/// `/pvrlog`: all recordings grouped by day
pub fn pvrlog_page<S>(title: &str, guide: &Guide, scheduler: &S, layout: &Layout) -> String
where
    S: Scheduler + ?Sized,
{
    let content = format!(
        "<div class=\"content\">{}<br></div>\r\n",
        pvrlog::render_log(scheduler.records(), guide, layout)
    );
    document(title, &boxed(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epg::{ChannelRegistry, EpgStore};
    use crate::models::RecordCommand;
    use crate::pvr::PvrScheduler;
    use crate::render::ClientProfile;
    use chrono::{Duration, TimeZone};
    use chrono_tz::Tz;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 10, 30, 0).unwrap()
    }

    fn guide() -> Guide {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();
        let events = (0..5u32)
            .map(|i| Event {
                tag: 100 + i,
                channel: 1,
                title: format!("Programme {i}"),
                description: Some(format!("About programme {i}")),
                start: start + Duration::hours(i64::from(i)),
                duration: 3600,
            })
            .collect::<Vec<_>>();
        Guide::new(
            ChannelRegistry::new(vec![
                Channel {
                    tag: 1,
                    name: "One".to_string(),
                    icon: Some("/icons/one.png".to_string()),
                },
                Channel {
                    tag: 2,
                    name: "Two".to_string(),
                    icon: None,
                },
            ]),
            EpgStore::from_events(events),
        )
    }

    fn layout(profile: ClientProfile) -> Layout {
        Layout::new(profile, Tz::UTC)
    }

    fn render_channel(guide: &Guide, tag: u32, day_offset: usize) -> String {
        let channel = guide.channels.by_tag(tag).unwrap();
        channel_page(
            "Guide",
            guide,
            channel,
            day_offset,
            &PvrScheduler::default(),
            &layout(ClientProfile::Rich),
            now(),
        )
    }

    #[test]
    fn test_overview_lists_all_channels() {
        let page = overview_page(
            "Guide",
            &guide(),
            &PvrScheduler::default(),
            &layout(ClientProfile::Rich),
            now(),
        );

        assert!(page.contains("<a href=\"/channel/1\">One</a>"));
        assert!(page.contains("<a href=\"/channel/2\">Two</a>"));
        assert!(page.contains("<img src=\"/icons/one.png\""));
        assert_eq!(page.matches("<div><a href=\"/event/").count(), 3);
        // The event on air is emphasised
        assert!(page.contains("left;font-weight:bold\">10:00 - 11:00"));
    }

    #[test]
    fn test_overview_simple_has_no_logo_column() {
        let page = overview_page(
            "Guide",
            &guide(),
            &PvrScheduler::default(),
            &layout(ClientProfile::Simple),
            now(),
        );
        assert!(!page.contains("class=\"logo\""));
        assert!(!page.contains("title='"));
    }

    #[test]
    fn test_channel_page_with_no_upcoming_events() {
        let guide = guide();
        let page = render_channel(&guide, 2, 0);
        assert!(page.contains("<a href=\"/channel/2\">Two</a>"));
        assert!(!page.contains("/channel/2/0"));
        assert!(page.ends_with("</body></html>\r\n"));
    }

    #[test]
    fn test_channel_page_selected_day() {
        let guide = guide();
        let page = render_channel(&guide, 1, 0);
        assert_eq!(page.matches("/channel/1/").count(), 7);
        assert_eq!(page.matches("<div><a href=\"/event/").count(), 5);

        let page = render_channel(&guide, 1, 1);
        assert_eq!(page.matches("<div><a href=\"/event/").count(), 0);
    }

    #[test]
    fn test_event_page_buttons_follow_status() {
        let guide = guide();
        let event = guide.epg.find_by_tag(101).unwrap();
        let rich = layout(ClientProfile::Rich);

        let page = event_page("Guide", event, RecordingStatus::None, &rich);
        assert!(page.contains("name=\"rec\" value=\"Record\""));
        assert!(page.contains("<form method=\"get\" action=\"/event/101\">"));
        assert!(page.contains("<br>About programme 1"));

        let page = event_page("Guide", event, RecordingStatus::Recording, &rich);
        assert!(page.contains("value=\"Cancel recording\""));
        assert!(page.contains(">Recording</div>"));

        let page = event_page("Guide", event, RecordingStatus::Scheduled, &rich);
        assert!(page.contains("value=\"Cancel recording\""));

        let page = event_page("Guide", event, RecordingStatus::DiskFull, &rich);
        assert!(page.contains("value=\"Clear error status\""));
        assert!(page.contains(">Disk full</div>"));
    }

    #[test]
    fn test_pvrlog_page_uses_scheduler_records() {
        let guide = guide();
        let mut scheduler = PvrScheduler::default();
        let event = guide.epg.find_by_tag(102).unwrap();
        scheduler.submit_command(1, event, RecordCommand::Record);

        let page = pvrlog_page("Guide", &guide, &scheduler, &layout(ClientProfile::Rich));
        assert!(page.contains("Monday, 4/3"));
        assert!(page.contains("12:00 - 13:00"));
        assert!(page.contains(">Scheduled</div>"));
        assert!(page.contains("<a href=\"/event/102\" title='About programme 2'>"));
    }
}
