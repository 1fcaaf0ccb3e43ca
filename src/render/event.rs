//! Single event line rendering

use super::{format_time_range, sanitize, status, Layout};
use crate::models::{Event, RecordingStatus};

const EMPHASIS: &str = ";font-weight:bold";

/// Link target of an event's detail page
pub fn event_href(event: &Event) -> String {
    format!("/event/{}", event.tag)
}

/// ` title='...'` hover attribute, or empty when it must not be emitted
pub fn hover_attribute(description: Option<&str>, layout: &Layout) -> String {
    match description {
        Some(description) if layout.profile.is_rich() => {
            format!(" title='{}'", sanitize::escape_hover(description))
        }
        _ => String::new(),
    }
}

/// Status annotation wrapped in `element`, or `None` when the status is unresolved
pub fn status_annotation(status: RecordingStatus, element: &str) -> Option<String> {
    status::resolve(status).map(|style| {
        format!(
            "<{element} style=\"font-style:italic;color:{};font-weight:bold\">{}</{element}>",
            style.color(),
            style.label
        )
    })
}

/// Render one event line
///
/// `current` is the event on air for the channel; the line is emphasised when
/// it refers to the same event.
pub fn render_event(
    event: &Event,
    current: Option<&Event>,
    status: RecordingStatus,
    layout: &Layout,
) -> String {
    let is_current = current.is_some_and(|c| c.tag == event.tag);
    let emphasis = if is_current { EMPHASIS } else { "" };

    let mut line = format!(
        "<div><a href=\"{href}\"{hover}>\
         <span style=\"width: {time_width}px;float: left{emphasis}\">{times}</span>\
         <span style=\"width: {title_width}px; float: left{emphasis}\">{title}</span></a>",
        href = event_href(event),
        hover = hover_attribute(event.description.as_deref(), layout),
        time_width = layout.profile.time_width(),
        title_width = layout.profile.title_width(),
        times = format_time_range(event.start, event.stop(), layout),
        title = sanitize::escape_title(&event.title),
    );

    if let Some(annotation) = status_annotation(status, "span") {
        line.push_str(&annotation);
    }
    line.push_str("</div><br>");
    line
}
