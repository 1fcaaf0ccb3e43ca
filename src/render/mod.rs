//! Schedule-view compositor
//!
//! Pure, synchronous HTML fragment rendering. Nothing in this module takes a
//! lock or mutates shared state: callers pass in references obtained under
//! their own read guards and receive finished strings.
//!
//! # Components
//!
//! - [`status`]: recording status to label and color
//! - [`sanitize`]: bounded single-character escaping
//! - [`client`]: client profile classification and column widths
//! - [`event`]: one event line
//! - [`schedule`]: overview and day-bucketed week views
//! - [`pvrlog`]: day-grouped recording log
//! - [`chrome`] and [`pages`]: complete documents

use chrono::{DateTime, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

pub mod chrome;
pub mod client;
pub mod event;
pub mod pages;
pub mod pvrlog;
pub mod sanitize;
pub mod schedule;
pub mod status;

pub use client::ClientProfile;
pub use status::{ColorCategory, StatusStyle};

/// Per-render layout decisions, fixed for the duration of one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub profile: ClientProfile,
    pub tz: Tz,
}

impl Layout {
    pub fn new(profile: ClientProfile, tz: Tz) -> Self {
        Self { profile, tz }
    }

    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        self.tz.from_utc_datetime(&instant.naive_utc())
    }

    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date_naive()
    }
}

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// `HH:MM - HH:MM` in the layout's timezone
pub fn format_time_range(start: DateTime<Utc>, stop: DateTime<Utc>, layout: &Layout) -> String {
    format!(
        "{} - {}",
        layout.local(start).format("%H:%M"),
        layout.local(stop).format("%H:%M")
    )
}
