//! Request parameter parsing
//!
//! Path segments arrive as raw strings so that malformed values can be
//! handled leniently instead of being rejected by axum.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{RecordCommand, Tag};
use crate::render::schedule::normalize_offset;

/// A channel or event tag; anything non-numeric cannot resolve
pub fn parse_tag(resource: &str, raw: &str) -> AppResult<Tag> {
    raw.parse::<Tag>()
        .map_err(|_| AppError::not_found(resource, raw))
}

/// Day offset into the rolling week, `0` when malformed
pub fn parse_day_offset(raw: &str) -> usize {
    raw.parse::<u32>().map_or(0, normalize_offset)
}

/// `?rec=` and `?cancel=` on the event page
///
/// Only the presence of the key matters and the first one in the query wins.
/// Repeated or undecodable parameters never reject the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub command: Option<RecordCommand>,
}

impl EventQuery {
    pub fn from_keys<K: AsRef<str>>(keys: impl IntoIterator<Item = K>) -> Self {
        let command = keys.into_iter().find_map(|key| match key.as_ref() {
            "rec" => Some(RecordCommand::Record),
            "cancel" => Some(RecordCommand::Cancel),
            _ => None,
        });
        Self { command }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for EventQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => Self::from_keys(pairs.iter().map(|(key, _)| key)),
            Err(e) => {
                debug!("Ignoring unreadable event query: {}", e);
                Self::default()
            }
        };
        Ok(query)
    }
}
