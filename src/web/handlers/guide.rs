//! Guide page handlers
//!
//! Each handler takes the guide read guard (and the scheduler guard where
//! needed) for the whole render. Guards drop when the handler returns,
//! including on the early not-found paths.

use axum::{
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::pvr::Scheduler;
use crate::render::{pages, ClientProfile, Layout};
use crate::web::{
    extractors::{parse_day_offset, parse_tag, EventQuery},
    responses::html,
    AppState,
};

/// `/`
pub async fn overview(State(state): State<AppState>, profile: ClientProfile) -> Response {
    let layout = Layout::new(profile, state.tz);
    let guide = state.guide.read().await;
    let scheduler = state.scheduler.read().await;

    debug!("Rendering overview for {} channels ({:?})", guide.channels.len(), profile);
    html(pages::overview_page(
        &state.page_title,
        &guide,
        &*scheduler,
        &layout,
        Utc::now(),
    ))
}

/// `/channel/{tag}`
pub async fn channel(
    State(state): State<AppState>,
    profile: ClientProfile,
    Path(tag): Path<String>,
) -> AppResult<Response> {
    render_channel(&state, profile, &tag, 0).await
}

/// `/channel/{tag}/{offset}`
pub async fn channel_day(
    State(state): State<AppState>,
    profile: ClientProfile,
    Path((tag, offset)): Path<(String, String)>,
) -> AppResult<Response> {
    render_channel(&state, profile, &tag, parse_day_offset(&offset)).await
}

async fn render_channel(
    state: &AppState,
    profile: ClientProfile,
    raw_tag: &str,
    day_offset: usize,
) -> AppResult<Response> {
    let tag = parse_tag("Channel", raw_tag)?;
    let layout = Layout::new(profile, state.tz);
    let guide = state.guide.read().await;

    let channel = guide
        .channels
        .by_tag(tag)
        .ok_or_else(|| AppError::not_found("Channel", raw_tag))?;

    let scheduler = state.scheduler.read().await;
    debug!("Rendering channel {} day offset {}", channel.tag, day_offset);
    Ok(html(pages::channel_page(
        &state.page_title,
        &guide,
        channel,
        day_offset,
        &*scheduler,
        &layout,
        Utc::now(),
    )))
}

/// `/event/{tag}`, optionally submitting a record or cancel command first
pub async fn event(
    State(state): State<AppState>,
    profile: ClientProfile,
    Path(raw_tag): Path<String>,
    query: EventQuery,
) -> AppResult<Response> {
    let tag = parse_tag("Event", &raw_tag)?;
    let layout = Layout::new(profile, state.tz);
    let guide = state.guide.read().await;

    let event = guide
        .epg
        .find_by_tag(tag)
        .ok_or_else(|| AppError::not_found("Event", raw_tag.as_str()))?;

    if let Some(command) = query.command {
        info!("{:?} requested for event {} on channel {}", command, event.tag, event.channel);
        state
            .scheduler
            .write()
            .await
            .submit_command(event.channel, event, command);
    }

    let status = state.scheduler.read().await.status_of(event);
    Ok(html(pages::event_page(
        &state.page_title,
        event,
        status,
        &layout,
    )))
}

/// `/pvrlog`
pub async fn pvrlog(State(state): State<AppState>, profile: ClientProfile) -> Response {
    let layout = Layout::new(profile, state.tz);
    let guide = state.guide.read().await;
    let scheduler = state.scheduler.read().await;

    debug!("Rendering recording log with {} records", scheduler.records().len());
    html(pages::pvrlog_page(
        &state.page_title,
        &guide,
        &*scheduler,
        &layout,
    ))
}
