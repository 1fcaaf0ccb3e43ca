//! Web layer module
//!
//! Thin axum handlers resolve identifiers, take the shared-state guards and
//! hand plain references to the synchronous page renderers in
//! [`crate::render::pages`].

use anyhow::Result;
use axum::{routing::get, Router};
use chrono_tz::Tz;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::{config::Config, epg::SharedGuide, errors::AppError, pvr::SharedScheduler};

pub mod extractors;
pub mod handlers;
pub mod responses;

pub use extractors::{parse_day_offset, parse_tag, EventQuery};
pub use responses::{handle_error, html};

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
    tz: Tz,
}

impl WebServer {
    pub fn new(config: Config, guide: SharedGuide, scheduler: SharedScheduler) -> Result<Self> {
        let tz = config.display_timezone()?;
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port)
            .parse()
            .map_err(|_| {
                AppError::configuration(format!(
                    "invalid listen address {}:{}",
                    config.web.host, config.web.port
                ))
            })?;

        let app = router(AppState {
            guide,
            scheduler,
            page_title: config.web.page_title,
            tz,
        });

        Ok(Self { app, addr, tz })
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

/// All guide routes with request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::guide::overview))
        .route("/channel/:tag", get(handlers::guide::channel))
        .route("/channel/:tag/:offset", get(handlers::guide::channel_day))
        .route("/event/:tag", get(handlers::guide::event))
        .route("/pvrlog", get(handlers::guide::pvrlog))
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub guide: SharedGuide,
    pub scheduler: SharedScheduler,
    pub page_title: String,
    pub tz: Tz,
}
