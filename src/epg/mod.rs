//! EPG collaborators: the event store and the channel registry
//!
//! Both live behind a single [`SharedGuide`] lock. Page handlers take the
//! read guard once, hand `&Guide` to the synchronous renderers and let the
//! guard drop when the handler scope ends, on every return path.

use std::sync::Arc;
use tokio::sync::RwLock;

pub mod channels;
pub mod loader;
pub mod store;

pub use channels::ChannelRegistry;
pub use loader::{demo_guide, load_guide_file, GuideData};
pub use store::EpgStore;

#[derive(Debug, Clone, Default)]
pub struct Guide {
    pub channels: ChannelRegistry,
    pub epg: EpgStore,
}

pub type SharedGuide = Arc<RwLock<Guide>>;

impl Guide {
    pub fn new(channels: ChannelRegistry, epg: EpgStore) -> Self {
        Self { channels, epg }
    }

    pub fn into_shared(self) -> SharedGuide {
        Arc::new(RwLock::new(self))
    }
}
