use crate::models::{Channel, Tag};

/// Channels in display order
#[derive(Debug, Clone, Default)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
}

impl ChannelRegistry {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    pub fn by_tag(&self, tag: Tag) -> Option<&Channel> {
        self.channels.iter().find(|c| c.tag == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    /// Display name for a channel tag, if registered
    pub fn name_of(&self, tag: Tag) -> Option<&str> {
        self.by_tag(tag).map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
