use anyhow::Result;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::GuideError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub guide: GuideConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// IANA name of the timezone used for times and day boundaries
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// JSON guide file; a demo guide is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

fn default_page_title() -> String {
    "PVR Guide".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 9981,
                page_title: default_page_title(),
            },
            guide: GuideConfig {
                timezone: default_timezone(),
                data_path: None,
            },
        }
    }
}

impl Config {
    /// Read `path`, or write the defaults there and use them if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, contents)?;
            Ok(default_config)
        }
    }

    pub fn display_timezone(&self) -> Result<Tz, GuideError> {
        self.guide
            .timezone
            .parse::<Tz>()
            .map_err(|_| GuideError::UnknownTimezone {
                name: self.guide.timezone.clone(),
            })
    }
}
