//! Client profile classification
//!
//! Constrained devices announce themselves through the `UA-OS` header or a
//! WAP profile. Everything else, including requests with no such headers,
//! gets the rich layout.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

pub const UA_OS_HEADER: &str = "ua-os";
pub const WAP_PROFILE_HEADER: &str = "x-wap-profile";

const CONSTRAINED_OS_MARKERS: [&str; 2] = ["Windows CE", "Pocket PC"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientProfile {
    Simple,
    #[default]
    Rich,
}

impl ClientProfile {
    pub fn classify(headers: &HeaderMap) -> Self {
        let constrained_os = headers
            .get(UA_OS_HEADER)
            .and_then(|h| h.to_str().ok())
            .is_some_and(|os| CONSTRAINED_OS_MARKERS.iter().any(|m| os.contains(m)));

        if constrained_os || headers.contains_key(WAP_PROFILE_HEADER) {
            ClientProfile::Simple
        } else {
            ClientProfile::Rich
        }
    }

    pub fn is_rich(self) -> bool {
        self == ClientProfile::Rich
    }

    /// Width of the time and channel columns in pixels
    pub fn time_width(self) -> u32 {
        match self {
            ClientProfile::Simple => 80,
            ClientProfile::Rich => 100,
        }
    }

    /// Width of the title column in pixels
    pub fn title_width(self) -> u32 {
        match self {
            ClientProfile::Simple => 100,
            ClientProfile::Rich => 250,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientProfile
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::classify(&parts.headers))
    }
}
