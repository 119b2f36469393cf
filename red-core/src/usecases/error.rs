use red_entities::position::PositionError;
use thiserror::Error;

use crate::gateways::Notice;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Geolocation is not supported by this platform")]
    CapabilityUnavailable,
    #[error("Unable to get the current position: {0}")]
    RequestFailed(#[from] PositionError),
}

impl Error {
    pub const fn notice(&self) -> Notice {
        match self {
            Self::CapabilityUnavailable => Notice::GeolocationNotSupported,
            Self::RequestFailed(_) => Notice::EnableLocationAccess,
        }
    }
}
