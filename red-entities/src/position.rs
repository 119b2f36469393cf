use std::time::Duration;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;
use strum::{Display, IntoStaticStr};
use thiserror::Error;

use crate::geo::MapPoint;

/// A position as resolved by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub pos: MapPoint,
    /// Accuracy in meters, if reported.
    pub accuracy: Option<f64>,
}

impl From<MapPoint> for Position {
    fn from(pos: MapPoint) -> Self {
        Self {
            pos,
            accuracy: None,
        }
    }
}

pub type PositionErrorCodePrimitive = u16;

/// The reason why a position request failed.
///
/// The numbering follows the W3C Geolocation API.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Display, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionErrorCode {
    PermissionDenied    = 1,
    PositionUnavailable = 2,
    Timeout             = 3,
}

#[derive(Debug, Error)]
#[error("Invalid position error code: {0}")]
pub struct InvalidPositionErrorCode(pub PositionErrorCodePrimitive);

impl TryFrom<PositionErrorCodePrimitive> for PositionErrorCode {
    type Error = InvalidPositionErrorCode;
    fn try_from(from: PositionErrorCodePrimitive) -> Result<Self, Self::Error> {
        Self::from_u16(from).ok_or(InvalidPositionErrorCode(from))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct PositionError {
    pub code: PositionErrorCode,
    pub message: String,
}

impl PositionError {
    pub fn new(code: PositionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Options for a single position request.
///
/// The default corresponds to the defaults of the platform:
/// low accuracy, no timeout and no cached positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Option<Duration>,
    pub maximum_age: Option<Duration>,
}

impl PositionOptions {
    pub fn timeout_millis(&self) -> Option<u32> {
        self.timeout.map(saturating_millis)
    }

    pub fn maximum_age_millis(&self) -> Option<u32> {
        self.maximum_age.map(saturating_millis)
    }
}

fn saturating_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_error_code_from_primitive() {
        assert_eq!(
            PositionErrorCode::try_from(1_u16).unwrap(),
            PositionErrorCode::PermissionDenied
        );
        assert_eq!(
            PositionErrorCode::try_from(2_u16).unwrap(),
            PositionErrorCode::PositionUnavailable
        );
        assert_eq!(
            PositionErrorCode::try_from(3_u16).unwrap(),
            PositionErrorCode::Timeout
        );
        assert!(PositionErrorCode::try_from(0_u16).is_err());
        assert!(PositionErrorCode::try_from(4_u16).is_err());
    }

    #[test]
    fn position_error_display() {
        let err = PositionError::new(PositionErrorCode::PermissionDenied, "User denied Geolocation");
        assert_eq!(err.to_string(), "PERMISSION_DENIED: User denied Geolocation");
        let name: &'static str = PositionErrorCode::Timeout.into();
        assert_eq!(name, "TIMEOUT");
    }

    #[test]
    fn default_options_match_platform_defaults() {
        let options = PositionOptions::default();
        assert!(!options.enable_high_accuracy);
        assert_eq!(options.timeout_millis(), None);
        assert_eq!(options.maximum_age_millis(), None);
    }

    #[test]
    fn option_durations_saturate() {
        let options = PositionOptions {
            enable_high_accuracy: true,
            timeout: Some(Duration::from_secs(10)),
            maximum_age: Some(Duration::from_secs(u64::MAX)),
        };
        assert_eq!(options.timeout_millis(), Some(10_000));
        assert_eq!(options.maximum_age_millis(), Some(u32::MAX));
    }
}
