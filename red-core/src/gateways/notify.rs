use std::fmt;

/// Blocking notices shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    GeolocationNotSupported,
    EnableLocationAccess,
}

impl Notice {
    pub const fn message(self) -> &'static str {
        match self {
            Self::GeolocationNotSupported => "Geolocation not supported",
            Self::EnableLocationAccess => "Please enable location access.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub trait NotificationGateway {
    fn notify(&self, notice: Notice);
}
