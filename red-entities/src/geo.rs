/// A geographical location in degrees.
///
/// The coordinates are taken as they are delivered by the
/// platform. No range checks are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl From<(f64, f64)> for MapPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::from_lat_lng_deg(lat, lng)
    }
}
