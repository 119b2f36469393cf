use crate::wkt::WktPoint;

/// Form state that carries a `coordinates` field.
pub trait HasCoordinates {
    fn coordinates(&self) -> &str;
    fn set_coordinates(&mut self, coordinates: String);
}

/// A merge update that only touches the `coordinates` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatesPatch {
    pub coordinates: String,
}

impl CoordinatesPatch {
    pub fn merge_into<F>(self, form: &mut F)
    where
        F: HasCoordinates + ?Sized,
    {
        form.set_coordinates(self.coordinates);
    }
}

impl From<WktPoint> for CoordinatesPatch {
    fn from(point: WktPoint) -> Self {
        Self {
            coordinates: point.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::MapPoint;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Form {
        blood_group: String,
        units_required: u32,
        coordinates: String,
    }

    impl HasCoordinates for Form {
        fn coordinates(&self) -> &str {
            &self.coordinates
        }
        fn set_coordinates(&mut self, coordinates: String) {
            self.coordinates = coordinates;
        }
    }

    #[test]
    fn merge_preserves_other_fields() {
        let mut form = Form {
            blood_group: "AB+".into(),
            units_required: 2,
            coordinates: "POINT(1 2)".into(),
        };
        let patch = CoordinatesPatch::from(WktPoint::new(MapPoint::from_lat_lng_deg(
            37.7749, -122.4194,
        )));
        patch.merge_into(&mut form);
        assert_eq!(
            form,
            Form {
                blood_group: "AB+".into(),
                units_required: 2,
                coordinates: "POINT(37.7749 -122.4194)".into(),
            }
        );
        assert_eq!(form.coordinates(), "POINT(37.7749 -122.4194)");
    }
}
