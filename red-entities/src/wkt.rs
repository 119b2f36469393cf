//! Well-known text (WKT) points.
//!
//! Points are stored as `POINT(<lat> <lng>)`. Note that the latitude
//! comes first, unlike the `x y` axis order of the OGC standard.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::geo::MapPoint;

const KEYWORD: &str = "POINT";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WktPoint(MapPoint);

impl WktPoint {
    pub const fn new(pos: MapPoint) -> Self {
        Self(pos)
    }

    pub const fn pos(self) -> MapPoint {
        self.0
    }
}

impl From<MapPoint> for WktPoint {
    fn from(pos: MapPoint) -> Self {
        Self(pos)
    }
}

impl fmt::Display for WktPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (lat, lng) = self.0.to_lat_lng_deg();
        write!(f, "{KEYWORD}({} {})", Number(lat), Number(lng))
    }
}

/// Formats a number like ECMAScript's `Number::toString`:
/// shortest round-trip digits, `-0` as `0` and exponent
/// notation below `1e-6` and from `1e21` on.
struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("NaN");
        }
        if x == 0.0 {
            return f.write_str("0");
        }
        if x.is_sign_negative() {
            f.write_str("-")?;
        }
        let x = x.abs();
        if x.is_infinite() {
            return f.write_str("Infinity");
        }
        let scientific = format!("{x:e}");
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return write!(f, "{x}");
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return write!(f, "{x}");
        };
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);
        // position of the decimal point relative to the digits
        let n = exponent + 1;
        let zeros = |count: i32| "0".repeat(usize::try_from(count).unwrap_or_default());
        if k <= n && n <= 21 {
            write!(f, "{digits}{}", zeros(n - k))
        } else if 0 < n && n <= 21 {
            let (int, frac) = digits.split_at(usize::try_from(n).unwrap_or_default());
            write!(f, "{int}.{frac}")
        } else if -6 < n && n <= 0 {
            write!(f, "0.{}{digits}", zeros(-n))
        } else {
            let e = n - 1;
            let sign = if e < 0 { '-' } else { '+' };
            let (first, rest) = digits.split_at(1);
            if rest.is_empty() {
                write!(f, "{first}e{sign}{}", e.abs())
            } else {
                write!(f, "{first}.{rest}e{sign}{}", e.abs())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WktPointParseError {
    #[error("Expected 'POINT(<lat> <lng>)'")]
    Syntax,
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lng(String),
}

impl FromStr for WktPoint {
    type Err = WktPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .get(..KEYWORD.len())
            .filter(|keyword| keyword.eq_ignore_ascii_case(KEYWORD))
            .map(|_| s[KEYWORD.len()..].trim_start())
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(WktPointParseError::Syntax)?;
        let mut numbers = inner.split_whitespace();
        let (Some(lat), Some(lng), None) = (numbers.next(), numbers.next(), numbers.next()) else {
            return Err(WktPointParseError::Syntax);
        };
        let lat = lat
            .parse::<f64>()
            .map_err(|_| WktPointParseError::Lat(lat.to_owned()))?;
        let lng = lng
            .parse::<f64>()
            .map_err(|_| WktPointParseError::Lng(lng.to_owned()))?;
        Ok(Self(MapPoint::from_lat_lng_deg(lat, lng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wkt(lat: f64, lng: f64) -> String {
        WktPoint::new(MapPoint::from_lat_lng_deg(lat, lng)).to_string()
    }

    #[test]
    fn format_platform_coordinates() {
        assert_eq!(wkt(37.7749, -122.4194), "POINT(37.7749 -122.4194)");
        assert_eq!(wkt(48.137_154, 11.576_124), "POINT(48.137154 11.576124)");
    }

    #[test]
    fn format_integral_degrees_without_fraction() {
        assert_eq!(wkt(10.0, -20.0), "POINT(10 -20)");
        assert_eq!(wkt(0.0, 0.0), "POINT(0 0)");
    }

    #[test]
    fn format_negative_zero_as_zero() {
        assert_eq!(wkt(-0.0, 1e-7), "POINT(0 1e-7)");
    }

    #[test]
    fn format_extreme_magnitudes_in_exponent_notation() {
        assert_eq!(wkt(1.5e-7, -2.5e-10), "POINT(1.5e-7 -2.5e-10)");
        assert_eq!(wkt(0.000_001, -0.000_012_3), "POINT(0.000001 -0.0000123)");
        assert_eq!(wkt(1e21, 1e20), "POINT(1e+21 100000000000000000000)");
        assert_eq!(wkt(1.25e22, 0.1), "POINT(1.25e+22 0.1)");
    }

    #[test]
    fn format_non_finite_numbers() {
        assert_eq!(
            wkt(f64::NAN, f64::NEG_INFINITY),
            "POINT(NaN -Infinity)"
        );
    }

    #[test]
    fn parse_exponent_notation() {
        let p = "POINT(1e-7 1e+21)".parse::<WktPoint>().unwrap();
        assert_eq!(p.pos().to_lat_lng_deg(), (1e-7, 1e21));
    }

    #[test]
    fn format_without_range_checks() {
        assert_eq!(wkt(91.5, 200.0), "POINT(91.5 200)");
    }

    #[test]
    fn parse_formatted_point() {
        let p = "POINT(37.7749 -122.4194)".parse::<WktPoint>().unwrap();
        assert_eq!(p.pos().to_lat_lng_deg(), (37.7749, -122.4194));
    }

    #[test]
    fn parse_with_lenient_whitespace_and_case() {
        let p = "  point ( 1.5   -2 ) ".parse::<WktPoint>().unwrap();
        assert_eq!(p.pos().to_lat_lng_deg(), (1.5, -2.0));
    }

    #[test]
    fn reject_malformed_points() {
        assert_eq!("".parse::<WktPoint>(), Err(WktPointParseError::Syntax));
        assert_eq!("POINT()".parse::<WktPoint>(), Err(WktPointParseError::Syntax));
        assert_eq!("POINT(1 2 3)".parse::<WktPoint>(), Err(WktPointParseError::Syntax));
        assert_eq!("POINT(1 2".parse::<WktPoint>(), Err(WktPointParseError::Syntax));
        assert_eq!("LINESTRING(1 2)".parse::<WktPoint>(), Err(WktPointParseError::Syntax));
        assert_eq!(
            "POINT(north 2)".parse::<WktPoint>(),
            Err(WktPointParseError::Lat("north".into()))
        );
        assert_eq!(
            "POINT(1 east)".parse::<WktPoint>(),
            Err(WktPointParseError::Lng("east".into()))
        );
    }
}
