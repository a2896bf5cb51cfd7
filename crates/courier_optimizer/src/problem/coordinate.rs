use schemars::JsonSchema;
use serde::Serialize;

use crate::{error::OptimizerError, problem::kilometers::Kilometers};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the earth in degrees.
///
/// Range checks happen in [`Coordinate::new`]; the distance functions
/// assume they were done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, OptimizerError> {
        let coordinate = Coordinate { lat, lon };
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    pub fn validate(&self) -> Result<(), OptimizerError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(OptimizerError::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }

    /// Great-circle distance on a spherical earth of radius [`EARTH_RADIUS_KM`].
    pub fn haversine_distance(&self, to: &Coordinate) -> Kilometers {
        let lat1 = self.lat.to_radians();
        let lat2 = to.lat.to_radians();
        let delta_lat = (to.lat - self.lat).to_radians();
        let delta_lon = (to.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        // atan2 form stays defined when rounding pushes `a` past 1 (antipodes)
        let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());

        Kilometers::new(EARTH_RADIUS_KM * c)
    }

    /// Polar angle of `self` seen from `origin`: `atan2(Δlat, Δlon)` mapped
    /// to `[0, 2π)`, counter-clockwise from due east.
    pub fn angle_from(&self, origin: &Coordinate) -> f64 {
        let angle = (self.lat - origin.lat)
            .atan2(self.lon - origin.lon)
            .rem_euclid(std::f64::consts::TAU);

        // rem_euclid keeps the sign of -0.0 and rounds tiny negatives up to TAU
        if angle == 0.0 || angle >= std::f64::consts::TAU {
            0.0
        } else {
            angle
        }
    }

    /// Linear interpolation in degree space, `ratio` in `[0, 1]`.
    pub fn interpolate(&self, to: &Coordinate, ratio: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + (to.lat - self.lat) * ratio,
            lon: self.lon + (to.lon - self.lon) * ratio,
        }
    }
}

/// Sum of the haversine legs between consecutive points.
pub fn path_length<I>(points: I) -> Kilometers
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut points = points.into_iter();
    let Some(mut previous) = points.next() else {
        return Kilometers::ZERO;
    };

    let mut total = Kilometers::ZERO;
    for point in points {
        total += previous.haversine_distance(&point);
        previous = point;
    }

    total
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::Coord {
            x: coordinate.lon,
            y: coordinate.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            Coordinate::new(90.5, 0.0),
            Err(OptimizerError::InvalidCoordinate {
                lat: 90.5,
                lon: 0.0
            })
        );
        assert!(Coordinate::new(0.0, -180.1).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let a = Coordinate::new_unchecked(9.9281, -84.0907);
        assert_eq!(a.haversine_distance(&a), Kilometers::ZERO);
    }

    #[test]
    fn test_haversine_one_degree_on_equator() {
        let a = Coordinate::new_unchecked(0.0, 0.0);
        let b = Coordinate::new_unchecked(0.0, 1.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

        assert!((a.haversine_distance(&b).value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_antipodal() {
        let a = Coordinate::new_unchecked(0.0, 0.0);
        let b = Coordinate::new_unchecked(0.0, 180.0);
        let distance = a.haversine_distance(&b).value();

        assert!(distance.is_finite());
        assert!((distance - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_angle_from() {
        let depot = Coordinate::new_unchecked(0.0, 0.0);
        let north = Coordinate::new_unchecked(1.0, 0.0);
        let west = Coordinate::new_unchecked(0.0, -1.0);

        assert!((north.angle_from(&depot) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((west.angle_from(&depot) - std::f64::consts::PI).abs() < 1e-12);

        let south = Coordinate::new_unchecked(-1.0, 0.0);
        assert!((south.angle_from(&depot) - 1.5 * std::f64::consts::PI).abs() < 1e-12);

        let east = Coordinate::new_unchecked(-0.0, 1.0);
        assert_eq!(east.angle_from(&depot).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_path_length() {
        let a = Coordinate::new_unchecked(0.0, 0.0);
        let b = Coordinate::new_unchecked(0.0, 1.0);
        let c = Coordinate::new_unchecked(0.0, 3.0);

        assert_eq!(path_length(Vec::new()), Kilometers::ZERO);
        assert_eq!(path_length(vec![a]), Kilometers::ZERO);

        let total = path_length(vec![a, b, c]).value();
        let direct = a.haversine_distance(&c).value();
        assert!((total - direct).abs() < 1e-9);
    }

    #[test]
    fn test_into_geo_point() {
        let point: geo::Point = Coordinate::new_unchecked(9.5, -84.1).into();
        assert_eq!(point.x(), -84.1);
        assert_eq!(point.y(), 9.5);
    }

    proptest! {
        #[test]
        fn haversine_is_symmetric(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let a = Coordinate::new_unchecked(lat1, lon1);
            let b = Coordinate::new_unchecked(lat2, lon2);

            let ab = a.haversine_distance(&b).value();
            let ba = b.haversine_distance(&a).value();

            prop_assert!((ab - ba).abs() < 1e-9);
            prop_assert!(ab >= 0.0);
            prop_assert_eq!(a.haversine_distance(&a).value(), 0.0);
        }
    }
}
