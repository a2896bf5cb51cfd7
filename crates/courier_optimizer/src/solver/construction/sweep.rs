use tracing::{Level, instrument};

use crate::problem::{coordinate::Coordinate, delivery::DeliveryStop, route::Route};

/// Angular sweep around the depot.
///
/// Stops are visited by ascending polar angle `atan2(Δlat, Δlon)` taken in
/// `[0, 2π)`, starting due east of the depot and turning counter-clockwise.
/// The tour does not cross itself when the stops surround the depot. Equal
/// angles keep their input order.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn sweep(depot: Coordinate, deliveries: &[DeliveryStop]) -> Route {
    let mut by_angle = deliveries
        .iter()
        .map(|stop| (stop.coordinate().angle_from(&depot), stop))
        .collect::<Vec<_>>();

    // `sort_by` is stable
    by_angle.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    Route::new(
        depot,
        by_angle.into_iter().map(|(_, stop)| stop.clone()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils;

    fn at_angle(degrees: f64) -> (f64, f64) {
        let radians = degrees.to_radians();
        (radians.sin(), radians.cos())
    }

    #[test]
    fn test_orders_by_angle() {
        let depot = Coordinate::new_unchecked(0.0, 0.0);
        let deliveries =
            test_utils::create_stops(vec![at_angle(10.0), at_angle(200.0), at_angle(90.0)]);

        let route = sweep(depot, &deliveries);

        assert_eq!(test_utils::stop_ids(&route), vec!["0", "2", "1"]);
        assert_eq!(route.points().next(), Some(depot));
        assert_eq!(route.points().last(), Some(depot));
    }

    #[test]
    fn test_starts_due_east() {
        let depot = Coordinate::new_unchecked(0.0, 0.0);
        let deliveries =
            test_utils::create_stops(vec![at_angle(350.0), at_angle(0.0), at_angle(180.0)]);

        let route = sweep(depot, &deliveries);

        assert_eq!(test_utils::stop_ids(&route), vec!["1", "2", "0"]);
    }

    #[test]
    fn test_equal_angles_keep_input_order() {
        let depot = Coordinate::new_unchecked(0.0, 0.0);
        let deliveries = test_utils::create_stops(vec![(2.0, 2.0), (1.0, 1.0), (3.0, 3.0)]);

        let route = sweep(depot, &deliveries);

        assert_eq!(test_utils::stop_ids(&route), vec!["0", "1", "2"]);
    }

    proptest! {
        #[test]
        fn visits_every_stop_once(points in test_utils::coordinates_strategy(0..30)) {
            let depot = Coordinate::new_unchecked(9.93, -84.09);
            let deliveries = test_utils::create_stops(points);

            let route = sweep(depot, &deliveries);

            prop_assert!(test_utils::is_permutation(&route, &deliveries));
        }
    }
}
