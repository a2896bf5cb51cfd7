//! Step-by-step positions along a route, for map animation and simulated
//! driver tracking. The caller pulls the next position whenever it wants
//! to advance the marker.

use serde::Serialize;

use crate::problem::{coordinate::Coordinate, kilometers::Kilometers, route::Route};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Waypoint {
    pub coordinate: Coordinate,
    /// Index of the route leg this waypoint lies on.
    pub leg: usize,
    /// Step within the leg, `0` only for the very first waypoint.
    pub step: usize,
    pub accumulated_distance: Kilometers,
    /// Share of the whole route already travelled, in percent.
    pub progress: f64,
}

pub struct Waypoints {
    points: Vec<Coordinate>,
    leg_distances: Vec<Kilometers>,
    total_distance: Kilometers,
    steps_per_leg: usize,
    leg: usize,
    step: usize,
    travelled: Kilometers,
    started: bool,
}

impl Waypoints {
    pub fn new(route: &Route, steps_per_leg: usize) -> Self {
        let points = route.points().collect::<Vec<_>>();
        let leg_distances = points
            .windows(2)
            .map(|leg| leg[0].haversine_distance(&leg[1]))
            .collect::<Vec<_>>();
        let total_distance = leg_distances.iter().copied().sum();

        Waypoints {
            points,
            leg_distances,
            total_distance,
            steps_per_leg: steps_per_leg.max(1),
            leg: 0,
            step: 0,
            travelled: Kilometers::ZERO,
            started: false,
        }
    }

    fn waypoint(&self, coordinate: Coordinate, accumulated_distance: Kilometers) -> Waypoint {
        let progress = if self.total_distance.is_zero() {
            100.0
        } else {
            accumulated_distance / self.total_distance * 100.0
        };

        Waypoint {
            coordinate,
            leg: self.leg,
            step: self.step,
            accumulated_distance,
            progress,
        }
    }

    fn remaining(&self) -> usize {
        let legs = self.leg_distances.len();
        if !self.started {
            return 1 + legs * self.steps_per_leg;
        }
        if self.leg >= legs {
            return 0;
        }

        (legs - self.leg) * self.steps_per_leg - self.step
    }
}

impl Iterator for Waypoints {
    type Item = Waypoint;

    fn next(&mut self) -> Option<Waypoint> {
        if !self.started {
            self.started = true;
            let first = *self.points.first()?;
            return Some(self.waypoint(first, Kilometers::ZERO));
        }

        let leg_distance = *self.leg_distances.get(self.leg)?;

        self.step += 1;
        let ratio = self.step as f64 / self.steps_per_leg as f64;
        let from = self.points[self.leg];
        let to = self.points[self.leg + 1];

        let (coordinate, accumulated) = if self.step == self.steps_per_leg {
            (to, self.travelled + leg_distance)
        } else {
            (from.interpolate(&to, ratio), self.travelled + leg_distance * ratio)
        };

        let waypoint = self.waypoint(coordinate, accumulated);

        if self.step == self.steps_per_leg {
            self.travelled += leg_distance;
            self.leg += 1;
            self.step = 0;
        }

        Some(waypoint)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Waypoints {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_waypoints_cover_route() {
        let depot = Coordinate::new_unchecked(9.3725, -83.7036);
        let route = Route::new(
            depot,
            test_utils::create_stops(vec![(9.38, -83.70), (9.36, -83.71)]),
        );

        let waypoints = Waypoints::new(&route, 4);
        assert_eq!(waypoints.len(), 1 + 3 * 4);

        let waypoints = waypoints.collect::<Vec<_>>();
        let first = waypoints.first().unwrap();
        let last = waypoints.last().unwrap();

        assert_eq!(first.coordinate, depot);
        assert_eq!(first.progress, 0.0);
        assert_eq!(last.coordinate, depot);
        assert!((last.accumulated_distance.value() - route.distance().value()).abs() < 1e-9);
        assert!((last.progress - 100.0).abs() < 1e-9);
        assert!(
            waypoints
                .windows(2)
                .all(|w| w[0].accumulated_distance <= w[1].accumulated_distance)
        );
    }

    #[test]
    fn test_waypoints_hit_each_stop() {
        let depot = Coordinate::new_unchecked(0.0, 0.0);
        let route = Route::new(depot, test_utils::create_stops(vec![(0.0, 1.0)]));

        let waypoints = Waypoints::new(&route, 2).collect::<Vec<_>>();

        assert_eq!(waypoints.len(), 5);
        assert_eq!(waypoints[1].coordinate, Coordinate::new_unchecked(0.0, 0.5));
        assert_eq!(waypoints[2].coordinate, Coordinate::new_unchecked(0.0, 1.0));
        assert_eq!((waypoints[2].leg, waypoints[2].step), (0, 2));
        assert_eq!((waypoints[3].leg, waypoints[3].step), (1, 1));
    }

    #[test]
    fn test_empty_route_yields_depot_only_legs() {
        let depot = Coordinate::new_unchecked(0.0, 0.0);
        let route = Route::new(depot, Vec::new());

        let waypoints = Waypoints::new(&route, 0).collect::<Vec<_>>();

        assert_eq!(waypoints.len(), 2);
        assert!(waypoints.iter().all(|w| w.coordinate == depot));
        assert_eq!(waypoints[1].progress, 100.0);
    }
}
