use std::iter;

use serde::Serialize;

use crate::problem::{
    coordinate::{Coordinate, path_length},
    delivery::DeliveryStop,
    kilometers::Kilometers,
};

/// Closed tour `depot -> stops... -> depot`.
///
/// The depot is stored once and emitted at both ends by [`Route::points`],
/// so a route cannot start or end anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    depot: Coordinate,
    stops: Vec<DeliveryStop>,
}

impl Route {
    pub fn new(depot: Coordinate, stops: Vec<DeliveryStop>) -> Self {
        Route { depot, stops }
    }

    pub fn depot(&self) -> Coordinate {
        self.depot
    }

    pub fn stops(&self) -> &[DeliveryStop] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<DeliveryStop> {
        self.stops
    }

    pub fn deliveries_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of points including both depot visits.
    pub fn point_count(&self) -> usize {
        self.stops.len() + 2
    }

    pub fn points(&self) -> impl Iterator<Item = Coordinate> + '_ {
        iter::once(self.depot)
            .chain(self.stops.iter().map(DeliveryStop::coordinate))
            .chain(iter::once(self.depot))
    }

    pub fn distance(&self) -> Kilometers {
        path_length(self.points())
    }

    /// Polyline for map rendering, `x = lon`, `y = lat`.
    pub fn to_line_string(&self) -> geo::LineString<f64> {
        geo::LineString::from(self.points().map(geo::Coord::from).collect::<Vec<_>>())
    }
}
