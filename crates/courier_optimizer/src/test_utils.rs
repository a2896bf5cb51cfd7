use std::ops::Range;

use proptest::prelude::*;

use crate::problem::{
    coordinate::Coordinate,
    delivery::{DeliveryStop, DeliveryStopBuilder},
    route::Route,
    vehicle::Vehicle,
};

/// Stops with ids `"0"`, `"1"`, ... at the given `(lat, lon)` pairs.
pub fn create_stops(coordinates: Vec<(f64, f64)>) -> Vec<DeliveryStop> {
    coordinates
        .into_iter()
        .enumerate()
        .map(|(index, (lat, lon))| {
            DeliveryStop::new(index.to_string(), Coordinate::new_unchecked(lat, lon))
        })
        .collect()
}

pub fn create_weighted_stop(id: &str, (lat, lon): (f64, f64), weight: f64) -> DeliveryStop {
    let mut builder = DeliveryStopBuilder::default();
    builder
        .set_id(id.to_owned())
        .set_coordinate(Coordinate::new_unchecked(lat, lon))
        .set_weight(weight);
    builder.build().unwrap()
}

/// Vehicles with ids `"0"`, `"1"`, ...; `None` is an unbounded vehicle.
pub fn create_vehicles(capacities: Vec<Option<f64>>) -> Vec<Vehicle> {
    capacities
        .into_iter()
        .enumerate()
        .map(|(index, capacity)| match capacity {
            Some(capacity) => Vehicle::with_capacity(index.to_string(), capacity).unwrap(),
            None => Vehicle::new(index.to_string()),
        })
        .collect()
}

pub fn stop_ids(route: &Route) -> Vec<&str> {
    route.stops().iter().map(|stop| stop.id()).collect()
}

pub fn stop_coordinates(route: &Route) -> Vec<(f64, f64)> {
    route
        .stops()
        .iter()
        .map(|stop| (stop.coordinate().lat(), stop.coordinate().lon()))
        .collect()
}

/// True when the route visits exactly the given deliveries, each once.
pub fn is_permutation(route: &Route, deliveries: &[DeliveryStop]) -> bool {
    let mut visited = stop_ids(route);
    let mut expected = deliveries.iter().map(|d| d.id()).collect::<Vec<_>>();
    visited.sort_unstable();
    expected.sort_unstable();

    visited == expected
}

/// Points scattered around San José, Costa Rica.
pub fn coordinates_strategy(size: Range<usize>) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((9.80f64..10.05, -84.25f64..-83.95), size)
}

/// Depot, eight weighted clients and three vehicles in San José, Costa Rica.
pub fn costa_rica_fixture() -> (Coordinate, Vec<DeliveryStop>, Vec<Vehicle>) {
    let depot = Coordinate::new_unchecked(9.9281, -84.0907);

    let deliveries = vec![
        create_weighted_stop("A", (9.9300, -84.0850), 5.0),
        create_weighted_stop("B", (9.9250, -84.0900), 3.0),
        create_weighted_stop("C", (9.9400, -84.0950), 4.0),
        create_weighted_stop("D", (9.9150, -84.0800), 2.0),
        create_weighted_stop("E", (9.9200, -84.1000), 6.0),
        create_weighted_stop("F", (9.9350, -84.0750), 3.0),
        create_weighted_stop("G", (9.9100, -84.0950), 4.0),
        create_weighted_stop("H", (9.9450, -84.0850), 2.0),
    ];

    let vehicles = create_vehicles(vec![Some(15.0), Some(15.0), Some(20.0)]);

    (depot, deliveries, vehicles)
}
