use tracing::{Level, instrument};

use crate::problem::{coordinate::Coordinate, delivery::DeliveryStop, route::Route};

/// Greedy tour: always drive to the closest stop not yet visited.
///
/// Ties keep the stop that comes first in `deliveries`. O(n²).
#[instrument(skip_all, level = Level::DEBUG)]
pub fn nearest_neighbor(depot: Coordinate, deliveries: &[DeliveryStop]) -> Route {
    let mut unvisited = deliveries.to_vec();
    let mut stops = Vec::with_capacity(deliveries.len());
    let mut current = depot;

    while !unvisited.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_distance = f64::INFINITY;

        for (index, stop) in unvisited.iter().enumerate() {
            let distance = current.haversine_distance(&stop.coordinate()).value();
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_index = index;
            }
        }

        // `remove` keeps the input order of the rest for later tie-breaks
        let nearest = unvisited.remove(nearest_index);
        current = nearest.coordinate();
        stops.push(nearest);
    }

    Route::new(depot, stops)
}
