use tracing::{Level, instrument, warn};

use crate::{
    error::OptimizerError,
    problem::{coordinate::Coordinate, delivery::DeliveryStop, vehicle::Vehicle},
    solver::assignment::vehicle_assignment::VehicleAssignment,
};

/// Splits the deliveries across the fleet.
///
/// Deliveries are taken closest to the depot first. Each goes to the least
/// loaded vehicle that still has room for its weight; when none has room it
/// goes to the least loaded vehicle anyway and that assignment is flagged as
/// over capacity. Ties go to the vehicle listed first. Vehicles left without
/// deliveries are not returned.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn assign(
    deliveries: &[DeliveryStop],
    vehicles: &[Vehicle],
    depot: Coordinate,
) -> Result<Vec<VehicleAssignment>, OptimizerError> {
    if deliveries.is_empty() {
        return Ok(Vec::new());
    }

    if vehicles.is_empty() {
        return Err(OptimizerError::NoVehiclesAvailable {
            deliveries: deliveries.len(),
        });
    }

    let mut assignments = vehicles
        .iter()
        .map(VehicleAssignment::new)
        .collect::<Vec<_>>();

    let mut by_distance = deliveries
        .iter()
        .map(|delivery| (depot.haversine_distance(&delivery.coordinate()), delivery))
        .collect::<Vec<_>>();
    by_distance.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (_, delivery) in by_distance {
        let weight = delivery.weight();

        let fitting = assignments
            .iter()
            .enumerate()
            .filter(|(_, assignment)| assignment.fits(weight))
            .min_by(|(_, a), (_, b)| a.current_load().total_cmp(&b.current_load()))
            .map(|(index, _)| index);

        let index = match fitting {
            Some(index) => index,
            None => {
                let (index, least_loaded) = assignments
                    .iter()
                    .enumerate()
                    .min_by(|(_, a), (_, b)| a.current_load().total_cmp(&b.current_load()))
                    .ok_or(OptimizerError::NoVehiclesAvailable {
                        deliveries: deliveries.len(),
                    })?;

                warn!(
                    delivery = delivery.id(),
                    vehicle = least_loaded.vehicle_id(),
                    load = least_loaded.current_load() + weight,
                    capacity = least_loaded.capacity(),
                    "No vehicle has room left, assigning over capacity"
                );

                index
            }
        };

        assignments[index].push(delivery.clone());
    }

    assignments.retain(|assignment| !assignment.is_empty());

    Ok(assignments)
}
