use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{Level, debug, info, instrument};

use crate::{
    error::OptimizerError,
    pricing::pricing_model::PricingModel,
    problem::{coordinate::Coordinate, delivery::DeliveryStop, vehicle::Vehicle},
    solver::{
        assignment::{fleet_assigner, vehicle_assignment::VehicleAssignment},
        ls::two_opt::TwoOpt,
        optimize_options::OptimizeOptions,
        report::{OptimizationReport, OptimizedRoute},
    },
    timer_debug,
    utils::time::local_time_now,
};

/// Assigns deliveries to vehicles, then builds, improves and prices one
/// route per loaded vehicle.
///
/// The engine holds configuration only, so one instance can serve any
/// number of runs.
#[derive(Clone, Debug)]
pub struct RoutingEngine {
    options: OptimizeOptions,
    pricing: PricingModel,
    two_opt: TwoOpt,
}

impl RoutingEngine {
    pub fn new(options: OptimizeOptions, pricing: PricingModel) -> Result<Self, OptimizerError> {
        options.validate()?;

        Ok(RoutingEngine {
            two_opt: TwoOpt::new(options.max_iterations),
            options,
            pricing,
        })
    }

    pub fn options(&self) -> &OptimizeOptions {
        &self.options
    }

    pub fn pricing(&self) -> &PricingModel {
        &self.pricing
    }

    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn optimize(
        &self,
        depot: Coordinate,
        deliveries: &[DeliveryStop],
        vehicles: &[Vehicle],
    ) -> Result<OptimizationReport, OptimizerError> {
        depot.validate()?;
        for delivery in deliveries {
            delivery.coordinate().validate()?;
        }

        let departure_time = self.options.departure_time.unwrap_or_else(local_time_now);
        let is_rush_hour = self.pricing.is_rush_hour(departure_time);

        if deliveries.is_empty() {
            info!("No deliveries to route");
            return Ok(OptimizationReport::empty(is_rush_hour));
        }

        let assignments = fleet_assigner::assign(deliveries, vehicles, depot)?;
        debug!(
            "Assigned {} deliveries to {} of {} vehicles",
            deliveries.len(),
            assignments.len(),
            vehicles.len()
        );

        let routes = timer_debug!(
            "Route vehicles",
            self.route_assignments(&assignments, depot, is_rush_hour)
        )?;
        let report = OptimizationReport::new(routes, is_rush_hour);

        info!(
            "Finished: routes = {}, deliveries = {}, distance = {:.2} km, time = {} min, price = {:.2}",
            report.total_routes,
            report.total_deliveries,
            report.total_distance_km.value(),
            report.total_time_min,
            report.total_price,
        );

        Ok(report)
    }

    fn route_assignments(
        &self,
        assignments: &[VehicleAssignment],
        depot: Coordinate,
        is_rush_hour: bool,
    ) -> Result<Vec<OptimizedRoute>, OptimizerError> {
        let num_threads = self.options.threads.number_of_threads().min(assignments.len());

        if num_threads <= 1 {
            return Ok(assignments
                .iter()
                .map(|assignment| self.route_assignment(assignment, depot, is_rush_hour))
                .collect());
        }

        debug!("Routing {} vehicles on {} threads", assignments.len(), num_threads);

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("courier-route-{index}"))
            .build()
            .map_err(|error| OptimizerError::ThreadPool(error.to_string()))?;

        // collect on an indexed parallel iterator keeps assignment order
        Ok(thread_pool.install(|| {
            assignments
                .par_iter()
                .map(|assignment| self.route_assignment(assignment, depot, is_rush_hour))
                .collect()
        }))
    }

    pub fn route_assignment(
        &self,
        assignment: &VehicleAssignment,
        depot: Coordinate,
        is_rush_hour: bool,
    ) -> OptimizedRoute {
        let route = self
            .options
            .construction
            .construct(depot, assignment.deliveries());
        let outcome = self.two_opt.improve(route);

        let distance_km = outcome.distance;
        let estimated_time_min = distance_km.travel_minutes(self.options.average_speed);
        let price = self
            .pricing
            .price(distance_km.value(), self.options.is_express, is_rush_hour);

        debug!(
            vehicle = assignment.vehicle_id(),
            deliveries = assignment.deliveries().len(),
            iterations = outcome.iterations,
            converged = outcome.converged,
            "Route: {:.2} km, {} min",
            distance_km.value(),
            estimated_time_min
        );

        OptimizedRoute {
            vehicle_id: assignment.vehicle_id().to_owned(),
            deliveries_count: outcome.route.deliveries_count(),
            route: outcome.route,
            distance_km,
            estimated_time_min,
            current_load: assignment.current_load(),
            capacity: assignment.capacity(),
            capacity_exceeded: assignment.capacity_exceeded(),
            price,
        }
    }
}

/// Runs a single optimization with the default pricing.
pub fn optimize(
    depot: Coordinate,
    deliveries: &[DeliveryStop],
    vehicles: &[Vehicle],
    options: OptimizeOptions,
) -> Result<OptimizationReport, OptimizerError> {
    RoutingEngine::new(options, PricingModel::default())?.optimize(depot, deliveries, vehicles)
}
