use serde::Serialize;

use crate::problem::{kilometers::Kilometers, route::Route};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedRoute {
    pub vehicle_id: String,
    pub route: Route,
    pub distance_km: Kilometers,
    pub estimated_time_min: u64,
    pub deliveries_count: usize,
    pub current_load: f64,
    pub capacity: Option<f64>,
    pub capacity_exceeded: bool,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub total_routes: usize,
    pub total_deliveries: usize,
    pub total_distance_km: Kilometers,
    pub total_time_min: u64,
    pub avg_deliveries_per_route: f64,
    pub total_price: f64,
    pub is_rush_hour: bool,
    pub routes: Vec<OptimizedRoute>,
}

impl OptimizationReport {
    pub fn new(routes: Vec<OptimizedRoute>, is_rush_hour: bool) -> Self {
        let total_routes = routes.len();
        let total_deliveries = routes.iter().map(|r| r.deliveries_count).sum::<usize>();
        let total_distance_km = routes.iter().map(|r| r.distance_km).sum();
        let total_time_min = routes.iter().map(|r| r.estimated_time_min).sum();
        let total_price = routes.iter().map(|r| r.price).sum::<f64>();

        let avg_deliveries_per_route = if total_routes == 0 {
            0.0
        } else {
            total_deliveries as f64 / total_routes as f64
        };

        OptimizationReport {
            total_routes,
            total_deliveries,
            total_distance_km,
            total_time_min,
            avg_deliveries_per_route,
            total_price: (total_price * 100.0).round() / 100.0,
            is_rush_hour,
            routes,
        }
    }

    pub fn empty(is_rush_hour: bool) -> Self {
        OptimizationReport::new(Vec::new(), is_rush_hour)
    }

    pub fn capacity_exceeded(&self) -> bool {
        self.routes.iter().any(|route| route.capacity_exceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problem::coordinate::Coordinate, test_utils};

    fn optimized_route(vehicle_id: &str, stops: usize, km: f64, minutes: u64) -> OptimizedRoute {
        let depot = Coordinate::new_unchecked(0.0, 0.0);
        let route = Route::new(depot, test_utils::create_stops(vec![(0.0, 1.0); stops]));

        OptimizedRoute {
            vehicle_id: vehicle_id.to_owned(),
            deliveries_count: route.deliveries_count(),
            route,
            distance_km: Kilometers::new(km),
            estimated_time_min: minutes,
            current_load: stops as f64,
            capacity: None,
            capacity_exceeded: false,
            price: 2000.0,
        }
    }

    #[test]
    fn test_aggregates_routes() {
        let report = OptimizationReport::new(
            vec![optimized_route("a", 3, 12.5, 19), optimized_route("b", 2, 7.5, 12)],
            false,
        );

        assert_eq!(report.total_routes, 2);
        assert_eq!(report.total_deliveries, 5);
        assert_eq!(report.total_distance_km, Kilometers::new(20.0));
        assert_eq!(report.total_time_min, 31);
        assert_eq!(report.avg_deliveries_per_route, 2.5);
        assert_eq!(report.total_price, 4000.0);
        assert!(!report.capacity_exceeded());
    }

    #[test]
    fn test_empty_report() {
        let report = OptimizationReport::empty(true);

        assert_eq!(report.total_routes, 0);
        assert_eq!(report.total_deliveries, 0);
        assert_eq!(report.total_distance_km, Kilometers::ZERO);
        assert_eq!(report.avg_deliveries_per_route, 0.0);
        assert!(report.is_rush_hour);
    }
}
