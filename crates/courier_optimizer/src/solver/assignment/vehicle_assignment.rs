use serde::Serialize;

use crate::problem::{delivery::DeliveryStop, vehicle::Vehicle};

/// Deliveries given to one vehicle by the fleet assigner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleAssignment {
    vehicle_id: String,
    capacity: Option<f64>,
    deliveries: Vec<DeliveryStop>,
    current_load: f64,
    /// Set when the overflow fallback pushed the load past the capacity.
    capacity_exceeded: bool,
}

impl VehicleAssignment {
    pub fn new(vehicle: &Vehicle) -> Self {
        VehicleAssignment {
            vehicle_id: vehicle.id().to_owned(),
            capacity: vehicle.capacity(),
            deliveries: Vec::new(),
            current_load: 0.0,
            capacity_exceeded: false,
        }
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn capacity(&self) -> Option<f64> {
        self.capacity
    }

    pub fn deliveries(&self) -> &[DeliveryStop] {
        &self.deliveries
    }

    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    pub fn capacity_exceeded(&self) -> bool {
        self.capacity_exceeded
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    pub fn fits(&self, weight: f64) -> bool {
        self.current_load + weight <= self.capacity.unwrap_or(f64::INFINITY)
    }

    pub(crate) fn push(&mut self, delivery: DeliveryStop) {
        self.current_load += delivery.weight();
        self.deliveries.push(delivery);

        if let Some(capacity) = self.capacity
            && self.current_load > capacity
        {
            self.capacity_exceeded = true;
        }
    }
}
