pub mod fleet_assigner;
pub mod vehicle_assignment;
