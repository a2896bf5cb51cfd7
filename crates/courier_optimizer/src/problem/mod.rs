pub mod coordinate;
pub mod delivery;
pub mod kilometers;
pub mod kmh;
pub mod route;
pub mod vehicle;
pub mod waypoints;
