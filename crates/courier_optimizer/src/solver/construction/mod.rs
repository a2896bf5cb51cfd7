pub mod construction_strategy;
pub mod nearest_neighbor;
pub mod sweep;
