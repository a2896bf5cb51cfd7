use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    problem::{coordinate::Coordinate, delivery::DeliveryStop, route::Route},
    solver::construction::{nearest_neighbor::nearest_neighbor, sweep::sweep},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionStrategy {
    #[default]
    NearestNeighbor,
    Sweep,
}

impl ConstructionStrategy {
    pub fn construct(&self, depot: Coordinate, deliveries: &[DeliveryStop]) -> Route {
        match self {
            ConstructionStrategy::NearestNeighbor => nearest_neighbor(depot, deliveries),
            ConstructionStrategy::Sweep => sweep(depot, deliveries),
        }
    }
}
