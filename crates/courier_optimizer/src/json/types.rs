use jiff::civil::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::OptimizerError,
    pricing::{pricing_model::PricingModel, pricing_params::PricingParams},
    problem::{
        coordinate::Coordinate,
        delivery::{DeliveryStop, DeliveryStopBuilder, Priority},
        kmh::Kmh,
        vehicle::Vehicle,
    },
    solver::{
        construction::construction_strategy::ConstructionStrategy,
        optimize_options::{OptimizeOptions, Threads},
    },
};

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "OptimizationRequest")]
pub struct JsonOptimizationRequest {
    pub id: Option<String>,
    pub depot: JsonLocation,
    pub deliveries: Vec<JsonDelivery>,
    pub vehicles: Vec<JsonVehicle>,
    pub options: Option<JsonOptimizeOptions>,
    pub pricing: Option<PricingParams>,
}

/// `[lon, lat]`, in GeoJSON order.
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Location")]
pub struct JsonLocation {
    pub coordinates: [f64; 2],
}

impl From<Coordinate> for JsonLocation {
    fn from(value: Coordinate) -> Self {
        JsonLocation {
            coordinates: [value.lon(), value.lat()],
        }
    }
}

impl TryFrom<&JsonLocation> for Coordinate {
    type Error = OptimizerError;

    fn try_from(value: &JsonLocation) -> Result<Self, Self::Error> {
        Coordinate::new(value.coordinates[1], value.coordinates[0])
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Delivery")]
pub struct JsonDelivery {
    pub id: String,
    pub location: JsonLocation,
    pub weight: Option<f64>,
    pub address: Option<String>,
    pub priority: Option<Priority>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct JsonVehicle {
    pub id: String,
    /// Omitted for a vehicle without a load limit.
    pub capacity: Option<f64>,
}

#[derive(Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "OptimizeOptions")]
pub struct JsonOptimizeOptions {
    pub max_iterations: Option<usize>,
    pub average_speed_kmh: Option<f64>,
    pub is_express: Option<bool>,
    pub construction: Option<ConstructionStrategy>,
    /// Local departure time deciding rush hour, e.g. `"17:30"`.
    pub departure_time: Option<Time>,
    /// Worker threads; `0` or omitted uses every available core.
    pub threads: Option<usize>,
}

impl From<JsonOptimizeOptions> for OptimizeOptions {
    fn from(value: JsonOptimizeOptions) -> Self {
        let defaults = OptimizeOptions::default();

        OptimizeOptions {
            max_iterations: value.max_iterations.unwrap_or(defaults.max_iterations),
            average_speed: value
                .average_speed_kmh
                .map(Kmh::new)
                .unwrap_or(defaults.average_speed),
            is_express: value.is_express.unwrap_or(defaults.is_express),
            construction: value.construction.unwrap_or(defaults.construction),
            threads: match value.threads {
                None | Some(0) => Threads::Auto,
                Some(1) => Threads::Single,
                Some(n) => Threads::Multi(n),
            },
            departure_time: value.departure_time,
        }
    }
}

/// A validated request, ready for the routing engine.
#[derive(Debug)]
pub struct OptimizationInput {
    pub id: Option<String>,
    pub depot: Coordinate,
    pub deliveries: Vec<DeliveryStop>,
    pub vehicles: Vec<Vehicle>,
    pub options: OptimizeOptions,
    pub pricing: PricingModel,
}

impl JsonOptimizationRequest {
    #[instrument(skip_all, level = "debug")]
    pub fn build(self) -> Result<OptimizationInput, OptimizerError> {
        let depot = Coordinate::try_from(&self.depot)?;

        let deliveries = self
            .deliveries
            .into_iter()
            .map(|delivery| {
                let mut builder = DeliveryStopBuilder::default();

                builder.set_coordinate(Coordinate::try_from(&delivery.location)?);
                builder.set_id(delivery.id);

                if let Some(weight) = delivery.weight {
                    builder.set_weight(weight);
                }

                if let Some(address) = delivery.address {
                    builder.set_address(address);
                }

                if let Some(priority) = delivery.priority {
                    builder.set_priority(priority);
                }

                builder.build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let vehicles = self
            .vehicles
            .into_iter()
            .map(|vehicle| match vehicle.capacity {
                Some(capacity) => Vehicle::with_capacity(vehicle.id, capacity),
                None => Ok(Vehicle::new(vehicle.id)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let options = OptimizeOptions::from(self.options.unwrap_or_default());
        options.validate()?;

        let pricing = PricingModel::new(self.pricing.unwrap_or_default())?;

        Ok(OptimizationInput {
            id: self.id,
            depot,
            deliveries,
            vehicles,
            options,
            pricing,
        })
    }
}
