use jiff::civil::Time;

use crate::{
    error::OptimizerError,
    pricing::{price_quote::PriceQuote, pricing_params::PricingParams},
};

/// Tiered distance pricing: a flat fee up to a threshold, a per-km rate
/// beyond it, then the rush hour and express multipliers in that order.
#[derive(Clone, Debug)]
pub struct PricingModel {
    params: PricingParams,
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

impl PricingModel {
    pub fn new(params: PricingParams) -> Result<Self, OptimizerError> {
        params.validate()?;
        Ok(PricingModel { params })
    }

    pub fn params(&self) -> &PricingParams {
        &self.params
    }

    pub fn is_rush_hour(&self, time: Time) -> bool {
        self.params.rush_hour.contains(time)
    }

    pub fn price(&self, distance_km: f64, is_express: bool, is_rush_hour: bool) -> f64 {
        self.quote(distance_km, is_express, is_rush_hour).price
    }

    pub fn quote(&self, distance_km: f64, is_express: bool, is_rush_hour: bool) -> PriceQuote {
        let params = &self.params;

        // The threshold itself still belongs to the flat tier.
        let extra_km = if distance_km <= params.flat_distance_km {
            0.0
        } else {
            distance_km - params.flat_distance_km
        };
        let extra_km_cost = extra_km * params.per_km;
        let subtotal = params.flat_fee + extra_km_cost;

        let rush_hour_multiplier = if is_rush_hour {
            params.rush_hour_multiplier
        } else {
            1.0
        };
        let express_multiplier = if is_express {
            params.express_multiplier
        } else {
            1.0
        };

        let mut price = subtotal;
        price *= rush_hour_multiplier;
        price *= express_multiplier;

        PriceQuote {
            distance_km,
            flat_fee: params.flat_fee,
            extra_km,
            extra_km_cost: round_cents(extra_km_cost),
            subtotal: round_cents(subtotal),
            rush_hour_multiplier,
            express_multiplier,
            is_rush_hour,
            is_express,
            price: round_cents(price),
        }
    }
}

impl Default for PricingModel {
    fn default() -> Self {
        PricingModel {
            params: PricingParams::default(),
        }
    }
}
