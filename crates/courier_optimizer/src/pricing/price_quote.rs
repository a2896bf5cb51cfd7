use serde::Serialize;

/// Itemized price of a trip, as shown to the customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub distance_km: f64,
    pub flat_fee: f64,
    pub extra_km: f64,
    pub extra_km_cost: f64,
    pub subtotal: f64,
    pub rush_hour_multiplier: f64,
    pub express_multiplier: f64,
    pub is_rush_hour: bool,
    pub is_express: bool,
    pub price: f64,
}
