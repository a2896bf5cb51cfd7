pub mod price_quote;
pub mod pricing_model;
pub mod pricing_params;
