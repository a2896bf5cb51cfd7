use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use courier_optimizer::pricing::{
    price_quote::PriceQuote, pricing_model::PricingModel, pricing_params::PricingParams,
};
use jiff::civil::Time;

use crate::parsers;

#[derive(Args)]
pub struct QuoteArgs {
    /// Trip distance in kilometers
    distance_km: f64,

    #[arg(long)]
    express: bool,

    /// Apply the rush hour multiplier
    #[arg(long, conflicts_with = "departure")]
    rush: bool,

    /// Decide rush hour from a local departure time instead
    #[arg(long, value_parser = parsers::parse_time)]
    departure: Option<Time>,

    /// Pricing parameters in JSON; defaults apply to omitted fields
    #[arg(long, env = "COURIER_PRICING")]
    pricing: Option<PathBuf>,
}

pub fn run(args: QuoteArgs) -> anyhow::Result<()> {
    if !args.distance_km.is_finite() || args.distance_km < 0.0 {
        bail!("Distance must be a non-negative number, got {}", args.distance_km);
    }

    let params = match &args.pricing {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<PricingParams>(&content)
                .with_context(|| format!("Invalid pricing in {}", path.display()))?
        }
        None => PricingParams::default(),
    };
    let model = PricingModel::new(params)?;

    let is_rush_hour = args.rush
        || args
            .departure
            .is_some_and(|departure| model.is_rush_hour(departure));

    let quote = model.quote(args.distance_km, args.express, is_rush_hour);
    println!("{}", quote_table(&quote));

    Ok(())
}

fn quote_table(quote: &PriceQuote) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["", "Amount"]);

    table.add_row(vec![
        "Distance (km)".to_owned(),
        format!("{:.2}", quote.distance_km),
    ]);
    table.add_row(vec!["Flat fee".to_owned(), format!("{:.2}", quote.flat_fee)]);
    table.add_row(vec![
        format!("Extra {:.2} km", quote.extra_km),
        format!("{:.2}", quote.extra_km_cost),
    ]);
    table.add_row(vec!["Subtotal".to_owned(), format!("{:.2}", quote.subtotal)]);

    if quote.is_rush_hour {
        table.add_row(vec![
            "Rush hour".to_owned(),
            format!("x{}", quote.rush_hour_multiplier),
        ]);
    }

    if quote.is_express {
        table.add_row(vec![
            "Express".to_owned(),
            format!("x{}", quote.express_multiplier),
        ]);
    }

    table.add_row(vec!["Price".to_owned(), format!("{:.2}", quote.price)]);

    table
}
