use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use comfy_table::{Table, presets::UTF8_FULL};
use courier_optimizer::{
    json::load_request,
    problem::kmh::Kmh,
    solver::{
        construction::construction_strategy::ConstructionStrategy,
        engine::RoutingEngine,
        optimize_options::{OptimizeOptions, Threads},
        report::OptimizationReport,
    },
};
use jiff::civil::Time;
use tracing::{info, warn};

use crate::parsers;

#[derive(Clone, Copy, ValueEnum)]
pub enum Strategy {
    NearestNeighbor,
    Sweep,
}

impl From<Strategy> for ConstructionStrategy {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::NearestNeighbor => ConstructionStrategy::NearestNeighbor,
            Strategy::Sweep => ConstructionStrategy::Sweep,
        }
    }
}

#[derive(Args)]
pub struct OptimizeArgs {
    /// Optimization request in JSON, see `courier schema`
    #[arg(short, long)]
    input: PathBuf,

    #[arg(long, value_enum, env = "COURIER_STRATEGY")]
    strategy: Option<Strategy>,

    /// Maximum 2-opt scans per route
    #[arg(short = 'n', long, env = "COURIER_MAX_ITERATIONS")]
    max_iterations: Option<usize>,

    /// Average travel speed in km/h
    #[arg(long, env = "COURIER_SPEED")]
    speed: Option<f64>,

    #[arg(long)]
    express: bool,

    /// Worker threads (0 uses every core)
    #[arg(short, long, env = "COURIER_THREADS")]
    threads: Option<usize>,

    /// Local departure time, e.g. "17:30"
    #[arg(long, value_parser = parsers::parse_time, env = "COURIER_DEPARTURE")]
    departure: Option<Time>,

    /// Write the full report as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OptimizeArgs {
    fn apply(&self, options: &mut OptimizeOptions) {
        if let Some(strategy) = self.strategy {
            options.construction = strategy.into();
        }

        if let Some(max_iterations) = self.max_iterations {
            options.max_iterations = max_iterations;
        }

        if let Some(speed) = self.speed {
            options.average_speed = Kmh::new(speed);
        }

        if self.express {
            options.is_express = true;
        }

        if let Some(threads) = self.threads {
            options.threads = match threads {
                0 => Threads::Auto,
                1 => Threads::Single,
                n => Threads::Multi(n),
            };
        }

        if let Some(departure) = self.departure {
            options.departure_time = Some(departure);
        }
    }
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let request = load_request(&args.input)?;
    let mut input = request
        .build()
        .with_context(|| format!("Invalid request in {}", args.input.display()))?;

    args.apply(&mut input.options);

    info!(
        "Optimizing {} deliveries with {} vehicles",
        input.deliveries.len(),
        input.vehicles.len()
    );

    let engine = RoutingEngine::new(input.options, input.pricing)?;
    let report = engine.optimize(input.depot, &input.deliveries, &input.vehicles)?;

    if report.capacity_exceeded() {
        warn!("At least one vehicle is loaded beyond its capacity");
    }

    println!("{}", summary_table(&report));

    if let Some(output) = args.output {
        let file = File::create(&output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)?;
        info!("Report written to {}", output.display());
    }

    Ok(())
}

fn summary_table(report: &OptimizationReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Vehicle",
        "Deliveries",
        "Load",
        "Distance (km)",
        "Time (min)",
        "Price",
    ]);

    for route in &report.routes {
        let load = match route.capacity {
            Some(capacity) if route.capacity_exceeded => {
                format!("{} / {} (over)", route.current_load, capacity)
            }
            Some(capacity) => format!("{} / {}", route.current_load, capacity),
            None => format!("{}", route.current_load),
        };

        table.add_row(vec![
            route.vehicle_id.clone(),
            route.deliveries_count.to_string(),
            load,
            format!("{:.2}", route.distance_km.value()),
            route.estimated_time_min.to_string(),
            format!("{:.2}", route.price),
        ]);
    }

    table.add_row(vec![
        format!("Total ({} routes)", report.total_routes),
        report.total_deliveries.to_string(),
        String::new(),
        format!("{:.2}", report.total_distance_km.value()),
        report.total_time_min.to_string(),
        format!("{:.2}", report.total_price),
    ]);

    table
}
