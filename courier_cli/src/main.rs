use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{optimize::OptimizeArgs, quote::QuoteArgs};

mod optimize;
mod parsers;
mod quote;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, env = "COURIER_DEBUG")]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign deliveries to vehicles and optimize every route
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Price a single trip
    #[command(visible_alias = "q")]
    Quote {
        #[command(flatten)]
        args: QuoteArgs,
    },
    /// Print the JSON schema of an optimization request
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Optimize { args }) => optimize::run(args)?,
        Some(Commands::Quote { args }) => quote::run(args)?,
        Some(Commands::Schema) => {
            println!("{}", courier_optimizer::json::schema::generate_json_schema()?)
        }
        None => {}
    }

    Ok(())
}
