use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use peloton_weights::history::DEFAULT_HISTORY_FILE;
use peloton_weights::input::{builtin_roster, load_results, load_roster};
use peloton_weights::model::AttributeTable;
use peloton_weights::report::{json, text};
use peloton_weights::{Forecaster, Result, WeightHistoryStore};

#[derive(Debug, Parser)]
#[command(name = "peloton-weights", version, about)]
struct Cli {
    /// JSON roster; the built-in roster is used when omitted.
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[arg(long, global = true, default_value = DEFAULT_HISTORY_FILE)]
    history: PathBuf,

    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank athletes for one stage, or every known stage.
    Forecast {
        #[arg(long)]
        stage: Option<String>,
    },
    /// Learn new weights for a stage from its results and persist them.
    Record {
        #[arg(long)]
        stage: String,
        /// JSON object mapping athlete name to finishing rank.
        #[arg(long)]
        results: PathBuf,
    },
    /// Show persisted weights.
    History,
}

fn main() {
    peloton_weights::tracing::init_tracing();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let table = resolve_roster(&cli)?;
    let store = WeightHistoryStore::new(&cli.history);
    let mut forecaster = Forecaster::open(table, &store)?;

    match cli.command {
        Command::Forecast { stage } => {
            let forecasts = match stage {
                Some(stage) => vec![forecaster.forecast(&stage)?],
                None => forecaster.forecast_all()?,
            };
            match cli.format {
                Format::Text => print!("{}", text::render_forecasts(&forecasts)),
                Format::Json => println!("{}", json::render_forecasts(&forecasts)?),
            }
        }
        Command::Record { stage, results } => {
            let observation = load_results(&results)?;
            forecaster.record_results(&stage, &observation)?;
            let forecast = forecaster.forecast(&stage)?;
            match cli.format {
                Format::Text => print!("{}", text::render_forecast(&forecast)),
                Format::Json => println!("{}", json::render_forecasts(&[forecast])?),
            }
        }
        Command::History => {
            let history = forecaster.history();
            match cli.format {
                Format::Text => print!("{}", text::render_history(&history)),
                Format::Json => println!("{}", json::render_history(&history)?),
            }
        }
    }
    Ok(())
}

fn resolve_roster(cli: &Cli) -> Result<AttributeTable> {
    match &cli.roster {
        Some(path) => load_roster(path),
        None => builtin_roster(),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
