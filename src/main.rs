use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use cnn_calc::{
    ChainReport, ConfigError, NetworkConfig, TableOptions, is_empty_document, load_config, render_table,
};

#[derive(Parser)]
#[command(
    name = "cnn_calc",
    about = "CNN receptive field calculator",
    long_about = "Computes per-layer output size, receptive field size, receptive field center\nand cumulative stride for a stack of conv/pool layers described in YAML or JSON.",
    version
)]
struct Cli {
    /// Layer config file (.yaml/.yml/.json); read from stdin when omitted
    config: Option<PathBuf>,

    /// Only print the parsed config document
    #[arg(long)]
    parse_only: bool,

    /// Input size used when the config document has no `input_size`
    #[arg(long)]
    input_size: Option<usize>,

    /// Also show the jump and receptive field center columns
    #[arg(long)]
    detailed: bool,

    /// Print the results as JSON instead of a table
    #[arg(long, conflicts_with = "detailed")]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let document = load_config(cli.config.as_deref())?;
    if is_empty_document(&document) {
        log::warn!("配置为空，无可计算的层");
        return Ok(());
    }

    if cli.parse_only {
        let pretty = serde_json::to_string_pretty(&document).map_err(std::io::Error::other)?;
        println!("{pretty}");
        return Ok(());
    }

    let network = NetworkConfig::from_value(&document, cli.input_size)?;
    let layers = network.evaluate()?;

    if cli.json {
        let json = ChainReport::new(&layers)
            .to_json()
            .map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let options = if cli.detailed {
        TableOptions::detailed()
    } else {
        TableOptions::default()
    };
    println!("{}", render_table(&layers, &options));
    Ok(())
}
