use std::path::{Path, PathBuf};

use clap::Parser;
use common::{config::Config, plot::Outcome};
use eyre::Result;
use tracing::{debug, error};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose logs follow the binary's log level
const MODULES: &[&str] = &["common", "throughput_basic", "time_basic"];

/// Renders comparison charts from cipher benchmark results
#[derive(Parser)]
struct Cli {
    /// Directory holding the results CSV, charts are written next to it
    #[arg(short, long, default_value = "results")]
    results_dir: PathBuf,
    /// Plot configuration, the built-in charts when absent
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    log: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!("cipher_bench_plots={log_level}"));

    if !args.log.is_empty() {
        for log in &args.log {
            env_filter = env_filter.add_directive(log.parse()?);
        }
    }

    for module in MODULES {
        if !args.log.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    if let Err(err) = run(&args.results_dir, args.config.as_deref()).await {
        error!("{err:#?}");
        return Err(err);
    }
    Ok(())
}

async fn run(results_dir: &Path, config_file: Option<&Path>) -> Result<()> {
    let default_plots = default_plots::init_plots();
    let config = match config_file {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    let plots = config.plots.unwrap_or(default_plots);

    match common::plot::generate(&plots, results_dir, &config.settings).await? {
        Outcome::MissingInput(path) => debug!("Nothing rendered, {} is missing", path.display()),
        Outcome::Rendered(paths) => debug!("Rendered {paths:?}"),
    }
    Ok(())
}
