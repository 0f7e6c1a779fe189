use std::any::Any;

use clap::{Parser, ValueEnum};
use eyre::Result;
use tracing_chrome::ChromeLayerBuilder;
use tracing_subscriber::{self, fmt::format::FmtSpan, prelude::*, EnvFilter};

use honk_aux::{run, WorkloadArgs};

/// Generate an auxiliary-gate workload and check the auxiliary relation over it.
#[derive(Parser, Debug)]
struct Cli {
    #[clap(flatten)]
    workload: WorkloadArgs,

    /// Output formats
    #[clap(short, long, value_enum)]
    format: Option<Vec<Format>>,
}

#[derive(Debug, Clone, ValueEnum, PartialEq)]
enum Format {
    Default,
    Chrome,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut layers = Vec::new();

    let log_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(log_filter)
        .boxed();
    layers.push(log_layer);

    let mut guards: Vec<Box<dyn Any>> = vec![];

    if let Some(format) = &cli.format {
        if format.contains(&Format::Default) {
            let collector_layer = tracing_subscriber::fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .compact()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .boxed();
            layers.push(collector_layer);
        }
        if format.contains(&Format::Chrome) {
            let (chrome_layer, guard) = ChromeLayerBuilder::new().include_args(true).build();
            layers.push(chrome_layer.boxed());
            guards.push(Box::new(guard));
            tracing::info!("Running tracing-chrome. Files will be saved as trace-<some timestamp>.json and can be viewed in https://ui.perfetto.dev/");
        }
    }

    tracing_subscriber::registry().with(layers).init();

    let report = run(&cli.workload)?;
    match report.check {
        Ok(()) => tracing::info!(
            rows = report.num_rows,
            round_vanishes = report.round_vanishes,
            "auxiliary relation holds"
        ),
        Err(failure) => {
            if let Some(row) = report.tampered_row {
                tracing::info!(row, "tampered row");
            }
            return Err(failure.into());
        }
    }
    Ok(())
}
