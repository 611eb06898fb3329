use clap::Parser;
use funcplot::{run, task::Task};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// funcplot samples a compiled-in expression over its interval, plots it and
/// exports the samples as XML under `results/`.
///
/// The task is fixed at build time; there are no options besides `--help`
/// and `--version`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();

    tracing_subscriber::registry().with(EnvFilter::new("funcplot=info"))
                                  .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                                  .init();

    let task = Task::default();
    if let Err(e) = run(&task) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
