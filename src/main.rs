use clap::Parser;
use restaurant_patterns::demo::{self, Options, Pattern};
use restaurant_patterns::{Error, GLOBAL};

#[derive(Parser)]
#[command(name = "restaurant-patterns")]
#[command(about = "Builder, singleton, decorator, facade and composite, served restaurant style", long_about = None)]
#[command(version)]
struct Cli {
    /// Run only these demos (repeatable); output order stays fixed
    #[arg(long, value_enum)]
    only: Vec<Pattern>,

    /// Print order snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Log registry activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("restaurant_patterns=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let options = Options { json: cli.json };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    demo::run(&GLOBAL, &cli.only, &options, &mut out)
}
