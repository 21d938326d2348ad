use clap::{Args, Parser, Subcommand};
use slotauction_harness::{
    BidIntake, Findings, HarnessConfig, read_bid_set, run_all_scenarios, run_experiment,
    write_json,
};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(version, about = "Two-slot ad auction: VCG vs. second-price", long_about = None)]
struct BaseArgs {
    /// JSON harness configuration (defaults apply if omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both mechanisms on one bid set and report the outcomes
    Run {
        #[command(flatten)]
        io: IOArgs,

        /// Experiment name recorded in the report (defaults to the input file stem)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Run the Sybil, revenue-comparison and truthful-bidding suites
    Suite {
        /// The output file (defaults to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct IOArgs {
    /// The bid-set JSON file (defaults to stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// The output file (defaults to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl IOArgs {
    fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        if let Some(path) = &self.input {
            Ok(Box::new(BufReader::new(File::open(path)?)))
        } else {
            Ok(Box::new(stdin().lock()))
        }
    }

    fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        open_output(self.output.as_ref())
    }

    fn default_name(&self) -> String {
        self.input
            .as_ref()
            .and_then(|path| path.file_stem())
            .and_then(|stem| stem.to_str())
            .unwrap_or("stdin")
            .to_string()
    }
}

fn open_output(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    if let Some(path) = path {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    } else {
        Ok(Box::new(stdout().lock()))
    }
}

// stdout carries the report, so logs go to stderr
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

pub fn main() -> anyhow::Result<()> {
    let args = BaseArgs::parse();
    init_tracing(args.log_json);

    let config = match &args.config {
        Some(path) => HarnessConfig::from_path(path)?,
        None => HarnessConfig::default(),
    };
    tracing::debug!(?config, "Configuration loaded");

    match args.command {
        Commands::Run { io, name } => {
            let intake = BidIntake::new(config.mechanism);
            let bids = read_bid_set(io.read()?, &intake)?;
            let name = name.unwrap_or_else(|| io.default_name());
            let report = run_experiment(&name, &bids, config.mechanism)?;
            write_json(io.write()?, &report, config.pretty)?;
        }
        Commands::Suite { output } => {
            let suite = run_all_scenarios(config.mechanism)?;
            let findings = Findings::from_suite(&suite);
            write_json(open_output(output.as_ref())?, &suite, config.pretty)?;
            eprintln!("{findings}");
        }
    }

    Ok(())
}
