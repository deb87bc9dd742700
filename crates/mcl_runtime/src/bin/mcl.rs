//! mcl CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use mcl_foundation::IntegerType;
use mcl_language::PipelineConfig;
use mcl_runtime::{Runner, RuntimeResult, load_source};
use tracing_subscriber::EnvFilter;

/// Evaluate mcl programs: `;`-terminated sums and differences of integers.
#[derive(Debug, Parser)]
#[command(name = "mcl", version, about, long_about = None)]
struct Cli {
    /// Source files to evaluate, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print the token stream instead of evaluating
    #[arg(long)]
    tokens: bool,

    /// Print the expression tree of each statement instead of evaluating
    #[arg(long)]
    ast: bool,

    /// Integer type of literals (i8 ... i128, isize, u8 ... u128, usize)
    #[arg(long = "type", value_name = "TYPE", default_value = "u64")]
    literal_type: IntegerType,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.render());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> RuntimeResult<()> {
    let runner = Runner::new(PipelineConfig::default().with_literal_type(cli.literal_type));

    for path in &cli.files {
        let name = path.display().to_string();
        let source = load_source(path)?;

        if cli.tokens {
            print!("{}", runner.tokens(&name, &source)?);
        }
        if cli.ast {
            print!("{}", runner.trees(&name, &source)?);
        }
        if !cli.tokens && !cli.ast {
            for value in runner.run_source(&name, &source)? {
                println!("{value}");
            }
        }
    }

    Ok(())
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "warn",
        1 => "mcl_runtime=debug,mcl_language=debug",
        _ => "mcl_runtime=trace,mcl_language=trace",
    }
}
