//! docpipe command-line interface

use clap::{Parser, Subcommand};
use colored::Colorize;
use docpipe_cli::{format_value, load_options, parse_values};
use docpipe_diagnostics::{DP0400, Diagnostic};
use docpipe_eval::{EvaluatorOptions, PipelineEvaluator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// docpipe command-line tool
#[derive(Parser)]
#[command(name = "docpipe")]
#[command(author, version, about = "Evaluate document pipeline functions", long_about = None)]
struct Cli {
    /// Evaluator options file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a function call
    Eval {
        /// Function name, e.g. substring or str_concat
        function: String,
        /// Arguments as JSON literals
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        /// Print the result as tagged JSON
        #[arg(long)]
        json: bool,
    },
    /// List the supported functions and their signatures
    Functions,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = match &cli.config {
        Some(path) => load_options(path)?,
        None => EvaluatorOptions::default(),
    };
    let evaluator = PipelineEvaluator::with_options(options);

    match cli.command {
        Commands::Eval {
            function,
            args,
            json,
        } => {
            let args = parse_values(&args)?;
            let result = evaluator
                .evaluate(&function, args)
                .map_err(|e| e.to_diagnostic())?;
            println!("{}", format_value(&result, json)?);
        }
        Commands::Functions => {
            for signature in evaluator.registry().signatures() {
                let function = signature.function;
                let mut names = vec![function.wire_name()];
                names.extend(function.aliases());
                names.retain(|n| *n != function.name());
                if names.is_empty() {
                    println!("{}", signature.to_string().bold());
                } else {
                    let also = format!("(also {})", names.join(", "));
                    println!("{}  {}", signature.to_string().bold(), also.dimmed());
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let diagnostic = match err.downcast::<Diagnostic>() {
                Ok(diagnostic) => diagnostic,
                Err(other) => Diagnostic::error(DP0400, format!("{:#}", other)),
            };
            eprintln!("{}", diagnostic.to_colored_string());
            ExitCode::FAILURE
        }
    }
}
