mod cli;
mod commands;

use std::io;
use std::path::Path;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use cranio::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref(), Path::new(".")) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Assess {
            measurement,
            common,
        } => commands::run_assess(
            &measurement,
            common.today.as_deref(),
            common.json || config.output.json,
        ),
        Commands::Batch { registry, common } => commands::run_batch(
            &registry,
            common.today.as_deref(),
            common.json || config.output.json,
        ),
        Commands::Tasks {
            registry,
            all,
            acknowledged,
            common,
        } => commands::run_tasks(
            &registry,
            &config,
            all,
            &acknowledged,
            common.today.as_deref(),
            common.json || config.output.json,
        ),
        Commands::Choa { json } => commands::run_choa(json || config.output.json),
        Commands::Curve {
            metric,
            sex,
            age,
            json,
        } => commands::run_curve(&metric, sex.as_deref(), age, json || config.output.json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cranio", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
