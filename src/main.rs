// SPDX-License-Identifier: PMPL-1.0-or-later

//! pgd-sweep: run the BPDA+EOT attack tool over a list of PGD configurations
//!
//! With no arguments the built-in plan runs: five configurations, one after
//! the other, each wrapped in banners.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use pgd_sweep::attack::{self, SweepPlan};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pgd-sweep")]
#[command(version)]
#[command(about = "Run an attack tool once per PGD configuration, sequentially")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load the sweep plan from a JSON or YAML file
    #[arg(long, global = true, value_name = "FILE")]
    plan: Option<PathBuf>,

    /// Program used to run the attack tool
    #[arg(long, global = true)]
    program: Option<String>,

    /// Attack script passed to the program before the config flag
    #[arg(long, global = true)]
    script: Option<String>,

    /// Directory prefix joined to every configuration file name
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sweep (default)
    Run {
        /// Print each command instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// List configurations with their step labels and commands
    List,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // Fails only if a global subscriber is already set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn resolve_plan(cli: &Cli) -> Result<SweepPlan> {
    let mut plan = match &cli.plan {
        Some(path) => {
            info!(plan = %path.display(), "loading sweep plan");
            SweepPlan::load(path)?
        }
        None => SweepPlan::default(),
    };

    if let Some(program) = &cli.program {
        plan.program = program.clone();
    }
    if let Some(script) = &cli.script {
        plan.args = vec![script.clone()];
    }
    if let Some(dir) = &cli.config_dir {
        plan.config_dir = dir.clone();
    }
    plan.validate()?;
    Ok(plan)
}

fn list<W: Write>(plan: &SweepPlan, out: &mut W) -> Result<()> {
    for (index, entry) in plan.entries.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} (n_steps={})",
            index + 1,
            entry.to_string().bold(),
            entry.step_label()
        )?;
        writeln!(out, "    {}", plan.invocation_for(entry).to_string().dimmed())?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let plan = resolve_plan(&cli)?;

    match cli.command {
        None | Some(Commands::Run { dry_run: false }) => attack::execute_sweep(&plan)?,
        Some(Commands::Run { dry_run: true }) => attack::execute_dry_run(&plan)?,
        Some(Commands::List) => list(&plan, &mut io::stdout())?,
    }

    Ok(())
}

/// Prints the error chain, if any, and maps the outcome to an exit code.
fn report(outcome: Result<()>) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    std::process::exit(report(run(cli)));
}
