// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack sweep orchestration

pub mod executor;
pub mod launcher;
pub mod profile;

use anyhow::Result;
use std::io;

pub use executor::SweepExecutor;
pub use launcher::{DryRunLauncher, Launcher, ProcessLauncher};
pub use profile::SweepPlan;

/// Run every entry of the plan against the real attack tool
pub fn execute_sweep(plan: &SweepPlan) -> Result<()> {
    SweepExecutor::new(plan, ProcessLauncher, io::stdout()).execute()
}

/// Print the sweep without spawning anything
pub fn execute_dry_run(plan: &SweepPlan) -> Result<()> {
    SweepExecutor::new(plan, DryRunLauncher::new(io::stdout()), io::stdout()).execute()
}
