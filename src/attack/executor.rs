// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sweep execution loop

use crate::attack::launcher::Launcher;
use crate::attack::profile::SweepPlan;
use crate::types::ConfigEntry;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

/// Delimiter printed before and after every attack run.
pub const BANNER: &str =
    "#######################################################################################################";

/// Printed after the closing banner to separate runs.
pub const SPACER: &str = "   ";

pub struct SweepExecutor<'a, L, W> {
    plan: &'a SweepPlan,
    launcher: L,
    out: W,
}

impl<'a, L: Launcher, W: Write> SweepExecutor<'a, L, W> {
    pub fn new(plan: &'a SweepPlan, launcher: L, out: W) -> Self {
        Self {
            plan,
            launcher,
            out,
        }
    }

    /// Runs every entry in plan order, one at a time.
    ///
    /// A run that exits non-zero does not stop the sweep. A run that cannot
    /// be launched does: the error is returned and later entries are skipped.
    pub fn execute(&mut self) -> Result<()> {
        let plan = self.plan;
        info!(entries = plan.entries.len(), "starting sweep");

        for (index, entry) in plan.entries.iter().enumerate() {
            self.execute_single(index, entry)?;
        }

        info!("sweep finished");
        Ok(())
    }

    fn execute_single(&mut self, index: usize, entry: &ConfigEntry) -> Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out, "Training model with: n_steps={}:", entry.step_label())?;
        // Child output goes straight to the inherited descriptors.
        self.out.flush()?;

        let invocation = self.plan.invocation_for(entry);
        self.launcher.launch(&invocation).with_context(|| {
            format!(
                "attack run {}/{} ({}) failed to launch",
                index + 1,
                self.plan.entries.len(),
                entry
            )
        })?;

        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out, "{}", SPACER)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_parts(self) -> (L, W) {
        (self.launcher, self.out)
    }
}
